use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Conditions under which a profile activates on its own.
///
/// Every condition that is present must hold. `active-by-default` is only
/// consulted when no condition holds and no explicit override names the
/// profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct Activation {
    #[serde(default)]
    pub active_by_default: bool,

    /// JDK version prefix (`11`, `!1.8`) or range (`[11,17)`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jdk: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<ActivationOs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<ActivationProperty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ActivationFile>,
}

impl Activation {
    /// An activation block with only the default flag set.
    pub fn by_default() -> Self {
        Self {
            active_by_default: true,
            ..Self::default()
        }
    }

    pub fn with_jdk(mut self, jdk: impl Into<String>) -> Self {
        self.jdk = Some(jdk.into());
        self
    }

    pub fn with_os(mut self, os: ActivationOs) -> Self {
        self.os = Some(os);
        self
    }

    pub fn with_property(mut self, property: ActivationProperty) -> Self {
        self.property = Some(property);
        self
    }

    pub fn with_file(mut self, file: ActivationFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Whether any condition descriptor is present.
    pub fn has_conditions(&self) -> bool {
        self.file.is_some() || self.jdk.is_some() || self.os.is_some() || self.property.is_some()
    }
}

/// Matches the host operating system. Each attribute may be negated with `!`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ActivationOs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `windows`, `unix`, `mac`, `linux`, `dos`, `win9x` or `winnt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ActivationOs {
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.family.is_none() && self.arch.is_none() && self.version.is_none()
    }
}

/// OS families an `os` condition may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    Win9x,
    WinNt,
    Dos,
    Mac,
    Unix,
    Linux,
}

impl OsFamily {
    pub const ALL: [OsFamily; 7] = [
        OsFamily::Windows,
        OsFamily::Win9x,
        OsFamily::WinNt,
        OsFamily::Dos,
        OsFamily::Mac,
        OsFamily::Unix,
        OsFamily::Linux,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Win9x => "win9x",
            OsFamily::WinNt => "winnt",
            OsFamily::Dos => "dos",
            OsFamily::Mac => "mac",
            OsFamily::Unix => "unix",
            OsFamily::Linux => "linux",
        }
    }

    /// Case-insensitive lookup. The `!` prefix must already be stripped.
    pub fn parse(family: &str) -> Option<Self> {
        let family = family.trim();
        Self::ALL
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(family))
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matches a user or system property.
///
/// `!name` activates when the property is absent. A `value` (optionally
/// `!value`) compares for equality; without one, presence is enough.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ActivationProperty {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ActivationProperty {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Matches on the presence or absence of a file.
///
/// `exists` wins when both are given. Paths may use `${basedir}` and
/// property placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ActivationFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

impl ActivationFile {
    pub fn exists(path: impl Into<String>) -> Self {
        Self {
            exists: Some(path.into()),
            missing: None,
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        Self {
            exists: None,
            missing: Some(path.into()),
        }
    }
}
