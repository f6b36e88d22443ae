use crate::Activation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Where a profile was declared, relative to the descriptor being built.
///
/// The origin is assigned by whoever loads the descriptor; it is never read
/// from the file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// Declared directly in the descriptor under evaluation.
    #[default]
    Local,
    /// Declared in a parent descriptor.
    Inherited,
    /// Declared in user or global settings.
    Settings,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSource::Local => write!(f, "local"),
            ProfileSource::Inherited => write!(f, "inherited"),
            ProfileSource::Settings => write!(f, "settings"),
        }
    }
}

/// A named bundle of configuration that is included only when activated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    /// Identifier, unique among the candidate profiles of one build.
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Conditions controlling automatic activation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,

    /// Payload contributed by the profile once active.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,

    #[serde(skip)]
    pub source: ProfileSource,

    /// Descriptor file the profile was loaded from.
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

impl Profile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            activation: None,
            properties: BTreeMap::new(),
            source: ProfileSource::Local,
            source_file: None,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    pub fn with_source(mut self, source: ProfileSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn is_local(&self) -> bool {
        self.source == ProfileSource::Local
    }

    /// True when an activation block is present and carries the default flag.
    pub fn is_active_by_default(&self) -> bool {
        self.activation
            .as_ref()
            .is_some_and(|activation| activation.active_by_default)
    }

    /// Human-readable location used in problem reports.
    pub fn location(&self) -> String {
        match &self.source_file {
            Some(path) => format!("{} (profile '{}')", path.display(), self.id),
            None => format!("{} profile '{}'", self.source, self.id),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.source)
    }
}
