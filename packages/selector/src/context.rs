use crate::system::{JdkDetector, PlatformDetector};
use profile_manifest::Profile;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Read-only facts a selection runs against.
///
/// The explicit active and inactive id sets are expected to be disjoint.
/// When an id appears in both, deactivation wins because it is checked first.
#[derive(Debug, Clone, Default)]
pub struct ActivationContext {
    active_profile_ids: BTreeSet<String>,
    inactive_profile_ids: BTreeSet<String>,
    system_properties: BTreeMap<String, String>,
    user_properties: BTreeMap<String, String>,
    project_directory: Option<PathBuf>,
}

impl ActivationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with facts about the running host: `os.name`,
    /// `os.arch`, `os.version`, `user.home`, `java.version` (when a `java`
    /// binary answers) and every environment variable as `env.<NAME>`.
    pub fn from_environment() -> Self {
        let mut context = Self::new();

        let platform = PlatformDetector::detect();
        tracing::debug!("Detected platform: {}", platform);
        context = context
            .with_system_property("os.name", platform.os_name())
            .with_system_property("os.arch", platform.os_arch())
            .with_system_property("os.version", platform.os_release());

        if let Some(home) = dirs::home_dir() {
            context = context.with_system_property("user.home", home.display().to_string());
        }

        match JdkDetector::detect() {
            Ok(version) => {
                context = context.with_system_property("java.version", version);
            }
            Err(e) => tracing::debug!("No JDK detected: {:#}", e),
        }

        for (key, value) in std::env::vars() {
            context.system_properties.insert(format!("env.{}", key), value);
        }

        context
    }

    pub fn with_active_profile_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_profile_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_inactive_profile_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inactive_profile_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_system_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.system_properties.insert(key.into(), value.into());
        self
    }

    pub fn with_user_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_properties.insert(key.into(), value.into());
        self
    }

    pub fn with_user_properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_properties
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_project_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_directory = Some(dir.into());
        self
    }

    pub fn is_explicitly_active(&self, id: &str) -> bool {
        self.active_profile_ids.contains(id)
    }

    pub fn is_explicitly_inactive(&self, id: &str) -> bool {
        self.inactive_profile_ids.contains(id)
    }

    pub fn system_properties(&self) -> &BTreeMap<String, String> {
        &self.system_properties
    }

    pub fn system_property(&self, key: &str) -> Option<&str> {
        self.system_properties.get(key).map(String::as_str)
    }

    pub fn user_property(&self, key: &str) -> Option<&str> {
        self.user_properties.get(key).map(String::as_str)
    }

    /// User properties shadow system properties.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.user_property(key).or_else(|| self.system_property(key))
    }

    pub fn project_directory(&self) -> Option<&Path> {
        self.project_directory.as_deref()
    }

    /// Requested ids (active or inactive) that name none of `profiles`.
    pub fn unknown_profile_ids<'a, I>(&self, profiles: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let known: BTreeSet<&str> = profiles.into_iter().map(|p| p.id.as_str()).collect();
        self.active_profile_ids
            .iter()
            .chain(self.inactive_profile_ids.iter())
            .filter(|id| !known.contains(id.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
