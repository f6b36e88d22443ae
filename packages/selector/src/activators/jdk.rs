use crate::context::ActivationContext;
use crate::ports::activator::{ActivationError, ActivatorKind, ProfileActivator};
use profile_manifest::{JdkRequirement, Profile};

const JAVA_VERSION: &str = "java.version";

/// Activates on the `java.version` system property, by prefix or range.
#[derive(Debug, Default, Clone, Copy)]
pub struct JdkVersionProfileActivator;

impl ProfileActivator for JdkVersionProfileActivator {
    fn kind(&self) -> ActivatorKind {
        ActivatorKind::Jdk
    }

    fn is_active(
        &self,
        profile: &Profile,
        context: &ActivationContext,
    ) -> Result<bool, ActivationError> {
        let Some(jdk) = profile.activation.as_ref().and_then(|a| a.jdk.as_deref()) else {
            return Ok(false);
        };

        let requirement = JdkRequirement::parse(jdk)?;
        let version = context
            .system_property(JAVA_VERSION)
            .ok_or_else(|| ActivationError::MissingFact(JAVA_VERSION.to_string()))?;

        Ok(requirement.matches(version)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_manifest::{Activation, JdkSpecError};

    fn check(jdk: &str, java: Option<&str>) -> Result<bool, ActivationError> {
        let profile = Profile::new("p").with_activation(Activation::default().with_jdk(jdk));
        let mut context = ActivationContext::new();
        if let Some(java) = java {
            context = context.with_system_property(JAVA_VERSION, java);
        }
        JdkVersionProfileActivator.is_active(&profile, &context)
    }

    #[test]
    fn test_prefix_and_range() {
        assert!(check("1.8", Some("1.8.0_292")).unwrap());
        assert!(!check("1.8", Some("17.0.2")).unwrap());
        assert!(check("!1.8", Some("17.0.2")).unwrap());
        assert!(check("[11,)", Some("17.0.2")).unwrap());
        assert!(!check("[11,17)", Some("17.0.2")).unwrap());
    }

    #[test]
    fn test_missing_java_version() {
        assert_eq!(
            check("17", None).unwrap_err(),
            ActivationError::MissingFact(JAVA_VERSION.to_string())
        );
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            check("[11,", Some("17")).unwrap_err(),
            ActivationError::JdkSpec(JdkSpecError::InvalidRange { .. })
        ));
        assert!(matches!(
            check("[11,)", Some("unknown")).unwrap_err(),
            ActivationError::JdkSpec(JdkSpecError::InvalidVersion(_))
        ));
    }
}
