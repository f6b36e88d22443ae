use super::negation;
use crate::context::ActivationContext;
use crate::ports::activator::{ActivationError, ActivatorKind, ProfileActivator};
use profile_manifest::Profile;

/// Activates on a user or system property, user properties first.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyProfileActivator;

impl ProfileActivator for PropertyProfileActivator {
    fn kind(&self) -> ActivatorKind {
        ActivatorKind::Property
    }

    fn is_active(
        &self,
        profile: &Profile,
        context: &ActivationContext,
    ) -> Result<bool, ActivationError> {
        let Some(property) = profile.activation.as_ref().and_then(|a| a.property.as_ref()) else {
            return Ok(false);
        };

        let (reverse_name, name) = negation(&property.name);
        if name.is_empty() {
            return Err(ActivationError::InvalidCondition {
                kind: ActivatorKind::Property,
                reason: "the property name is required".to_string(),
            });
        }

        let actual = context.property(name);

        match property.value.as_deref().filter(|v| !v.is_empty()) {
            Some(expected) => {
                let (reverse_value, expected) = negation(expected);
                Ok((actual == Some(expected)) != reverse_value)
            }
            None => {
                let present = actual.is_some_and(|v| !v.is_empty());
                Ok(present != reverse_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_manifest::{Activation, ActivationProperty};

    fn check(property: ActivationProperty, context: &ActivationContext) -> Result<bool, ActivationError> {
        let profile = Profile::new("p").with_activation(Activation::default().with_property(property));
        PropertyProfileActivator.is_active(&profile, context)
    }

    #[test]
    fn test_presence_and_absence() {
        let context = ActivationContext::new()
            .with_system_property("ci", "1")
            .with_system_property("blank", "");

        assert!(check(ActivationProperty::present("ci"), &context).unwrap());
        assert!(!check(ActivationProperty::present("!ci"), &context).unwrap());
        assert!(!check(ActivationProperty::present("blank"), &context).unwrap());
        assert!(check(ActivationProperty::present("!absent"), &context).unwrap());
    }

    #[test]
    fn test_value_match_prefers_user_properties() {
        let context = ActivationContext::new()
            .with_system_property("env", "prod")
            .with_user_property("env", "dev");

        assert!(check(ActivationProperty::equals("env", "dev"), &context).unwrap());
        assert!(!check(ActivationProperty::equals("env", "prod"), &context).unwrap());
        assert!(check(ActivationProperty::equals("env", "!prod"), &context).unwrap());
        assert!(check(ActivationProperty::equals("other", "!prod"), &context).unwrap());
    }

    #[test]
    fn test_blank_name_is_an_error() {
        let err = check(ActivationProperty::present("!"), &ActivationContext::new()).unwrap_err();
        assert!(matches!(err, ActivationError::InvalidCondition { kind: ActivatorKind::Property, .. }));
    }
}
