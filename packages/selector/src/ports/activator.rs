use crate::context::ActivationContext;
use profile_manifest::{Activation, JdkSpecError, Profile};
use std::fmt;
use thiserror::Error;

/// The closed set of condition kinds an activation block can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivatorKind {
    File,
    Jdk,
    Os,
    Property,
}

impl ActivatorKind {
    /// Evaluation order used by the selector.
    pub const ALL: [ActivatorKind; 4] = [
        ActivatorKind::File,
        ActivatorKind::Jdk,
        ActivatorKind::Os,
        ActivatorKind::Property,
    ];

    /// Condition kinds whose descriptor is present, in evaluation order.
    pub fn present_in(activation: &Activation) -> Vec<ActivatorKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| match kind {
                ActivatorKind::File => activation.file.is_some(),
                ActivatorKind::Jdk => activation.jdk.is_some(),
                ActivatorKind::Os => activation.os.is_some(),
                ActivatorKind::Property => activation.property.is_some(),
            })
            .collect()
    }
}

impl fmt::Display for ActivatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivatorKind::File => write!(f, "file"),
            ActivatorKind::Jdk => write!(f, "jdk"),
            ActivatorKind::Os => write!(f, "os"),
            ActivatorKind::Property => write!(f, "property"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    #[error("Activation fact '{0}' is not available")]
    MissingFact(String),
    #[error(transparent)]
    JdkSpec(#[from] JdkSpecError),
    #[error("Cannot resolve '${{{placeholder}}}' in path '{path}'")]
    Interpolation { path: String, placeholder: String },
    #[error("Invalid {kind} condition: {reason}")]
    InvalidCondition { kind: ActivatorKind, reason: String },
    #[error("No activator registered for the {0} condition")]
    MissingActivator(ActivatorKind),
}

/// Evaluates one condition kind of a profile against the activation context.
///
/// Implementations must be stateless: the same registry is shared by every
/// selection, possibly from several threads.
pub trait ProfileActivator: Send + Sync {
    fn kind(&self) -> ActivatorKind;

    /// Returns whether this kind's condition on `profile` holds. Only called
    /// when the profile carries a condition of this kind.
    fn is_active(
        &self,
        profile: &Profile,
        context: &ActivationContext,
    ) -> Result<bool, ActivationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_manifest::{ActivationOs, ActivationProperty};

    #[test]
    fn test_present_kinds_follow_fixed_order() {
        let activation = Activation::default()
            .with_property(ActivationProperty::present("ci"))
            .with_os(ActivationOs::family("unix"))
            .with_jdk("17");

        assert_eq!(
            ActivatorKind::present_in(&activation),
            vec![ActivatorKind::Jdk, ActivatorKind::Os, ActivatorKind::Property]
        );
        assert!(ActivatorKind::present_in(&Activation::by_default()).is_empty());
    }

    #[test]
    fn test_interpolation_message() {
        let err = ActivationError::Interpolation {
            path: "${missing}/x".to_string(),
            placeholder: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot resolve '${missing}' in path '${missing}/x'");
    }
}
