use crate::context::ActivationContext;
use crate::ports::activator::{ActivationError, ActivatorKind};
use crate::ports::problems::{Problem, ProblemCollector, Severity};
use crate::registry::ActivatorRegistry;
use profile_manifest::Profile;

/// Outcome of evaluating a profile's conditions.
enum Evaluation {
    Satisfied,
    Unsatisfied,
    /// A condition could not be evaluated; the profile is out of the running,
    /// default flag included.
    Failed,
}

/// Calculates the active profiles among a set of candidates.
///
/// Every condition present on a profile must hold for it to activate. Explicit
/// deactivation beats everything, explicit activation beats conditions, and
/// local `active-by-default` profiles only apply when no other local profile
/// was activated explicitly or by its conditions.
#[derive(Debug)]
pub struct ProfileSelector {
    registry: ActivatorRegistry,
}

impl ProfileSelector {
    pub fn new(registry: ActivatorRegistry) -> Self {
        Self { registry }
    }

    /// Selector backed by [`ActivatorRegistry::standard`].
    pub fn standard() -> Self {
        Self::new(ActivatorRegistry::standard())
    }

    /// Returns the active profiles in candidate order, followed by any
    /// deferred local defaults. Activator failures never abort selection:
    /// the profile is left out, even if it is active by default, and a
    /// problem is recorded.
    pub fn active_profiles<'a>(
        &self,
        profiles: &'a [Profile],
        context: &ActivationContext,
        problems: &mut dyn ProblemCollector,
    ) -> Vec<&'a Profile> {
        let mut active = Vec::with_capacity(profiles.len());
        let mut local_defaults = Vec::new();
        let mut local_activated = false;

        for profile in profiles {
            if context.is_explicitly_inactive(&profile.id) {
                tracing::debug!(profile = %profile.id, "profile explicitly deactivated");
                continue;
            }

            if context.is_explicitly_active(&profile.id) {
                tracing::debug!(profile = %profile.id, "profile explicitly activated");
            } else {
                match self.evaluate(profile, context, problems) {
                    Evaluation::Satisfied => {
                        tracing::debug!(profile = %profile.id, "profile activated by its conditions");
                    }
                    Evaluation::Failed => continue,
                    Evaluation::Unsatisfied => {
                        if profile.is_active_by_default() {
                            if profile.is_local() {
                                tracing::debug!(profile = %profile.id, "deferring local default profile");
                                local_defaults.push(profile);
                            } else {
                                tracing::debug!(profile = %profile.id, source = %profile.source, "profile active by default");
                                active.push(profile);
                            }
                        }
                        continue;
                    }
                }
            }

            active.push(profile);
            if profile.is_local() {
                local_activated = true;
            }
        }

        if local_activated {
            if !local_defaults.is_empty() {
                tracing::debug!(
                    count = local_defaults.len(),
                    "discarding local default profiles: another local profile is active"
                );
            }
        } else {
            active.extend(local_defaults);
        }

        active
    }

    fn evaluate(
        &self,
        profile: &Profile,
        context: &ActivationContext,
        problems: &mut dyn ProblemCollector,
    ) -> Evaluation {
        let Some(activation) = &profile.activation else {
            return Evaluation::Unsatisfied;
        };

        let kinds = ActivatorKind::present_in(activation);
        if kinds.is_empty() {
            return Evaluation::Unsatisfied;
        }

        for kind in kinds {
            let Some(activator) = self.registry.by_kind(kind) else {
                tracing::warn!(profile = %profile.id, %kind, "no activator registered");
                Self::report(
                    problems,
                    profile,
                    format!(
                        "No activator available for the {} condition of profile {}",
                        kind, profile.id
                    ),
                    ActivationError::MissingActivator(kind),
                );
                return Evaluation::Failed;
            };

            match activator.is_active(profile, context) {
                Ok(true) => continue,
                Ok(false) => return Evaluation::Unsatisfied,
                Err(e) => {
                    tracing::warn!(profile = %profile.id, %kind, error = %e, "activation check failed");
                    Self::report(
                        problems,
                        profile,
                        format!("Failed to determine activation for profile {}", profile.id),
                        e,
                    );
                    return Evaluation::Failed;
                }
            }
        }

        Evaluation::Satisfied
    }

    fn report(
        problems: &mut dyn ProblemCollector,
        profile: &Profile,
        message: String,
        cause: ActivationError,
    ) {
        problems.add(Problem {
            severity: Severity::Error,
            message,
            location: profile.location(),
            cause: Some(cause),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::activator::ProfileActivator;
    use crate::DefaultProblemCollector;
    use profile_manifest::{Activation, ActivationProperty, ProfileSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Answers from the condition text itself: `true`, `false`, or an error
    /// for anything else.
    struct ScriptedActivator {
        kind: ActivatorKind,
        calls: Arc<AtomicUsize>,
    }

    impl ProfileActivator for ScriptedActivator {
        fn kind(&self) -> ActivatorKind {
            self.kind
        }

        fn is_active(
            &self,
            profile: &Profile,
            _context: &ActivationContext,
        ) -> Result<bool, ActivationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let activation = profile.activation.as_ref().unwrap();
            let answer = match self.kind {
                ActivatorKind::Jdk => activation.jdk.clone().unwrap(),
                _ => activation.property.as_ref().unwrap().name.clone(),
            };
            match answer.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ActivationError::MissingFact(answer)),
            }
        }
    }

    fn selector() -> (ProfileSelector, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ActivatorRegistry::new();
        registry.register(ScriptedActivator {
            kind: ActivatorKind::Property,
            calls: calls.clone(),
        });
        registry.register(ScriptedActivator {
            kind: ActivatorKind::Jdk,
            calls: calls.clone(),
        });
        (ProfileSelector::new(registry), calls)
    }

    fn conditional(id: &str, answer: &str) -> Profile {
        Profile::new(id)
            .with_activation(Activation::default().with_property(ActivationProperty::present(answer)))
    }

    fn default_profile(id: &str) -> Profile {
        Profile::new(id).with_activation(Activation::by_default())
    }

    fn ids(profiles: &[&Profile]) -> Vec<String> {
        profiles.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_local_default_appended_after_inherited_default() {
        let (selector, _) = selector();
        let profiles = vec![
            default_profile("a"),
            conditional("b", "false"),
            default_profile("c").with_source(ProfileSource::Inherited),
        ];
        let mut problems = DefaultProblemCollector::new();

        let active = selector.active_profiles(&profiles, &ActivationContext::new(), &mut problems);

        assert_eq!(ids(&active), vec!["c", "a"]);
        assert!(problems.is_empty());
    }

    #[test]
    fn test_local_condition_discards_local_defaults() {
        let (selector, _) = selector();
        let profiles = vec![default_profile("a"), conditional("d", "true")];

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut DefaultProblemCollector::new());

        assert_eq!(ids(&active), vec!["d"]);
    }

    #[test]
    fn test_explicit_local_activation_discards_local_defaults() {
        let (selector, _) = selector();
        let profiles = vec![default_profile("a"), Profile::new("manual")];
        let context = ActivationContext::new().with_active_profile_ids(["manual"]);

        let active = selector.active_profiles(&profiles, &context, &mut DefaultProblemCollector::new());

        assert_eq!(ids(&active), vec!["manual"]);
    }

    #[test]
    fn test_non_local_activation_keeps_local_defaults() {
        let (selector, _) = selector();
        let profiles = vec![
            conditional("settings", "true").with_source(ProfileSource::Settings),
            default_profile("a"),
        ];

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut DefaultProblemCollector::new());

        assert_eq!(ids(&active), vec!["settings", "a"]);
    }

    #[test]
    fn test_deactivation_wins() {
        let (selector, calls) = selector();
        let profiles = vec![
            conditional("cond", "true"),
            default_profile("def").with_source(ProfileSource::Inherited),
            Profile::new("both"),
        ];
        let context = ActivationContext::new()
            .with_inactive_profile_ids(["cond", "def", "both"])
            .with_active_profile_ids(["both"]);

        let active = selector.active_profiles(&profiles, &context, &mut DefaultProblemCollector::new());

        assert!(active.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_explicit_activation_skips_conditions() {
        let (selector, calls) = selector();
        let profiles = vec![conditional("x", "false"), conditional("y", "boom")];
        let context = ActivationContext::new().with_active_profile_ids(["x", "y"]);
        let mut problems = DefaultProblemCollector::new();

        let active = selector.active_profiles(&profiles, &context, &mut problems);

        assert_eq!(ids(&active), vec!["x", "y"]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(problems.is_empty());
    }

    #[test]
    fn test_all_conditions_must_hold() {
        let (selector, calls) = selector();
        let mixed = Profile::new("mixed").with_activation(
            Activation::default()
                .with_jdk("false")
                .with_property(ActivationProperty::present("true")),
        );
        let both = Profile::new("both").with_activation(
            Activation::default()
                .with_jdk("true")
                .with_property(ActivationProperty::present("true")),
        );
        let profiles = vec![mixed, both];

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut DefaultProblemCollector::new());

        assert_eq!(ids(&active), vec!["both"]);
        // jdk=false short-circuits before the property check of "mixed".
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_inert_activation_never_activates() {
        let (selector, calls) = selector();
        let profiles = vec![
            Profile::new("inert").with_activation(Activation::default()),
            Profile::new("bare"),
        ];

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut DefaultProblemCollector::new());

        assert!(active.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_activator_failure_is_recorded_once() {
        let (selector, _) = selector();
        let failing = Profile::new("failing").with_activation(
            Activation::by_default()
                .with_jdk("boom")
                .with_property(ActivationProperty::present("true")),
        );
        let profiles = vec![failing, conditional("ok", "true")];
        let mut problems = DefaultProblemCollector::new();

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut problems);

        assert_eq!(ids(&active), vec!["ok"]);
        assert_eq!(problems.problems().len(), 1);
        let problem = &problems.problems()[0];
        assert_eq!(problem.severity, Severity::Error);
        assert_eq!(problem.message, "Failed to determine activation for profile failing");
        assert_eq!(problem.location, "local profile 'failing'");
        assert_eq!(
            problem.cause,
            Some(ActivationError::MissingFact("boom".to_string()))
        );
    }

    #[test]
    fn test_failed_evaluation_skips_default_fallback() {
        let (selector, _) = selector();
        let profiles = vec![
            Profile::new("flaky").with_activation(
                Activation::by_default().with_property(ActivationProperty::present("boom")),
            ),
            Profile::new("flaky-inherited")
                .with_activation(
                    Activation::by_default().with_property(ActivationProperty::present("boom")),
                )
                .with_source(ProfileSource::Inherited),
            default_profile("fallback"),
        ];
        let mut problems = DefaultProblemCollector::new();

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut problems);

        assert_eq!(ids(&active), vec!["fallback"]);
        assert_eq!(problems.problems().len(), 2);
    }

    #[test]
    fn test_missing_activator_is_a_problem() {
        let (selector, _) = selector();
        let profiles = vec![Profile::new("unix").with_activation(
            Activation::default().with_os(profile_manifest::ActivationOs::family("unix")),
        )];
        let mut problems = DefaultProblemCollector::new();

        let active =
            selector.active_profiles(&profiles, &ActivationContext::new(), &mut problems);

        assert!(active.is_empty());
        assert_eq!(problems.problems().len(), 1);
        assert_eq!(
            problems.problems()[0].cause,
            Some(ActivationError::MissingActivator(ActivatorKind::Os))
        );
    }

    #[test]
    fn test_input_order_is_preserved() {
        let (selector, _) = selector();
        let profiles = vec![
            default_profile("d1"),
            conditional("c1", "true").with_source(ProfileSource::Inherited),
            default_profile("d2"),
            Profile::new("e1"),
            conditional("c2", "true").with_source(ProfileSource::Settings),
        ];
        let context = ActivationContext::new().with_active_profile_ids(["e1"]);

        let active = selector.active_profiles(&profiles, &context, &mut DefaultProblemCollector::new());

        assert_eq!(ids(&active), vec!["c1", "e1", "c2"]);

        let active = selector.active_profiles(&profiles, &ActivationContext::new(), &mut DefaultProblemCollector::new());
        assert_eq!(ids(&active), vec!["c1", "c2", "d1", "d2"]);
    }
}
