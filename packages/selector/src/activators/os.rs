use super::negation;
use crate::context::ActivationContext;
use crate::ports::activator::{ActivationError, ActivatorKind, ProfileActivator};
use profile_manifest::{OsFamily, Profile};

const OS_NAME: &str = "os.name";
const OS_ARCH: &str = "os.arch";
const OS_VERSION: &str = "os.version";

/// Activates on the host OS as published in `os.name`, `os.arch` and
/// `os.version`. Comparisons ignore case; every attribute may be negated.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperatingSystemProfileActivator;

impl ProfileActivator for OperatingSystemProfileActivator {
    fn kind(&self) -> ActivatorKind {
        ActivatorKind::Os
    }

    fn is_active(
        &self,
        profile: &Profile,
        context: &ActivationContext,
    ) -> Result<bool, ActivationError> {
        let Some(os) = profile.activation.as_ref().and_then(|a| a.os.as_ref()) else {
            return Ok(false);
        };
        if os.is_empty() {
            return Ok(false);
        }

        if let Some(family) = &os.family {
            let name = fact(context, OS_NAME)?;
            let (reverse, family) = negation(family);
            if family_matches(family, &name)? == reverse {
                return Ok(false);
            }
        }

        for (expected, key) in [(&os.name, OS_NAME), (&os.arch, OS_ARCH), (&os.version, OS_VERSION)] {
            if let Some(expected) = expected {
                let actual = fact(context, key)?;
                let (reverse, expected) = negation(expected);
                if (actual == expected.to_lowercase()) == reverse {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

fn fact(context: &ActivationContext, key: &str) -> Result<String, ActivationError> {
    context
        .system_property(key)
        .map(str::to_lowercase)
        .ok_or_else(|| ActivationError::MissingFact(key.to_string()))
}

/// `os_name` must already be lowercase.
fn family_matches(family: &str, os_name: &str) -> Result<bool, ActivationError> {
    let Some(family) = OsFamily::parse(family) else {
        return Err(ActivationError::InvalidCondition {
            kind: ActivatorKind::Os,
            reason: format!("unknown OS family '{}'", family),
        });
    };

    let windows = os_name.contains("windows");
    let win9x = windows
        && ["95", "98", " me", " ce"]
            .iter()
            .any(|marker| os_name.contains(marker));
    let mac = os_name.contains("mac");

    Ok(match family {
        OsFamily::Windows | OsFamily::Dos => windows,
        OsFamily::Win9x => win9x,
        OsFamily::WinNt => windows && !win9x,
        OsFamily::Mac => mac,
        OsFamily::Unix => !windows && (!mac || os_name.ends_with('x')),
        OsFamily::Linux => os_name.contains("linux"),
    })
}
