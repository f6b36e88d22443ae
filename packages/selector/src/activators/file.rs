use crate::context::ActivationContext;
use crate::ports::activator::{ActivationError, ActivatorKind, ProfileActivator};
use profile_manifest::Profile;
use std::path::PathBuf;

/// Activates on the presence (`exists`) or absence (`missing`) of a path.
///
/// `${basedir}` expands to the project directory; any other `${name}` is
/// looked up as a property. Relative paths resolve against the project
/// directory when one is known.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProfileActivator;

impl ProfileActivator for FileProfileActivator {
    fn kind(&self) -> ActivatorKind {
        ActivatorKind::File
    }

    fn is_active(
        &self,
        profile: &Profile,
        context: &ActivationContext,
    ) -> Result<bool, ActivationError> {
        let Some(file) = profile.activation.as_ref().and_then(|a| a.file.as_ref()) else {
            return Ok(false);
        };

        let not_blank = |path: &Option<String>| path.clone().filter(|p| !p.trim().is_empty());
        let (raw, should_exist) = match (not_blank(&file.exists), not_blank(&file.missing)) {
            (Some(path), _) => (path, true),
            (None, Some(path)) => (path, false),
            (None, None) => return Ok(false),
        };

        let path = resolve(&interpolate(&raw, context)?, context);
        let exists = path.exists();
        tracing::trace!(profile = %profile.id, path = %path.display(), exists, "checked activation file");

        Ok(exists == should_exist)
    }
}

fn interpolate(raw: &str, context: &ActivationContext) -> Result<String, ActivationError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unterminated placeholders are kept verbatim.
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = &after[..end];
        let value = match name {
            "basedir" | "project.basedir" => context
                .project_directory()
                .map(|dir| dir.display().to_string()),
            _ => context.property(name).map(str::to_string),
        };
        let value = value.ok_or_else(|| ActivationError::Interpolation {
            path: raw.to_string(),
            placeholder: name.to_string(),
        })?;

        out.push_str(&value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn resolve(path: &str, context: &ActivationContext) -> PathBuf {
    let path = PathBuf::from(path.trim());
    match context.project_directory() {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_manifest::{Activation, ActivationFile};

    fn check(file: ActivationFile, context: &ActivationContext) -> Result<bool, ActivationError> {
        let profile = Profile::new("p").with_activation(Activation::default().with_file(file));
        FileProfileActivator.is_active(&profile, context)
    }

    #[test]
    fn test_exists_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let context = ActivationContext::new().with_project_directory(dir.path());

        assert!(check(ActivationFile::exists("marker"), &context).unwrap());
        assert!(check(ActivationFile::exists("${basedir}/marker"), &context).unwrap());
        assert!(!check(ActivationFile::exists("absent"), &context).unwrap());
        assert!(check(ActivationFile::missing("absent"), &context).unwrap());
        assert!(!check(ActivationFile::missing("marker"), &context).unwrap());
    }

    #[test]
    fn test_exists_wins_over_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let context = ActivationContext::new().with_project_directory(dir.path());

        let both = ActivationFile {
            exists: Some("marker".to_string()),
            missing: Some("marker".to_string()),
        };
        assert!(check(both, &context).unwrap());

        let blank_exists = ActivationFile {
            exists: Some("  ".to_string()),
            missing: Some("absent".to_string()),
        };
        assert!(check(blank_exists, &context).unwrap());
        assert!(!check(ActivationFile::default(), &context).unwrap());
    }

    #[test]
    fn test_property_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.xml"), "").unwrap();
        let context = ActivationContext::new()
            .with_system_property("user.home", dir.path().display().to_string());

        assert!(check(ActivationFile::exists("${user.home}/settings.xml"), &context).unwrap());

        let err = check(ActivationFile::exists("${nope}/x"), &context).unwrap_err();
        assert_eq!(
            err,
            ActivationError::Interpolation {
                path: "${nope}/x".to_string(),
                placeholder: "nope".to_string(),
            }
        );

        let err = check(ActivationFile::exists("${basedir}/x"), &context).unwrap_err();
        assert!(matches!(err, ActivationError::Interpolation { .. }));
    }
}
