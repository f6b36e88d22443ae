use anyhow::{Context, Result};
use profile_manifest::{ManifestParser, Profile, ProfileManifest, ProfileSource};
use std::path::{Path, PathBuf};

/// Resolves `--manifest`: a file is used as-is, a directory (or nothing,
/// meaning the current directory) is searched for a descriptor.
pub fn locate_manifest(path: Option<&Path>) -> Result<PathBuf> {
    let start = match path {
        Some(path) if path.is_file() => return Ok(path.to_path_buf()),
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    ManifestParser::find_manifest(&start).map(|(path, _)| path)
}

pub fn load_manifest(path: &Path, source: ProfileSource) -> Result<ProfileManifest> {
    tracing::debug!(path = %path.display(), %source, "loading profile descriptor");
    ManifestParser::parse_file(path, source)
}

/// Candidate profiles in evaluation order: settings, then parents, then the
/// local descriptor.
pub fn load_candidates(
    local: &Path,
    parents: &[PathBuf],
    settings: Option<&Path>,
) -> Result<Vec<Profile>> {
    let mut profiles = Vec::new();

    if let Some(settings) = settings {
        profiles.extend(load_manifest(settings, ProfileSource::Settings)?.profiles);
    }
    for parent in parents {
        profiles.extend(load_manifest(parent, ProfileSource::Inherited)?.profiles);
    }
    profiles.extend(load_manifest(local, ProfileSource::Local)?.profiles);

    Ok(profiles)
}

/// Splits `-P` values into (active, inactive) ids. A leading `!` or `-`
/// deactivates, a leading `+` is ignored.
pub fn split_profile_ids(values: &[String]) -> (Vec<String>, Vec<String>) {
    let mut active = Vec::new();
    let mut inactive = Vec::new();

    for value in values.iter().flat_map(|v| v.split(',')) {
        let value = value.trim();
        if let Some(id) = value.strip_prefix('!').or_else(|| value.strip_prefix('-')) {
            if !id.trim().is_empty() {
                inactive.push(id.trim().to_string());
            }
        } else {
            let id = value.strip_prefix('+').unwrap_or(value).trim();
            if !id.is_empty() {
                active.push(id.to_string());
            }
        }
    }

    (active, inactive)
}

/// Parses a `-D` value: `key=value`, or a bare `key` meaning `key=true`.
pub fn parse_define(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key.trim(), value),
        None => (raw.trim(), "true"),
    };

    if key.is_empty() {
        return Err(format!("'{}' has no property name", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
