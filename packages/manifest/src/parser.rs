use crate::{ProfileManifest, ProfileSource};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Multi-format descriptor parser (JSON, YAML, TOML)
pub struct ManifestParser;

/// Supported descriptor formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestParser {
    /// Auto-detect format from file extension, parse, and stamp every
    /// profile with `source` and the file path.
    pub fn parse_file(path: &Path, source: ProfileSource) -> Result<ProfileManifest> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile descriptor: {}", path.display()))?;

        let format = Self::detect_format(path)?;
        let mut manifest = Self::parse(&content, format)
            .with_context(|| format!("Invalid profile descriptor: {}", path.display()))?;
        manifest.assign_origin(source, Some(path));
        Ok(manifest)
    }

    /// Parse descriptor from string with explicit format
    pub fn parse(content: &str, format: ManifestFormat) -> Result<ProfileManifest> {
        match format {
            ManifestFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON descriptor")
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML descriptor")
            }
            ManifestFormat::Toml => {
                toml::from_str(content).context("Failed to parse TOML descriptor")
            }
        }
    }

    /// Detect format from file extension
    pub fn detect_format(path: &Path) -> Result<ManifestFormat> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(ManifestFormat::Json),
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            "toml" => Ok(ManifestFormat::Toml),
            _ => anyhow::bail!("Unsupported descriptor format: .{}", extension),
        }
    }

    /// Find a descriptor in `dir` with priority:
    /// 1. profiles.toml
    /// 2. profiles.json
    /// 3. profiles.yaml / profiles.yml
    pub fn find_manifest(dir: &Path) -> Result<(PathBuf, ManifestFormat)> {
        let candidates = [
            ("profiles.toml", ManifestFormat::Toml),
            ("profiles.json", ManifestFormat::Json),
            ("profiles.yaml", ManifestFormat::Yaml),
            ("profiles.yml", ManifestFormat::Yaml),
        ];

        for (filename, format) in candidates {
            let path = dir.join(filename);
            if path.exists() {
                return Ok((path, format));
            }
        }

        anyhow::bail!("No profile descriptor found in directory: {}", dir.display())
    }

    /// Serialize descriptor to string
    pub fn serialize(manifest: &ProfileManifest, format: ManifestFormat) -> Result<String> {
        match format {
            ManifestFormat::Json => {
                serde_json::to_string_pretty(manifest).context("Failed to serialize to JSON")
            }
            ManifestFormat::Yaml => {
                serde_yaml::to_string(manifest).context("Failed to serialize to YAML")
            }
            ManifestFormat::Toml => {
                toml::to_string_pretty(manifest).context("Failed to serialize to TOML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Activation, ActivationOs, ActivationProperty};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_toml_complete() {
        let toml_str = r#"
[project]
name = "my-app"

[[profiles]]
id = "dev"
description = "Development defaults"

[profiles.activation]
active-by-default = true

[[profiles]]
id = "unix-ci"

[profiles.activation]
jdk = "[11,)"

[profiles.activation.os]
family = "unix"

[profiles.activation.property]
name = "env.CI"

[profiles.properties]
"log.level" = "debug"
        "#;

        let manifest = ManifestParser::parse(toml_str, ManifestFormat::Toml).unwrap();

        assert_eq!(manifest.project.name, "my-app");
        assert_eq!(manifest.profiles.len(), 2);
        assert!(manifest.profiles[0].is_active_by_default());
        assert_eq!(
            manifest.profiles[1].activation,
            Some(
                Activation::default()
                    .with_jdk("[11,)")
                    .with_os(ActivationOs::family("unix"))
                    .with_property(ActivationProperty::present("env.CI"))
            )
        );
        assert_eq!(
            manifest.profiles[1].properties.get("log.level").map(String::as_str),
            Some("debug")
        );
    }

    #[test]
    fn test_parse_yaml_minimal() {
        let yaml = r#"
profiles:
  - id: release
    activation:
      property:
        name: release
        value: "true"
        "#;

        let manifest = ManifestParser::parse(yaml, ManifestFormat::Yaml).unwrap();
        assert_eq!(manifest.profiles.len(), 1);
        assert_eq!(
            manifest.profiles[0].activation.as_ref().and_then(|a| a.property.clone()),
            Some(ActivationProperty::equals("release", "true"))
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let json = r#"{ "profiles": [], "dependencies": {} }"#;
        assert!(ManifestParser::parse(json, ManifestFormat::Json).is_err());

        let toml_str = "[project]\nname = \"demo\"\nversion = \"1.0.0\"\n";
        assert!(ManifestParser::parse(toml_str, ManifestFormat::Toml).is_err());
    }

    #[test]
    fn test_parse_file_assigns_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, r#"{ "profiles": [{ "id": "a" }, { "id": "b" }] }"#).unwrap();

        let (found, format) = ManifestParser::find_manifest(dir.path()).unwrap();
        assert_eq!(found, path);
        assert_eq!(format, ManifestFormat::Json);

        let manifest = ManifestParser::parse_file(&path, ProfileSource::Inherited).unwrap();
        for profile in &manifest.profiles {
            assert_eq!(profile.source, ProfileSource::Inherited);
            assert_eq!(profile.source_file.as_deref(), Some(path.as_path()));
        }
    }

    #[test]
    fn test_roundtrip_json() {
        let mut manifest = ProfileManifest::default();
        manifest.project.name = "test".to_string();
        manifest
            .profiles
            .push(crate::Profile::new("dev").with_activation(Activation::by_default()));

        let json = ManifestParser::serialize(&manifest, ManifestFormat::Json).unwrap();
        let parsed = ManifestParser::parse(&json, ManifestFormat::Json).unwrap();

        assert_eq!(manifest, parsed);
    }
}
