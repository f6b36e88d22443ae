use crate::{JdkRequirement, OsFamily, ProfileManifest};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, JsonSchema, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_info(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Info,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ManifestValidator;

impl ManifestValidator {
    pub fn validate(manifest: &ProfileManifest) -> ValidationResult {
        let mut result = ValidationResult::new();

        Self::validate_identifiers(manifest, &mut result);
        Self::validate_recommended_fields(manifest, &mut result);
        Self::validate_activations(manifest, &mut result);

        result
    }

    fn validate_identifiers(manifest: &ProfileManifest, result: &mut ValidationResult) {
        let mut seen = HashSet::new();

        for (index, profile) in manifest.profiles.iter().enumerate() {
            if profile.id.trim().is_empty() {
                result.add_error(
                    format!("profiles[{}].id", index),
                    "Profile id must not be blank",
                );
                continue;
            }

            if !seen.insert(profile.id.as_str()) {
                result.add_error(
                    format!("profiles[{}].id", index),
                    format!("Duplicate profile id '{}'", profile.id),
                );
            }
        }
    }

    fn validate_recommended_fields(manifest: &ProfileManifest, result: &mut ValidationResult) {
        if manifest.project.name.is_empty() {
            result.add_warning(
                "project.name",
                "RECOMMENDED: Add 'project.name' to identify the descriptor",
            );
        }

        for (index, profile) in manifest.profiles.iter().enumerate() {
            if profile.description.is_empty() {
                result.add_warning(
                    format!("profiles[{}].description", index),
                    format!("RECOMMENDED: Add description for profile '{}'", profile.id),
                );
            }
        }
    }

    fn validate_activations(manifest: &ProfileManifest, result: &mut ValidationResult) {
        for (index, profile) in manifest.profiles.iter().enumerate() {
            let Some(activation) = &profile.activation else {
                continue;
            };
            let field = format!("profiles[{}].activation", index);

            if !activation.has_conditions() && !activation.active_by_default {
                result.add_info(
                    field.clone(),
                    format!(
                        "Profile '{}' has an activation block without conditions; it only activates explicitly",
                        profile.id
                    ),
                );
            }

            if let Some(jdk) = &activation.jdk {
                if let Err(e) = JdkRequirement::parse(jdk) {
                    result.add_error(format!("{}.jdk", field), e.to_string());
                }
            }

            if let Some(os) = &activation.os {
                if os.is_empty() {
                    result.add_warning(
                        format!("{}.os", field),
                        format!(
                            "Profile '{}' has an empty os condition which never matches",
                            profile.id
                        ),
                    );
                }
                if let Some(family) = &os.family {
                    let name = family.strip_prefix('!').unwrap_or(family);
                    if OsFamily::parse(name).is_none() {
                        let known: Vec<_> = OsFamily::ALL.iter().map(|f| f.as_str()).collect();
                        result.add_error(
                            format!("{}.os.family", field),
                            format!(
                                "Profile '{}' names unknown OS family '{}' (expected one of: {})",
                                profile.id,
                                name,
                                known.join(", ")
                            ),
                        );
                    }
                }
            }

            if let Some(property) = &activation.property {
                let name = property.name.trim_start_matches('!').trim();
                if name.is_empty() {
                    result.add_error(
                        format!("{}.property.name", field),
                        format!("Profile '{}' has a property condition without a name", profile.id),
                    );
                }
            }

            if let Some(file) = &activation.file {
                let blank = |path: &Option<String>| {
                    path.as_deref().map_or(true, |p| p.trim().is_empty())
                };
                if blank(&file.exists) && blank(&file.missing) {
                    result.add_warning(
                        format!("{}.file", field),
                        format!(
                            "Profile '{}' has a file condition with neither 'exists' nor 'missing'",
                            profile.id
                        ),
                    );
                }
            }
        }
    }
}
