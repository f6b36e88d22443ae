use clap::Parser;
use profile_manifest::{Profile, ProfileSource};
use profile_selector::{
    ActivationContext, DefaultProblemCollector, Problem, ProblemCollector, ProfileSelector,
    Severity,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::error::CliError;
use crate::ui::{self, Icon, Theme};
use crate::utils::loader;

#[derive(Parser, Debug)]
pub struct SelectCommand {
    /// Profile descriptor, or a directory containing profiles.toml/json/yaml
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Parent descriptors whose profiles are inherited
    #[arg(long = "parent", value_name = "PATH")]
    pub parents: Vec<PathBuf>,

    /// Settings descriptor with user-level profiles
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Comma-separated profile ids; prefix with '!' or '-' to deactivate
    #[arg(
        short = 'P',
        long = "activate-profiles",
        value_name = "IDS",
        allow_hyphen_values = true
    )]
    pub profiles: Vec<String>,

    /// User property, as KEY=VALUE or KEY (meaning KEY=true)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = loader::parse_define)]
    pub defines: Vec<(String, String)>,

    /// Override the detected Java version
    #[arg(long)]
    pub jdk: Option<String>,

    /// Project directory used for file conditions (defaults to the descriptor's directory)
    #[arg(long)]
    pub basedir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ActiveProfile<'a> {
    id: &'a str,
    source: ProfileSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
struct SelectionReport<'a> {
    active: Vec<ActiveProfile<'a>>,
    problems: Vec<String>,
}

impl SelectCommand {
    pub fn execute(self) -> Result<ExitCode, CliError> {
        if let Some(basedir) = &self.basedir {
            if !basedir.is_dir() {
                return Err(CliError::Argument(format!(
                    "--basedir {} is not a directory",
                    basedir.display()
                )));
            }
        }

        let manifest = loader::locate_manifest(self.manifest.as_deref())?;
        let profiles = loader::load_candidates(&manifest, &self.parents, self.settings.as_deref())?;

        let context = self.build_context(&manifest);
        let mut problems = DefaultProblemCollector::new();
        report_unknown_ids(&context, &profiles, &manifest, &mut problems);

        let selector = ProfileSelector::standard();
        let active = selector.active_profiles(&profiles, &context, &mut problems);
        tracing::info!(
            candidates = profiles.len(),
            active = active.len(),
            problems = problems.problems().len(),
            "profile selection finished"
        );

        if self.json {
            let report = SelectionReport {
                active: active.iter().map(|p| Self::describe(p)).collect(),
                problems: problems.problems().iter().map(ToString::to_string).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            Self::print(&active);
            for problem in problems.problems() {
                ui::problem(problem);
            }
        }

        Ok(if problems.has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }

    fn build_context(&self, manifest: &Path) -> ActivationContext {
        let (active, inactive) = loader::split_profile_ids(&self.profiles);
        let basedir = self
            .basedir
            .clone()
            .or_else(|| manifest.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        let mut context = ActivationContext::from_environment()
            .with_active_profile_ids(active)
            .with_inactive_profile_ids(inactive)
            .with_user_properties(self.defines.iter().cloned())
            .with_project_directory(basedir);

        if let Some(jdk) = &self.jdk {
            context = context.with_system_property("java.version", jdk.clone());
        }
        context
    }

    fn describe(profile: &Profile) -> ActiveProfile<'_> {
        ActiveProfile {
            id: &profile.id,
            source: profile.source,
            description: Some(profile.description.as_str()).filter(|d| !d.is_empty()),
            properties: Some(&profile.properties).filter(|p| !p.is_empty()),
        }
    }

    fn print(active: &[&Profile]) {
        if active.is_empty() {
            ui::info("No active profiles.");
            return;
        }

        println!("{}", Theme::bold("Active profiles:"));
        for profile in active {
            let mut line = format!(
                "  {} {} {}",
                Theme::success(Icon::Check),
                Theme::primary(&profile.id),
                Theme::secondary(format!("({})", profile.source))
            );
            if !profile.description.is_empty() {
                line.push_str(&format!(" {}", Theme::muted(&profile.description)));
            }
            println!("{}", line);
        }
    }
}

/// Requested ids matching no candidate are warnings, not errors.
fn report_unknown_ids(
    context: &ActivationContext,
    profiles: &[Profile],
    manifest: &Path,
    problems: &mut dyn ProblemCollector,
) {
    for id in context.unknown_profile_ids(profiles) {
        problems.add(Problem {
            severity: Severity::Warning,
            message: format!(
                "The requested profile \"{}\" could not be activated because it does not exist.",
                id
            ),
            location: manifest.display().to_string(),
            cause: None,
        });
    }
}
