use clap::Parser;
use profile_manifest::{ManifestValidator, ProfileSource, ValidationLevel};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::CliError;
use crate::ui::{self, Icon, Theme};
use crate::utils::loader;

#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Profile descriptor, or a directory containing one
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self) -> Result<ExitCode, CliError> {
        let path = loader::locate_manifest(self.manifest.as_deref())?;
        let manifest = loader::load_manifest(&path, ProfileSource::Local)?;
        let result = ManifestValidator::validate(&manifest);

        for issue in &result.issues {
            let label = match issue.level {
                ValidationLevel::Error => Theme::error("error"),
                ValidationLevel::Warning => Theme::warning("warning"),
                ValidationLevel::Info => Theme::primary("info"),
            };
            println!("{} {} {}", label, Theme::muted(&issue.field), issue.message);
        }

        if result.has_errors() {
            ui::error(format!("{} is invalid", path.display()));
            return Ok(ExitCode::FAILURE);
        }

        let subject = if manifest.project.name.is_empty() {
            path.display().to_string()
        } else {
            format!("{} ({})", manifest.project.name, path.display())
        };
        println!(
            "{} {} - {} profiles",
            Theme::success(Icon::Check),
            subject,
            manifest.profiles.len()
        );
        Ok(ExitCode::SUCCESS)
    }
}
