use crate::ui::Theme;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Descriptor(_) => Some(
                "Check that profiles.toml (or .json/.yaml) exists and that every profile has an 'id'."
                    .to_string(),
            ),
            CliError::Argument(_) => {
                Some("Run with --help to see the accepted argument formats.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", Theme::error("Error:"), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", Theme::muted("  help:"), s);
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Descriptor(format!("{:#}", err))
    }
}
