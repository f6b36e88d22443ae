use clap::Parser;
use profile_selector::ActivationContext;
use std::process::ExitCode;

use crate::error::CliError;
use crate::ui::Theme;

const FACT_KEYS: [&str; 5] = ["os.name", "os.arch", "os.version", "java.version", "user.home"];

#[derive(Parser, Debug)]
pub struct FactsCommand {
    /// Also list env.* properties
    #[arg(long)]
    pub env: bool,
}

impl FactsCommand {
    pub fn execute(self) -> Result<ExitCode, CliError> {
        let context = ActivationContext::from_environment();

        for key in FACT_KEYS {
            let value = context
                .system_property(key)
                .map(Theme::bold)
                .unwrap_or_else(|| Theme::muted("<unknown>"));
            println!("{:<14} {}", Theme::primary(key), value);
        }

        if self.env {
            for (key, value) in context
                .system_properties()
                .iter()
                .filter(|(key, _)| key.starts_with("env."))
            {
                println!("{} = {}", Theme::muted(key), value);
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
