mod commands;
mod error;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use commands::{FactsCommand, SchemaCommand, SelectCommand, ValidateCommand};

#[derive(Parser)]
#[command(name = "profiles")]
#[command(about = "Decide which build profiles are active", long_about = None)]
struct Cli {
    /// Log selection decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the active profiles for a descriptor
    Select(SelectCommand),
    /// Check a descriptor for mistakes
    Validate(ValidateCommand),
    /// Print the JSON Schema of the descriptor format
    Schema(SchemaCommand),
    /// Show the host facts activation conditions are evaluated against
    Facts(FactsCommand),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Select(cmd) => cmd.execute(),
        Commands::Validate(cmd) => cmd.execute(),
        Commands::Schema(cmd) => cmd.execute(),
        Commands::Facts(cmd) => cmd.execute(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            e.render();
            ExitCode::FAILURE
        }
    }
}
