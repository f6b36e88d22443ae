use clap::Parser;
use profile_manifest::ProfileManifest;
use schemars::schema_for;
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn execute(self) -> Result<ExitCode, CliError> {
        let schema = schema_for!(ProfileManifest);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(ExitCode::SUCCESS)
    }
}
