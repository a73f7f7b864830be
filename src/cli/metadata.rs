//! Print the metadata header of the project.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::{CommandExecutor, OutputFormat, to_json};
use crate::config::ProjectConfig;

/// Command to print the metadata record of the package header.
#[derive(Args, Debug)]
pub struct MetadataCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CommandExecutor for MetadataCommand {
    async fn render(&self, project: &ProjectConfig) -> Result<String> {
        let header = project.header_path();
        let record = project.metadata_extractor()?.extract_file(&header)?;

        match self.format {
            OutputFormat::Json => to_json(&record),
            OutputFormat::Text => {
                Ok(record.iter().map(|(key, value)| format!("{} = {value}\n", key.bold())).collect())
            }
        }
    }
}
