//! Resolve one requirement file.

use anyhow::Result;
use clap::Args;

use crate::cli::common::{CommandExecutor, OutputFormat, render_list, to_json};
use crate::config::ProjectConfig;

/// Command to print the flattened requirements of one file.
#[derive(Args, Debug)]
pub struct RequirementsCommand {
    /// Requirement file relative to the requirements root
    ///
    /// Defaults to `requirements.install` from `distreq.toml`.
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CommandExecutor for RequirementsCommand {
    async fn render(&self, project: &ProjectConfig) -> Result<String> {
        let file = self.file.as_deref().unwrap_or(&project.requirements.install);
        let requirements = project.resolver().resolve_path(file)?;

        match self.format {
            OutputFormat::Json => to_json(&requirements),
            OutputFormat::Text => Ok(render_list(&requirements)),
        }
    }
}
