//! Resolve the declared extras.

use anyhow::Result;
use clap::Args;

use crate::cli::common::{CommandExecutor, OutputFormat, render_section, to_json};
use crate::config::ProjectConfig;
use crate::requirements::ExtrasAggregator;

/// Command to print the requirements of every declared extra.
#[derive(Args, Debug)]
pub struct ExtrasCommand {
    /// Only these extras, in the order given
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CommandExecutor for ExtrasCommand {
    async fn render(&self, project: &ProjectConfig) -> Result<String> {
        let mut table = project.extras_table()?;
        if !self.names.is_empty() {
            table = table.select(&self.names)?;
        }
        let extras = ExtrasAggregator::new(project.resolver(), table).resolve_concurrent().await?;

        match self.format {
            OutputFormat::Json => to_json(&extras),
            OutputFormat::Text => Ok(extras
                .iter()
                .map(|(name, requirements)| render_section(name, requirements))
                .collect()),
        }
    }
}
