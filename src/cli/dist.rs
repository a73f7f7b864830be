//! Print everything the packaging step consumes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::common::{CommandExecutor, OutputFormat, render_section, to_json};
use crate::config::ProjectConfig;
use crate::dist::DistributionInfo;

/// Command to print the full distribution info.
#[derive(Args, Debug)]
pub struct DistCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CommandExecutor for DistCommand {
    async fn render(&self, project: &ProjectConfig) -> Result<String> {
        let info = DistributionInfo::collect(project).await?;
        match self.format {
            OutputFormat::Json => to_json(&info),
            OutputFormat::Text => Ok(render_text(&info)),
        }
    }
}

fn render_text(info: &DistributionInfo) -> String {
    let fields = [
        ("name", &info.name),
        ("version", &info.version),
        ("description", &info.description),
        ("keywords", &info.keywords),
        ("author", &info.author),
        ("author_email", &info.author_email),
        ("url", &info.url),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        out.push_str(&format!("{}: {value}\n", label.bold()));
    }

    out.push('\n');
    out.push_str(&render_section("install_requires", &info.install_requires));
    if let Some(tests) = &info.tests_require {
        out.push_str(&render_section("tests_require", tests));
    }
    for (name, requirements) in &info.extras_require {
        out.push_str(&render_section(&format!("extras_require[{name}]"), requirements));
    }
    out
}
