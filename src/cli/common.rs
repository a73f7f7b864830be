//! Shared plumbing for commands that operate on a loaded project.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{ProjectConfig, find_config_with_optional};

/// Output format of the inspection commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,

    /// Pretty-printed JSON on stdout.
    Json,
}

/// A command that needs the project configuration.
///
/// Implementors only render; locating and loading `distreq.toml` happens in
/// [`execute_with_config_path`](Self::execute_with_config_path).
pub trait CommandExecutor: Sized {
    /// Find and load the configuration, then run the command.
    fn execute_with_config_path(
        self,
        config_path: Option<PathBuf>,
    ) -> impl std::future::Future<Output = Result<()>> + Send
    where
        Self: Send,
    {
        async move {
            let project = load_project(config_path)?;
            let output = self.render(&project).await?;
            print!("{output}");
            Ok(())
        }
    }

    /// Produce the command output for `project`.
    fn render(
        &self,
        project: &ProjectConfig,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Locate and load the project configuration.
///
/// With no explicit path, searches the current directory and its parents.
pub fn load_project(config_path: Option<PathBuf>) -> Result<ProjectConfig> {
    let path = find_config_with_optional(config_path)?;
    ProjectConfig::load(&path)
        .with_context(|| format!("Failed to load project configuration: {}", path.display()))
}

/// Pretty JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// One requirement per line.
pub fn render_list(requirements: &[String]) -> String {
    requirements.iter().map(|r| format!("{r}\n")).collect()
}

/// A titled, indented requirement list; `(none)` when empty.
pub fn render_section(title: &str, requirements: &[String]) -> String {
    let mut out = format!("{}\n", title.bold());
    if requirements.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
    }
    for requirement in requirements {
        out.push_str(&format!("  {requirement}\n"));
    }
    out
}
