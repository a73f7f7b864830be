//! Write a starter `distreq.toml`.
//!
//! ```bash
//! # Package named after the current directory
//! distreq init
//!
//! # Explicit name in another directory, replacing any existing file
//! distreq init --name celery --path ../celery --force
//! ```

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::constants::CONFIG_FILE_NAME;
use crate::core::DistreqError;

/// Command to initialize a new distreq project.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Package name (defaults to the directory name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory to create the configuration in
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing `distreq.toml`
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub async fn execute(self) -> Result<()> {
        let config_path = self.write_config()?;
        println!("{} Created {}", "✓".green(), config_path.display());
        Ok(())
    }

    /// Write the configuration and return its path.
    pub fn write_config(&self) -> Result<PathBuf> {
        let target_dir = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let config_path = target_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.force {
            return Err(anyhow!(
                "Configuration already exists at {}. Use --force to overwrite",
                config_path.display()
            ));
        }

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)
                .with_context(|| format!("Failed to create directory {}", target_dir.display()))?;
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => directory_name(&target_dir)?,
        };
        if name.trim().is_empty() {
            return Err(DistreqError::ConfigValidationError {
                reason: "package.name cannot be empty".to_string(),
            }
            .into());
        }

        fs::write(&config_path, ProjectConfig::template(&name))
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::debug!("initialized '{}' in {}", name, target_dir.display());
        Ok(config_path)
    }
}

fn directory_name(dir: &Path) -> Result<String> {
    let canonical = dir
        .canonicalize()
        .with_context(|| format!("Cannot resolve directory {}", dir.display()))?;
    canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Cannot infer a package name from {}. Use --name", canonical.display()))
}
