//! Command-line interface for distreq.
//!
//! # Available Commands
//!
//! - `metadata` - Print the key/value pairs of the package header
//! - `requirements` - Resolve one requirement file, includes expanded
//! - `extras` - Resolve the declared extras
//! - `dist` - Print the full distribution info
//! - `init` - Write a starter `distreq.toml`
//!
//! Every inspection command accepts `--format json` for machine consumption.
//! Logs go to stderr, so stdout only carries the requested output.
//!
//! ```bash
//! distreq init --name celery
//! distreq requirements
//! distreq requirements extras/sqs.txt --format json
//! distreq extras redis sqs
//! distreq --config ../celery/distreq.toml dist --format json
//! ```

pub mod common;
mod dist;
mod extras;
mod init;
mod metadata;
mod requirements;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::cli::common::CommandExecutor;

pub use common::OutputFormat;

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive; `None` disables logging
    pub log_level: Option<String>,

    /// Explicit path of `distreq.toml`
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a default configuration with logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the stderr log subscriber.
    ///
    /// Does nothing without a log level or when a subscriber is already set.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };
        let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Resolve distribution metadata and requirement files
#[derive(Parser, Debug)]
#[command(
    name = "distreq",
    about = "Resolve package metadata and recursive requirement files",
    version,
    long_about = "distreq reads the metadata header of a package and flattens its requirement files, \
                  including optional extras, into the values a packaging tool consumes."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to distreq.toml (default: search the current directory and its parents)
    #[arg(short, long, global = true, env = "DISTREQ_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the metadata record of the package header
    Metadata(metadata::MetadataCommand),

    /// Resolve a requirement file
    Requirements(requirements::RequirementsCommand),

    /// Resolve the declared extras
    Extras(extras::ExtrasCommand),

    /// Print the full distribution info
    Dist(dist::DistCommand),

    /// Create a distreq.toml
    Init(init::InitCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Derive the runtime configuration from the global flags.
    ///
    /// `--verbose` selects `debug`, `--quiet` disables logging, otherwise
    /// `RUST_LOG` is used with `warn` as the fallback.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit runtime configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let config_path = config.config_path;
        match self.command {
            Commands::Metadata(cmd) => cmd.execute_with_config_path(config_path).await,
            Commands::Requirements(cmd) => cmd.execute_with_config_path(config_path).await,
            Commands::Extras(cmd) => cmd.execute_with_config_path(config_path).await,
            Commands::Dist(cmd) => cmd.execute_with_config_path(config_path).await,
            Commands::Init(cmd) => cmd.execute().await,
        }
    }
}
