//! Project configuration for distreq
//!
//! A project is described by a single `distreq.toml` next to the package
//! directory. It names the package (and so the metadata header), the
//! requirements root and its base files, and the explicit table of extras.
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing with file context in errors
//! - `project` - The [`ProjectConfig`] schema, defaults, validation and discovery
//!
//! # Discovery
//!
//! [`find_config`] searches the current directory and its parents, the way
//! Cargo finds `Cargo.toml`. An explicit `--config` path skips the search.
//!
//! # Example
//!
//! ```rust,no_run
//! use distreq_cli::config::{ProjectConfig, find_config};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ProjectConfig::load(&find_config()?)?;
//! println!("header: {}", config.header_path().display());
//! # Ok(())
//! # }
//! ```

mod parser;
mod project;

pub use parser::{parse_config, parse_config_str};
pub use project::{
    ExtrasSection, MetadataSection, PackageSection, ProjectConfig, RequirementsSection,
    find_config, find_config_from, find_config_with_optional,
};
