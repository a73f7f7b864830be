//! Generic TOML configuration parsing.
//!
//! Reads a TOML file and deserializes it into any `DeserializeOwned` type.
//! A read failure keeps the [`FileOperationError`](crate::core::FileOperationError)
//! of the read; a syntax or schema failure becomes
//! [`DistreqError::ConfigParseError`] naming the file.
//!
//! ```rust,no_run
//! use distreq_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct MyConfig {
//!     name: String,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: MyConfig = parse_config(Path::new("config.toml"))?;
//! println!("Config: {}", config.name);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::path::Path;

use crate::core::{DistreqError, FileOps};

/// Parse a TOML configuration file into `T`.
///
/// # Errors
///
/// - The file does not exist or cannot be read
/// - The content is not valid TOML or does not match `T`
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = FileOps::read_with_context(path, "project configuration", "config_parser")?;
    parse_config_str(&content, path)
}

/// Parse TOML `content` that was read from `path`.
pub fn parse_config_str<T>(content: &str, path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    toml::from_str(content).map_err(|e| {
        DistreqError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
