//! distreq - distribution metadata and requirement resolution
//!
//! Reads the values a Python packaging step needs without importing the
//! package: the `__key__ = value` metadata header of `__init__.py` and the
//! `requirements/` tree, with `-r` includes expanded depth-first and extras
//! resolved from `requirements/extras/<name>.txt`.
//!
//! # Core Modules
//!
//! - [`metadata`] - Line-rule driven header scan producing an ordered record
//! - [`requirements`] - Requirement line parsing, recursive resolution with
//!   cycle detection, and extras aggregation
//! - [`config`] - `distreq.toml` loading, defaults and discovery
//! - [`dist`] - Distribution info and required-key lookups
//! - [`core`] - Error types and user-friendly error reporting
//! - [`cli`] - Command-line interface
//!
//! # Project Layout
//!
//! ```text
//! celery/
//! ├── distreq.toml
//! ├── celery/__init__.py        metadata header
//! └── requirements/
//!     ├── default.txt           install_requires
//!     ├── test.txt              tests_require
//!     └── extras/
//!         ├── redis.txt         extras_require["redis"]
//!         └── sqs.txt
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use distreq_cli::config::{ProjectConfig, find_config};
//! use distreq_cli::dist::DistributionInfo;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProjectConfig::load(&find_config()?)?;
//! let info = DistributionInfo::collect(&config).await?;
//! println!("{} {} requires {:?}", info.name, info.version, info.install_requires);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is stateless: each call re-reads its files and returns an
//! owned result.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod dist;
pub mod metadata;
pub mod requirements;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
