//! Integration test suite for distreq
//!
//! End-to-end runs of the `distreq` binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **config**: discovery and `--config`
//! - **dist**: full distribution info and required keys
//! - **extras**: extras aggregation and selection
//! - **init**: starter configuration
//! - **metadata**: header scanning
//! - **requirements**: include expansion and cycle reporting

#[path = "../common/mod.rs"]
mod common;

mod config;
mod dist;
mod extras;
mod init;
mod metadata;
mod requirements;
