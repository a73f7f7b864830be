//! Core types for distreq
//!
//! This module holds the error types shared by every pipeline:
//!
//! - [`DistreqError`] - Enumerated error types for configuration, include and metadata failures
//! - [`FileOperationError`] - A failed read of a header or requirement file, with its path and purpose
//! - [`ErrorContext`] / [`user_friendly_error`] - Colored error display for the CLI
//!
//! # Error Handling Pattern
//!
//! Library functions return [`anyhow::Result`] and propagate with `?`. The
//! typed errors stay downcastable through the chain, so callers and tests can
//! match on the exact failure:
//!
//! ```rust,no_run
//! use distreq_cli::core::{DistreqError, user_friendly_error};
//!
//! fn handle(result: anyhow::Result<()>) {
//!     if let Err(e) = result {
//!         if let Some(DistreqError::CircularInclude { chain }) = e.downcast_ref() {
//!             eprintln!("cycle: {chain}");
//!         }
//!         user_friendly_error(e).display();
//!     }
//! }
//! ```

pub mod error;
pub mod file_error;

pub use error::{DistreqError, ErrorContext, user_friendly_error};
pub use file_error::{FileOperation, FileOperationContext, FileOperationError, FileOps, FileResultExt};
