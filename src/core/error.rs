//! Error handling for distreq
//!
//! This module provides the error types and user-friendly error reporting for
//! the resolver. The error system is built around two types:
//! - [`DistreqError`] - Enumerated error types for every failure the resolver reports
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! File access failures are reported separately through
//! [`FileOperationError`](crate::core::FileOperationError), which keeps the
//! path, purpose and underlying [`std::io::Error`] of the failed read.
//!
//! # Error Categories
//!
//! - **Configuration**: [`DistreqError::ConfigNotFound`], [`DistreqError::ConfigParseError`],
//!   [`DistreqError::ConfigValidationError`]
//! - **Requirements**: [`DistreqError::CircularInclude`], [`DistreqError::UnknownExtra`]
//! - **Metadata**: [`DistreqError::MissingMetadataKey`]
//!
//! Use [`user_friendly_error`] to convert any error into a displayable
//! [`ErrorContext`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use distreq_cli::core::{DistreqError, user_friendly_error};
//!
//! let error = anyhow::Error::from(DistreqError::ConfigNotFound);
//! let ctx = user_friendly_error(error);
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::file_error::FileOperationError;

/// Errors reported by the resolver and its orchestration layer.
#[derive(Error, Debug)]
pub enum DistreqError {
    /// No `distreq.toml` was found in the current directory or any parent.
    #[error("Configuration file distreq.toml not found in current directory or any parent directory")]
    ConfigNotFound,

    /// The configuration file could not be parsed.
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// The configuration parsed but is not usable.
    #[error("Configuration validation failed: {reason}")]
    ConfigValidationError {
        /// Why validation failed
        reason: String,
    },

    /// A requirement file includes itself, directly or through other files.
    #[error("Circular requirement include detected: {chain}")]
    CircularInclude {
        /// Files involved, from the first occurrence to the repeated one
        chain: String,
    },

    /// The packaging step looked up a metadata key the header does not define.
    #[error("Metadata key '{key}' not found in {file}")]
    MissingMetadataKey {
        /// Key that was requested
        key: String,
        /// Header file that was scanned
        file: String,
    },

    /// An extra was requested that the extras table does not declare.
    #[error("Extra '{name}' is not declared")]
    UnknownExtra {
        /// Requested extra name
        name: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for DistreqError {
    fn clone(&self) -> Self {
        match self {
            Self::ConfigNotFound => Self::ConfigNotFound,
            Self::ConfigParseError {
                file,
                reason,
            } => Self::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ConfigValidationError {
                reason,
            } => Self::ConfigValidationError {
                reason: reason.clone(),
            },
            Self::CircularInclude {
                chain,
            } => Self::CircularInclude {
                chain: chain.clone(),
            },
            Self::MissingMetadataKey {
                key,
                file,
            } => Self::MissingMetadataKey {
                key: key.clone(),
                file: file.clone(),
            },
            Self::UnknownExtra {
                name,
            } => Self::UnknownExtra {
                name: name.clone(),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// A [`DistreqError`] with optional details and a suggestion for the user.
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use distreq_cli::core::{DistreqError, ErrorContext};
///
/// let context = ErrorContext::new(DistreqError::ConfigNotFound)
///     .with_suggestion("Run 'distreq init' to create one")
///     .with_details("distreq searches the current and parent directories");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DistreqError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no details or suggestion.
    #[must_use]
    pub const fn new(error: DistreqError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Recognises [`DistreqError`] and [`FileOperationError`] anywhere in the
/// error chain, and a top-level permission-denied [`std::io::Error`]. Anything else is
/// reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(distreq_error) = cause.downcast_ref::<DistreqError>() {
            return create_error_context(distreq_error.clone());
        }

        if let Some(file_error) = cause.downcast_ref::<FileOperationError>() {
            return ErrorContext::new(DistreqError::Other {
                message: file_error.to_string(),
            })
            .with_details(file_error.user_message())
            .with_suggestion(
                "Check that the file exists relative to the project directory and is readable",
            );
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(DistreqError::Other {
                message: io_error.to_string(),
            })
            .with_suggestion("Check file ownership and permissions")
            .with_details(
                "This error occurs when distreq doesn't have permission to read a file",
            );
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DistreqError::Other {
        message,
    })
}

fn create_error_context(error: DistreqError) -> ErrorContext {
    match &error {
        DistreqError::ConfigNotFound => ErrorContext::new(error)
            .with_suggestion("Run 'distreq init --name <package>' to create a distreq.toml, or pass --config <path>")
            .with_details("distreq looks for distreq.toml in the current directory and parent directories up to the filesystem root"),

        DistreqError::ConfigParseError { file, reason } => {
            let suggestion = format!(
                "Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets, unknown keys"
            );
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        DistreqError::ConfigValidationError { .. } => ErrorContext::new(error)
            .with_suggestion("Fix the reported entry in distreq.toml"),

        DistreqError::CircularInclude { chain } => {
            let details = format!(
                "Include chain: {chain}. A requirement file cannot include itself directly or indirectly"
            );
            ErrorContext::new(error)
                .with_suggestion("Move the shared requirements into a separate file and include it from each parent")
                .with_details(details)
        }

        DistreqError::MissingMetadataKey { key, file } => {
            let suggestion = format!("Add a line like __{key}__ = \"...\" to {file} above the sentinel line");
            let details = if key == "doc" {
                "The short description comes from a one-line \"\"\"docstring\"\"\" at the top of the header".to_string()
            } else {
                "Metadata is only read up to the sentinel line; later assignments are ignored".to_string()
            };
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        DistreqError::UnknownExtra { .. } => ErrorContext::new(error)
            .with_suggestion("Declare the extra under [extras] in distreq.toml, or run 'distreq extras' to list declared extras"),

        _ => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_error::{FileOperation, FileResultExt};
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let error = DistreqError::CircularInclude {
            chain: "a.txt -> b.txt -> a.txt".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Circular requirement include detected: a.txt -> b.txt -> a.txt"
        );

        let error = DistreqError::MissingMetadataKey {
            key: "homepage".to_string(),
            file: "pkg/__init__.py".to_string(),
        };
        assert_eq!(error.to_string(), "Metadata key 'homepage' not found in pkg/__init__.py");
    }

    #[test]
    fn test_clone_keeps_fields() {
        let error = DistreqError::MissingMetadataKey {
            key: "contact".to_string(),
            file: "celery/__init__.py".to_string(),
        };
        assert_eq!(error.clone().to_string(), error.to_string());
    }

    #[test]
    fn test_user_friendly_error_for_bad_config() {
        let error = crate::config::parse_config_str::<crate::config::ProjectConfig>(
            "[package\nname = 1",
            std::path::Path::new("proj/distreq.toml"),
        )
        .unwrap_err();

        let ctx = user_friendly_error(error);
        assert!(matches!(ctx.error, DistreqError::ConfigParseError { .. }));
        assert!(ctx.suggestion.unwrap().contains("proj/distreq.toml"));
        assert!(ctx.details.is_some());
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(DistreqError::ConfigNotFound)
            .with_details("searched upwards")
            .with_suggestion("run init");
        let text = ctx.to_string();
        assert!(text.contains("distreq.toml not found"));
        assert!(text.contains("Details: searched upwards"));
        assert!(text.contains("Suggestion: run init"));
    }

    #[test]
    fn test_user_friendly_error_finds_wrapped_error() {
        let result: anyhow::Result<()> = Err(DistreqError::UnknownExtra {
            name: "redis".to_string(),
        })
        .context("while resolving extras");

        let ctx = user_friendly_error(result.unwrap_err());
        assert!(matches!(ctx.error, DistreqError::UnknownExtra { .. }));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_for_missing_file() {
        let result: Result<String, _> = std::fs::read_to_string("/nonexistent/default.txt")
            .with_file_context(FileOperation::Read, "/nonexistent/default.txt", "requirements", "test");

        let ctx = user_friendly_error(anyhow::Error::from(result.unwrap_err()));
        assert!(ctx.details.unwrap().contains("does not exist"));
    }

    #[test]
    fn test_user_friendly_error_generic_chain() {
        let error = anyhow::anyhow!("root cause").context("outer");
        let ctx = user_friendly_error(error);
        let text = ctx.error.to_string();
        assert!(text.contains("outer"));
        assert!(text.contains("Caused by:"));
        assert!(text.contains("root cause"));
    }
}
