//! Test utilities for distreq
//!
//! Helpers for writing tests: temporary projects with a configuration,
//! a metadata header and requirement files, plus one-time logging setup.
//!
//! # Example
//!
//! ```rust,no_run
//! use distreq_cli::test_utils::{HeaderFixture, TestProject};
//!
//! # fn example() -> anyhow::Result<()> {
//! let project = TestProject::builder("celery")
//!     .header(HeaderFixture::complete().content)
//!     .requirement("default.txt", "kombu>=5.3.4\n")
//!     .build()?;
//!
//! assert_eq!(project.config()?.package.name, "celery");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod fixtures;

pub use builder::{TestProject, TestProjectBuilder};
pub use fixtures::HeaderFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, tests run without a subscriber.
///
/// ```bash
/// RUST_LOG=distreq_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
