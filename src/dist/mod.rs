//! Everything a packaging tool needs from one project.
//!
//! [`DistributionInfo::collect`] runs the metadata scan, resolves the base,
//! test and extras requirements, and performs the key lookups the packaging
//! step depends on. The header keys map to distribution fields as follows:
//!
//! | Header key | Field            |
//! |------------|------------------|
//! | `version`  | `version`        |
//! | `doc`      | `description`    |
//! | `keywords` | `keywords`       |
//! | `author`   | `author`         |
//! | `contact`  | `author_email`   |
//! | `homepage` | `url`            |
//!
//! Any failure aborts the whole computation; there is no partial result.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::core::DistreqError;
use crate::metadata::MetadataRecord;
use crate::requirements::ExtrasMap;

/// Distribution metadata and requirements of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionInfo {
    /// Distribution name from the configuration
    pub name: String,
    /// `__version__`
    pub version: String,
    /// One-line docstring
    pub description: String,
    /// `__keywords__`
    pub keywords: String,
    /// `__author__`
    pub author: String,
    /// `__contact__`
    pub author_email: String,
    /// `__homepage__`
    pub url: String,
    /// Base installation requirements
    pub install_requires: Vec<String>,
    /// Test requirements, unless the project disables them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests_require: Option<Vec<String>>,
    /// Requirements of every declared extra
    pub extras_require: ExtrasMap,
}

impl DistributionInfo {
    /// Collect the distribution info of a project.
    ///
    /// Extras are resolved concurrently; the result is identical to a
    /// sequential run.
    ///
    /// # Errors
    ///
    /// - The header or any requirement file cannot be read
    /// - A configured required key is missing from the header
    /// - Requirement includes form a cycle
    pub async fn collect(config: &ProjectConfig) -> Result<Self> {
        let header = config.header_path();
        let record = config.metadata_extractor()?.extract_file(&header)?;
        require_keys(&record, &config.metadata.required, &header)?;

        let resolver = config.resolver();
        let install_requires = resolver
            .resolve_path(&config.requirements.install)
            .context("Failed to resolve installation requirements")?;

        let tests_require = match config.tests_file() {
            Some(tests) => Some(
                resolver.resolve_path(tests).context("Failed to resolve test requirements")?,
            ),
            None => None,
        };

        let extras_require = config.extras_aggregator()?.resolve_concurrent().await?;

        tracing::debug!(
            "collected '{}': {} install requirements, {} extras",
            config.package.name,
            install_requires.len(),
            extras_require.len()
        );

        Ok(Self {
            name: config.package.name.clone(),
            version: lookup(&record, "version", &header)?,
            description: lookup(&record, "doc", &header)?,
            keywords: lookup(&record, "keywords", &header)?,
            author: lookup(&record, "author", &header)?,
            author_email: lookup(&record, "contact", &header)?,
            url: lookup(&record, "homepage", &header)?,
            install_requires,
            tests_require,
            extras_require,
        })
    }
}

/// Fail on the first of `keys` the record does not define.
pub fn require_keys(record: &MetadataRecord, keys: &[String], header: &Path) -> Result<()> {
    for key in keys {
        lookup(record, key, header)?;
    }
    Ok(())
}

/// Value of `key`, or [`DistreqError::MissingMetadataKey`].
pub fn lookup(record: &MetadataRecord, key: &str, header: &Path) -> Result<String> {
    record.get(key).map(str::to_string).ok_or_else(|| {
        DistreqError::MissingMetadataKey {
            key: key.to_string(),
            file: header.display().to_string(),
        }
        .into()
    })
}
