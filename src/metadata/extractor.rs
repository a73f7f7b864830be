//! Extract distribution metadata from a package header file.
//!
//! The header is scanned line by line. Each trimmed line is offered to an
//! ordered list of [`LineRule`]s and the first rule that matches writes one
//! key/value pair into the [`MetadataRecord`]. Scanning stops at the sentinel
//! line, so anything below it never reaches the record.
//!
//! The default rules, in evaluation order:
//!
//! 1. `assignment` - `__name__ = "value"` writes `name`, with surrounding
//!    quote characters stripped from the value
//! 2. `docstring` - `"""One line."""` writes `doc`
//!
//! # Example
//!
//! ```rust
//! use distreq_cli::metadata::MetadataExtractor;
//!
//! # fn main() -> anyhow::Result<()> {
//! let header = r#""""Distributed task queue."""
//! __version__ = '5.3.1'
//! __author__ = 'Ask Solem'
//! ## -eof meta-
//! __version__ = 'ignored'
//! "#;
//!
//! let record = MetadataExtractor::new()?.extract(header);
//! assert_eq!(record.get("doc"), Some("Distributed task queue."));
//! assert_eq!(record.get("version"), Some("5.3.1"));
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use regex::{Captures, Regex};
use std::path::Path;

use crate::constants::{DEFAULT_SENTINEL, DOC_KEY};
use crate::core::FileOps;
use crate::metadata::MetadataRecord;

/// Turns the captures of a matching line into the key/value pair to record.
pub type LineHandler = fn(&Captures<'_>) -> Option<(String, String)>;

/// A line pattern paired with the handler that records its match.
pub struct LineRule {
    name: &'static str,
    pattern: Regex,
    handler: LineHandler,
}

impl LineRule {
    /// Compile a rule. The pattern is matched against the trimmed line.
    pub fn new(name: &'static str, pattern: &str, handler: LineHandler) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            handler,
        })
    }

    /// `__name__ = value`, value stripped of surrounding `'` and `"`.
    pub fn assignment() -> Result<Self> {
        Self::new("assignment", r"^__(\w+?)__\s*=\s*(.*)", |caps| {
            let name = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str().trim_matches(['"', '\'']);
            Some((name.to_string(), value.to_string()))
        })
    }

    /// A single-line triple-quoted docstring, recorded under `doc`.
    pub fn docstring() -> Result<Self> {
        Self::new("docstring", r#"^"""(.+?)""""#, |caps| {
            Some((DOC_KEY.to_string(), caps.get(1)?.as_str().to_string()))
        })
    }

    /// Rule name, used in trace output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to a trimmed line.
    pub fn apply(&self, line: &str) -> Option<(String, String)> {
        let caps = self.pattern.captures(line)?;
        (self.handler)(&caps)
    }
}

impl std::fmt::Debug for LineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Line-oriented metadata scanner.
#[derive(Debug)]
pub struct MetadataExtractor {
    rules: Vec<LineRule>,
    sentinel: String,
}

impl MetadataExtractor {
    /// Extractor with the default rules and sentinel.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: vec![LineRule::assignment()?, LineRule::docstring()?],
            sentinel: DEFAULT_SENTINEL.to_string(),
        })
    }

    /// Replace the sentinel line. Compared against the trimmed line.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into().trim().to_string();
        self
    }

    /// Append a rule. It is tried after every rule already present.
    #[must_use]
    pub fn with_rule(mut self, rule: LineRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[LineRule] {
        &self.rules
    }

    /// Scan header content.
    #[must_use]
    pub fn extract(&self, content: &str) -> MetadataRecord {
        let mut record = MetadataRecord::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line == self.sentinel {
                tracing::trace!("metadata scan stopped at sentinel on line {}", index + 1);
                break;
            }

            let matched = self.rules.iter().find_map(|rule| {
                rule.apply(line).map(|(key, value)| (rule.name(), key, value))
            });

            if let Some((rule, key, value)) = matched {
                tracing::trace!("line {}: {} rule recorded '{}'", index + 1, rule, key);
                record.insert(key, value);
            }
        }

        record
    }

    /// Read and scan a header file.
    ///
    /// # Errors
    ///
    /// Returns a [`FileOperationError`](crate::core::FileOperationError) when
    /// the file is missing or not valid UTF-8 text.
    pub fn extract_file(&self, path: &Path) -> Result<MetadataRecord> {
        let content = FileOps::read_with_context(path, "metadata header", "metadata_extractor")?;
        let record = self.extract(&content);
        tracing::debug!("extracted {} metadata keys from {}", record.len(), path.display());
        Ok(record)
    }
}
