//! Classification of a single raw requirement-file line.

use crate::constants::{COMMENT_MARKER, INCLUDE_PREFIX};

/// One meaningful line of a requirement file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementLine {
    /// A requirement specifier, passed through untouched (`redis>=3`, `celery[sqs]`).
    Requirement(String),
    /// `-r some/file.txt`: the path segments of the included file, relative to
    /// the requirements root.
    Include(Vec<String>),
}

impl RequirementLine {
    /// Classify a raw line.
    ///
    /// Returns `None` for lines that are blank once the comment is removed.
    ///
    /// ```rust
    /// use distreq_cli::requirements::RequirementLine;
    ///
    /// assert_eq!(
    ///     RequirementLine::parse("redis>=3  # driver"),
    ///     Some(RequirementLine::Requirement("redis>=3".to_string()))
    /// );
    /// assert_eq!(
    ///     RequirementLine::parse("-r extras/redis.txt"),
    ///     Some(RequirementLine::Include(vec!["extras".to_string(), "redis.txt".to_string()]))
    /// );
    /// assert_eq!(RequirementLine::parse("   # only a comment"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let line = strip_comment(raw);
        if line.is_empty() {
            return None;
        }

        match line.strip_prefix(INCLUDE_PREFIX) {
            Some(path) => Some(Self::Include(split_segments(path))),
            None => Some(Self::Requirement(line.to_string())),
        }
    }
}

/// Drop everything from the first `#` and trim what is left.
#[must_use]
pub fn strip_comment(raw: &str) -> &str {
    match raw.split_once(COMMENT_MARKER) {
        Some((before, _)) => before.trim(),
        None => raw.trim(),
    }
}

/// Split a slash-separated relative path into its segments.
#[must_use]
pub fn split_segments(path: &str) -> Vec<String> {
    path.trim().split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
}
