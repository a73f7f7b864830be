//! Recursive requirement-file resolution.
//!
//! A requirement file lists one specifier per line. A `-r <path>` line pulls
//! in another file, resolved against the same requirements root as the top
//! level file, and its requirements are spliced in place of the include line.
//! Expansion is depth-first, so the result follows file order exactly and
//! keeps duplicates.
//!
//! # Include cycles
//!
//! The resolver tracks the files currently being expanded. Reaching a file
//! that is already on that stack fails with
//! [`DistreqError::CircularInclude`]. A file included twice from separate
//! branches is not a cycle and contributes its requirements twice.
//!
//! # Example
//!
//! ```text
//! requirements/
//! ├── default.txt     flask>=1.0 / # comment / -r common.txt / celery
//! └── common.txt      six
//! ```
//!
//! resolves `default.txt` to `["flask>=1.0", "six", "celery"]`.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::{
    DistreqError, FileOperation, FileOperationContext, FileOperationError, FileOps,
};
use crate::requirements::line::{RequirementLine, split_segments};

/// A file on the expansion stack.
struct Frame {
    canonical: PathBuf,
    label: String,
}

/// Resolves requirement files below one requirements root.
#[derive(Debug, Clone)]
pub struct RequirementResolver {
    root: PathBuf,
}

impl RequirementResolver {
    /// Create a resolver for the given requirements root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// Resolve the file identified by `segments` (`["extras", "redis.txt"]`).
    ///
    /// # Errors
    ///
    /// - [`FileOperationError`] when the file, or any file it includes, is
    ///   missing or unreadable
    /// - [`DistreqError::CircularInclude`] when includes form a cycle
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Result<Vec<String>> {
        let segments: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();
        let mut stack = Vec::new();
        let mut requirements = Vec::new();
        self.expand(&segments, None, &mut stack, &mut requirements)?;
        Ok(requirements)
    }

    /// Resolve a slash-separated path relative to the root (`"extras/redis.txt"`).
    pub fn resolve_path(&self, relative: &str) -> Result<Vec<String>> {
        self.resolve(&split_segments(relative))
    }

    fn path_for(&self, segments: &[String]) -> PathBuf {
        segments.iter().fold(self.root.clone(), |path, segment| path.join(segment))
    }

    fn expand(
        &self,
        segments: &[String],
        includer: Option<&Path>,
        stack: &mut Vec<Frame>,
        out: &mut Vec<String>,
    ) -> Result<()> {
        let path = self.path_for(segments);
        let label = segments.join("/");

        let content = read_requirement_file(&path, includer)?;
        let canonical =
            FileOps::canonicalize_with_context(&path, "include cycle tracking", "requirement_resolver")?;

        if let Some(start) = stack.iter().position(|frame| frame.canonical == canonical) {
            let mut chain: Vec<&str> = stack[start..].iter().map(|f| f.label.as_str()).collect();
            chain.push(&label);
            return Err(DistreqError::CircularInclude {
                chain: chain.join(" -> "),
            }
            .into());
        }

        tracing::debug!("expanding requirement file {} (depth {})", path.display(), stack.len());
        stack.push(Frame {
            canonical,
            label,
        });

        for raw in content.lines() {
            match RequirementLine::parse(raw) {
                Some(RequirementLine::Requirement(spec)) => out.push(spec),
                Some(RequirementLine::Include(included)) => {
                    tracing::trace!("{} includes {}", path.display(), included.join("/"));
                    self.expand(&included, Some(&path), stack, out)?;
                }
                None => {}
            }
        }

        stack.pop();
        Ok(())
    }
}

fn read_requirement_file(path: &Path, includer: Option<&Path>) -> Result<String, FileOperationError> {
    std::fs::read_to_string(path).map_err(|source| {
        let purpose = if includer.is_some() { "included requirement file" } else { "requirement file" };
        let mut context =
            FileOperationContext::new(FileOperation::Read, path, purpose, "requirement_resolver");
        if let Some(includer) = includer {
            context = context.with_related_path(includer);
        }
        FileOperationError::new(context, source)
    })
}
