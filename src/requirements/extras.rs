//! Optional "extra" requirement sets.
//!
//! Extras are declared explicitly in an [`ExtrasTable`]: an ordered list of
//! names, each mapped to a requirement file below the requirements root. The
//! conventional entry for `redis` is `extras/redis.txt`. The
//! [`ExtrasAggregator`] resolves every entry and returns an [`ExtrasMap`] in
//! table order.
//!
//! A missing backing file fails the whole aggregation; no extra silently
//! resolves to an empty list.

use anyhow::{Context, Result};
use indexmap::IndexMap;

use crate::constants::EXTRAS_FILE_EXTENSION;
use crate::core::DistreqError;
use crate::requirements::RequirementResolver;

/// Extra name to its resolved requirements, in declaration order.
pub type ExtrasMap = IndexMap<String, Vec<String>>;

/// One declared extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraEntry {
    /// Extra name as used by installers (`pkg[redis]`)
    pub name: String,
    /// Slash-separated path of its requirement file, relative to the requirements root
    pub path: String,
}

/// Ordered, duplicate-free set of declared extras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasTable {
    entries: Vec<ExtraEntry>,
}

impl ExtrasTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Conventional table: `<extras_dir>/<name>.txt` for every name.
    ///
    /// ```rust
    /// use distreq_cli::requirements::ExtrasTable;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let table = ExtrasTable::from_names(["redis", "sqs"], "extras")?;
    /// assert_eq!(table.get("sqs").map(|e| e.path.as_str()), Some("extras/sqs.txt"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_names<I, S>(names: I, extras_dir: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in names {
            table.push_conventional(name.as_ref(), extras_dir)?;
        }
        Ok(table)
    }

    /// Add `name` backed by `<extras_dir>/<name>.txt`.
    pub fn push_conventional(&mut self, name: &str, extras_dir: &str) -> Result<()> {
        let name = name.trim();
        let dir = extras_dir.trim_end_matches('/');
        let path = if dir.is_empty() {
            format!("{name}.{EXTRAS_FILE_EXTENSION}")
        } else {
            format!("{dir}/{name}.{EXTRAS_FILE_EXTENSION}")
        };
        self.push(name, path)
    }

    /// Add `name` backed by an explicit path relative to the requirements root.
    ///
    /// # Errors
    ///
    /// [`DistreqError::ConfigValidationError`] for an empty or already declared name.
    pub fn push(&mut self, name: &str, path: impl Into<String>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DistreqError::ConfigValidationError {
                reason: "extra names cannot be empty".to_string(),
            }
            .into());
        }
        if self.contains(name) {
            return Err(DistreqError::ConfigValidationError {
                reason: format!("extra '{name}' is declared more than once"),
            }
            .into());
        }

        self.entries.push(ExtraEntry {
            name: name.to_string(),
            path: path.into(),
        });
        Ok(())
    }

    /// Whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Entry for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExtraEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[ExtraEntry] {
        &self.entries
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of declared extras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no extra is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sub-table with only `names`, in the order given.
    ///
    /// # Errors
    ///
    /// [`DistreqError::UnknownExtra`] for a name that is not declared.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut selected = Self::new();
        for name in names {
            let name = name.as_ref();
            let entry = self.get(name).ok_or_else(|| DistreqError::UnknownExtra {
                name: name.to_string(),
            })?;
            selected.push(&entry.name, entry.path.clone())?;
        }
        Ok(selected)
    }
}

/// Resolves every extra of a table.
#[derive(Debug, Clone)]
pub struct ExtrasAggregator {
    resolver: RequirementResolver,
    table: ExtrasTable,
}

impl ExtrasAggregator {
    /// Aggregator over `table`, resolving files with `resolver`.
    pub fn new(resolver: RequirementResolver, table: ExtrasTable) -> Self {
        Self {
            resolver,
            table,
        }
    }

    /// The declared extras.
    #[must_use]
    pub fn table(&self) -> &ExtrasTable {
        &self.table
    }

    /// Resolve every extra, one after another.
    ///
    /// # Errors
    ///
    /// The first extra whose file (or an included file) cannot be resolved
    /// fails the whole call.
    pub fn resolve(&self) -> Result<ExtrasMap> {
        let mut extras = ExtrasMap::with_capacity(self.table.len());
        for entry in self.table.entries() {
            let requirements = self
                .resolver
                .resolve_path(&entry.path)
                .with_context(|| format!("Failed to resolve extra '{}'", entry.name))?;
            tracing::debug!("extra '{}': {} requirements", entry.name, requirements.len());
            extras.insert(entry.name.clone(), requirements);
        }
        Ok(extras)
    }

    /// Resolve every extra on the blocking thread pool.
    ///
    /// Produces the same map, in the same order, as [`resolve`](Self::resolve).
    pub async fn resolve_concurrent(&self) -> Result<ExtrasMap> {
        let tasks = self.table.entries().iter().cloned().map(|entry| {
            let resolver = self.resolver.clone();
            async move {
                let ExtraEntry {
                    name,
                    path,
                } = entry;
                let requirements = tokio::task::spawn_blocking(move || resolver.resolve_path(&path))
                    .await
                    .with_context(|| format!("Resolution task for extra '{name}' did not complete"))?
                    .with_context(|| format!("Failed to resolve extra '{name}'"))?;
                tracing::debug!("extra '{}': {} requirements", name, requirements.len());
                Ok::<_, anyhow::Error>((name, requirements))
            }
        });

        let resolved = futures::future::try_join_all(tasks).await?;
        Ok(resolved.into_iter().collect())
    }
}
