//! The `distreq.toml` project configuration.
//!
//! Every relative path in the file is resolved against the directory that
//! contains it. All sections except `[package]` are optional and default to
//! the conventional layout:
//!
//! ```toml
//! [package]
//! name = "celery"
//! # header = "celery/__init__.py"
//! # sentinel = "# -eof meta-"
//!
//! [metadata]
//! required = ["version", "doc", "keywords", "author", "contact", "homepage"]
//!
//! [requirements]
//! dir = "requirements"
//! install = "default.txt"
//! tests = "test.txt"
//!
//! [extras]
//! dir = "extras"
//! names = ["redis", "sqs"]
//!
//! [extras.files]
//! custom = "extras/special.txt"
//! ```

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{parse_config, parse_config_str};
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_EXTRAS_DIR, DEFAULT_HEADER_FILE, DEFAULT_INSTALL_FILE,
    DEFAULT_REQUIRED_KEYS, DEFAULT_REQUIREMENTS_DIR, DEFAULT_SENTINEL, DEFAULT_TESTS_FILE,
};
use crate::core::DistreqError;
use crate::metadata::MetadataExtractor;
use crate::requirements::{ExtrasAggregator, ExtrasTable, RequirementResolver};

/// Parsed `distreq.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// `[package]`
    pub package: PackageSection,

    /// `[metadata]`
    #[serde(default)]
    pub metadata: MetadataSection,

    /// `[requirements]`
    #[serde(default)]
    pub requirements: RequirementsSection,

    /// `[extras]`
    #[serde(default)]
    pub extras: ExtrasSection,

    #[serde(skip)]
    project_dir: PathBuf,
}

/// `[package]`: where the metadata header lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSection {
    /// Distribution name, also the default package directory.
    pub name: String,

    /// Header path; defaults to `<name>/__init__.py`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Line that ends the metadata scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<String>,
}

/// `[metadata]`: keys the packaging step requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSection {
    /// Keys that must be present in the header.
    #[serde(default = "default_required_keys")]
    pub required: Vec<String>,
}

impl Default for MetadataSection {
    fn default() -> Self {
        Self {
            required: default_required_keys(),
        }
    }
}

/// `[requirements]`: the requirements root and its base files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementsSection {
    /// Requirements root, relative to the project directory.
    #[serde(default = "default_requirements_dir")]
    pub dir: String,

    /// Base installation requirements, relative to the root.
    #[serde(default = "default_install_file")]
    pub install: String,

    /// Test requirements, relative to the root; empty for none.
    #[serde(default = "default_tests_file")]
    pub tests: String,
}

impl Default for RequirementsSection {
    fn default() -> Self {
        Self {
            dir: default_requirements_dir(),
            install: default_install_file(),
            tests: default_tests_file(),
        }
    }
}

/// `[extras]`: declared optional requirement sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtrasSection {
    /// Directory of conventional extras files, relative to the requirements root.
    #[serde(default = "default_extras_dir")]
    pub dir: String,

    /// Extras backed by `<dir>/<name>.txt`.
    #[serde(default)]
    pub names: Vec<String>,

    /// Extras backed by an explicit path relative to the requirements root.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub files: IndexMap<String, String>,
}

impl Default for ExtrasSection {
    fn default() -> Self {
        Self {
            dir: default_extras_dir(),
            names: Vec::new(),
            files: IndexMap::new(),
        }
    }
}

fn default_required_keys() -> Vec<String> {
    DEFAULT_REQUIRED_KEYS.iter().map(|k| (*k).to_string()).collect()
}

fn default_requirements_dir() -> String {
    DEFAULT_REQUIREMENTS_DIR.to_string()
}

fn default_install_file() -> String {
    DEFAULT_INSTALL_FILE.to_string()
}

fn default_tests_file() -> String {
    DEFAULT_TESTS_FILE.to_string()
}

fn default_extras_dir() -> String {
    DEFAULT_EXTRAS_DIR.to_string()
}

impl ProjectConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// - The file cannot be read
    /// - The TOML is invalid or contains unknown keys
    /// - Validation fails (see [`validate`](Self::validate))
    pub fn load(path: &Path) -> Result<Self> {
        let project_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut config: Self = parse_config(path)?;
        config.project_dir = project_dir;
        config.validate()?;
        tracing::debug!("loaded configuration for '{}' from {}", config.package.name, path.display());
        Ok(config)
    }

    /// Parse configuration content for a project rooted at `project_dir`.
    pub fn from_toml(content: &str, project_dir: impl Into<PathBuf>) -> Result<Self> {
        let project_dir = project_dir.into();
        let mut config: Self = parse_config_str(content, &project_dir.join(CONFIG_FILE_NAME))?;
        config.project_dir = project_dir;
        config.validate()?;
        Ok(config)
    }

    /// Configuration with every default for package `name`.
    pub fn for_package(name: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: PackageSection {
                name: name.into(),
                header: None,
                sentinel: None,
            },
            metadata: MetadataSection::default(),
            requirements: RequirementsSection::default(),
            extras: ExtrasSection::default(),
            project_dir: project_dir.into(),
        }
    }

    /// Check the parsed values.
    ///
    /// # Errors
    ///
    /// [`DistreqError::ConfigValidationError`] for an empty package name, an
    /// empty base requirements file, or an invalid extras declaration.
    pub fn validate(&self) -> Result<()> {
        if self.package.name.trim().is_empty() {
            return Err(DistreqError::ConfigValidationError {
                reason: "package.name cannot be empty".to_string(),
            }
            .into());
        }
        if self.requirements.install.trim().is_empty() {
            return Err(DistreqError::ConfigValidationError {
                reason: "requirements.install cannot be empty".to_string(),
            }
            .into());
        }
        self.extras_table().map(|_| ())
    }

    /// Directory the configuration belongs to.
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Absolute or project-relative path of the metadata header.
    #[must_use]
    pub fn header_path(&self) -> PathBuf {
        match &self.package.header {
            Some(header) => self.project_dir.join(header),
            None => self.project_dir.join(&self.package.name).join(DEFAULT_HEADER_FILE),
        }
    }

    /// Sentinel line of the metadata scan.
    #[must_use]
    pub fn sentinel(&self) -> &str {
        self.package.sentinel.as_deref().unwrap_or(DEFAULT_SENTINEL)
    }

    /// Directory all requirement paths are resolved against.
    #[must_use]
    pub fn requirements_root(&self) -> PathBuf {
        self.project_dir.join(&self.requirements.dir)
    }

    /// Test requirements file, unless disabled with `tests = ""`.
    #[must_use]
    pub fn tests_file(&self) -> Option<&str> {
        let tests = self.requirements.tests.trim();
        (!tests.is_empty()).then_some(tests)
    }

    /// Metadata extractor configured with this project's sentinel.
    pub fn metadata_extractor(&self) -> Result<MetadataExtractor> {
        Ok(MetadataExtractor::new()?.with_sentinel(self.sentinel()))
    }

    /// Resolver for this project's requirements root.
    #[must_use]
    pub fn resolver(&self) -> RequirementResolver {
        RequirementResolver::new(self.requirements_root())
    }

    /// Declared extras: conventional names first, then explicit files.
    pub fn extras_table(&self) -> Result<ExtrasTable> {
        let mut table = ExtrasTable::from_names(&self.extras.names, &self.extras.dir)?;
        for (name, path) in &self.extras.files {
            table.push(name, path.clone())?;
        }
        Ok(table)
    }

    /// Aggregator over every declared extra.
    pub fn extras_aggregator(&self) -> Result<ExtrasAggregator> {
        Ok(ExtrasAggregator::new(self.resolver(), self.extras_table()?))
    }

    /// Starter configuration written by `distreq init`.
    #[must_use]
    pub fn template(name: &str) -> String {
        format!(
            r#"# distreq project configuration

[package]
name = "{name}"
# header = "{name}/{DEFAULT_HEADER_FILE}"
# sentinel = "{DEFAULT_SENTINEL}"

[metadata]
required = [{required}]

[requirements]
dir = "{DEFAULT_REQUIREMENTS_DIR}"
install = "{DEFAULT_INSTALL_FILE}"
# Set to "" when the project has no test requirements
tests = "{DEFAULT_TESTS_FILE}"

[extras]
dir = "{DEFAULT_EXTRAS_DIR}"
# Each name is backed by <requirements.dir>/<extras.dir>/<name>.txt
names = []

# Extras with a non-conventional file, relative to requirements.dir
[extras.files]
"#,
            required = DEFAULT_REQUIRED_KEYS
                .iter()
                .map(|k| format!("\"{k}\""))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Find `distreq.toml` in the current directory or any parent.
pub fn find_config() -> Result<PathBuf> {
    let current = std::env::current_dir().context("Cannot determine current working directory")?;
    find_config_from(current)
}

/// Use `explicit_path` when given, otherwise search from the current directory.
///
/// # Errors
///
/// [`DistreqError::ConfigNotFound`] when the explicit path does not exist or
/// the search reaches the filesystem root.
pub fn find_config_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(DistreqError::ConfigNotFound.into())
            }
        }
        None => find_config(),
    }
}

/// Search upwards from `current` for `distreq.toml`.
pub fn find_config_from(mut current: PathBuf) -> Result<PathBuf> {
    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(DistreqError::ConfigNotFound.into());
        }
    }
}
