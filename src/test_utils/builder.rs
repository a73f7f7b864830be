//! Test project builder for simplified test setup
//!
//! Writes a `distreq.toml`, a metadata header and requirement files into a
//! temporary directory.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::ProjectConfig;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_HEADER_FILE, DEFAULT_REQUIREMENTS_DIR};

/// A builder for creating test projects with a fluent API
pub struct TestProjectBuilder {
    name: String,
    header: Option<String>,
    config_extra: String,
    requirements: Vec<(String, String)>,
}

impl TestProjectBuilder {
    /// Builder for package `name` with the default layout
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            config_extra: String::new(),
            requirements: Vec::new(),
        }
    }

    /// Content of `<name>/__init__.py`
    pub fn header(mut self, content: impl Into<String>) -> Self {
        self.header = Some(content.into());
        self
    }

    /// TOML appended after the `[package]` section
    pub fn config_extra(mut self, toml: impl Into<String>) -> Self {
        self.config_extra.push_str(&toml.into());
        self
    }

    /// A file below `requirements/`
    pub fn requirement(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.requirements.push((path.into(), content.into()));
        self
    }

    /// Build the test project
    pub fn build(self) -> Result<TestProject> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().to_path_buf();

        let config_path = project_dir.join(CONFIG_FILE_NAME);
        let config = format!("[package]\nname = \"{}\"\n\n{}", self.name, self.config_extra);
        std::fs::write(&config_path, config)?;

        if let Some(header) = &self.header {
            write_file(&project_dir.join(&self.name).join(DEFAULT_HEADER_FILE), header)?;
        }

        let requirements_dir = project_dir.join(DEFAULT_REQUIREMENTS_DIR);
        for (path, content) in &self.requirements {
            write_file(&requirements_dir.join(path), content)?;
        }

        Ok(TestProject {
            _temp_dir: temp_dir,
            project_dir,
            config_path,
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A built test project
pub struct TestProject {
    _temp_dir: TempDir, // Keep temp dir alive
    pub project_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TestProject {
    /// Create a new test project builder
    pub fn builder(name: impl Into<String>) -> TestProjectBuilder {
        TestProjectBuilder::new(name)
    }

    /// Load the written configuration
    pub fn config(&self) -> Result<ProjectConfig> {
        ProjectConfig::load(&self.config_path)
    }
}
