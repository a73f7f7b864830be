//! Common test utilities for distreq integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header with every key the default configuration requires
pub const CELERY_HEADER: &str = r#""""Distributed Task Queue."""
# :copyright: (c) 2015-2016 Ask Solem.  All rights reserved.

__version__ = '5.3.1'
__author__ = 'Ask Solem'
__contact__ = 'auvipy@gmail.com'
__homepage__ = 'https://docs.celeryq.dev/'
__docformat__ = 'restructuredtext'
__keywords__ = 'task job queue distributed messaging actor'

# -eof meta-

__version__ = '0.0.0'
"#;

/// A project directory in a temporary location
pub struct TestProject {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Project with `distreq.toml`, a celery header and its requirements tree
    pub fn celery() -> Result<Self> {
        let project = Self::new()?;
        project.write_config(
            r#"
[package]
name = "celery"

[requirements]
tests = "test.txt"

[extras]
names = ["redis", "sqs"]

[extras.files]
custom = "extras/special.txt"
"#,
        )?;
        project.write_file("celery/__init__.py", CELERY_HEADER)?;
        project.write_requirement(
            "default.txt",
            "billiard>=4.2.0,<5.0\n# messaging\n-r extras/kombu.txt\nvine>=5.1.0,<6.0\n",
        )?;
        project.write_requirement("extras/kombu.txt", "kombu>=5.3.4,<6.0  # transport\n")?;
        project.write_requirement("test.txt", "pytest>=7.4.4\n-r default.txt\n")?;
        project.write_requirement("extras/redis.txt", "redis>=4.5.2,<6.0.0,!=4.5.5\n")?;
        project.write_requirement("extras/sqs.txt", "boto3>=1.26.143\n-r extras/kombu.txt\n")?;
        project.write_requirement("extras/special.txt", "# nothing yet\n")?;
        Ok(project)
    }

    /// Get the project directory path
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Write `distreq.toml`
    pub fn write_config(&self, content: &str) -> Result<()> {
        self.write_file("distreq.toml", content)
    }

    /// Write a file below `requirements/`
    pub fn write_requirement(&self, path: &str, content: &str) -> Result<()> {
        self.write_file(&format!("requirements/{path}"), content)
    }

    /// Write any file relative to the project directory
    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.project_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))
    }

    /// `distreq` command running in the project directory
    pub fn distreq(&self) -> Command {
        let mut cmd = Command::cargo_bin("distreq").expect("distreq binary is built");
        cmd.current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("DISTREQ_CONFIG");
        cmd
    }

    /// Run `distreq` and parse its stdout as JSON
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        self.json_as(args)
    }

    /// Run `distreq` and deserialize its stdout into `T`
    pub fn json_as<T: serde::de::DeserializeOwned>(&self, args: &[&str]) -> T {
        let output = self.distreq().args(args).output().expect("distreq runs");
        assert!(
            output.status.success(),
            "distreq {args:?} failed\nStderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is JSON")
    }
}
