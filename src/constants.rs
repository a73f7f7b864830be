//! Default names and markers shared across the crate.
//!
//! These mirror the conventional layout of a Python source distribution:
//! a `requirements/` tree next to the package directory, extras under
//! `requirements/extras/`, and metadata in `<package>/__init__.py`.

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "distreq.toml";

/// Line that ends the metadata scan of a header file.
pub const DEFAULT_SENTINEL: &str = "# -eof meta-";

/// Header file inside the package directory.
pub const DEFAULT_HEADER_FILE: &str = "__init__.py";

/// Requirements root, relative to the project directory.
pub const DEFAULT_REQUIREMENTS_DIR: &str = "requirements";

/// Base installation requirements, relative to the requirements root.
pub const DEFAULT_INSTALL_FILE: &str = "default.txt";

/// Test requirements, relative to the requirements root.
pub const DEFAULT_TESTS_FILE: &str = "test.txt";

/// Extras directory, relative to the requirements root.
pub const DEFAULT_EXTRAS_DIR: &str = "extras";

/// File extension of conventional extras files.
pub const EXTRAS_FILE_EXTENSION: &str = "txt";

/// Prefix of an include directive in a requirement file.
pub const INCLUDE_PREFIX: &str = "-r ";

/// Start of a comment in a requirement file.
pub const COMMENT_MARKER: char = '#';

/// Metadata key the docstring rule writes to.
pub const DOC_KEY: &str = "doc";

/// Metadata keys the packaging step looks up by default.
pub const DEFAULT_REQUIRED_KEYS: &[&str] =
    &["version", "doc", "keywords", "author", "contact", "homepage"];
