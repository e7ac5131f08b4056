//! Fixtures for exercising generated patterns.

use crate::constants::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds the on-disk paths a package manager would produce for one package.
///
/// Every builder appends `/index.js` so paths look like real module files.
#[derive(Debug, Clone)]
pub struct StorePaths {
    name: String,
    modules_dir: String,
    store_dir: String,
}

impl StorePaths {
    /// Paths for `name` under the default `node_modules` / `.pnpm` layout.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules_dir: crate::constants::DEFAULT_MODULES_DIR.to_string(),
            store_dir: crate::constants::DEFAULT_STORE_DIR.to_string(),
        }
    }

    /// Use custom layout markers.
    #[must_use]
    pub fn with_layout(mut self, modules_dir: &str, store_dir: &str) -> Self {
        self.modules_dir = modules_dir.to_string();
        self.store_dir = store_dir.to_string();
        self
    }

    /// Flattened store encoding of the name (`@org/name` -> `@org+name`).
    #[must_use]
    pub fn encoded(&self) -> String {
        self.name.replacen('/', "+", 1)
    }

    /// `node_modules/<name>/index.js`
    #[must_use]
    pub fn flat(&self) -> String {
        format!("{}/{}/index.js", self.modules_dir, self.name)
    }

    /// `node_modules/.pnpm/<host>/<name>/index.js`
    #[must_use]
    pub fn legacy_store(&self, host: &str) -> String {
        format!("{}/{}/{host}/{}/index.js", self.modules_dir, self.store_dir, self.name)
    }

    /// `node_modules/.pnpm/<encoded>/index.js`
    #[must_use]
    pub fn flattened_store(&self) -> String {
        format!("{}/{}/{}/index.js", self.modules_dir, self.store_dir, self.encoded())
    }

    /// `node_modules/.pnpm/<host>+<encoded>/index.js`
    #[must_use]
    pub fn flattened_store_with_host(&self, host: &str) -> String {
        format!("{}/{}/{host}+{}/index.js", self.modules_dir, self.store_dir, self.encoded())
    }

    /// `node_modules/.pnpm/<encoded>@<version>/node_modules/<name>/index.js`,
    /// the real file of a pnpm install.
    #[must_use]
    pub fn versioned_store(&self, version: &str) -> String {
        format!(
            "{m}/{s}/{}@{version}/{m}/{}/index.js",
            self.encoded(),
            self.name,
            m = self.modules_dir,
            s = self.store_dir
        )
    }

    /// `node_modules/.pnpm/<entry>/node_modules/<name>/index.js`
    #[must_use]
    pub fn nested_store(&self, entry: &str) -> String {
        format!(
            "{m}/{s}/{entry}/{m}/{}/index.js",
            self.name,
            m = self.modules_dir,
            s = self.store_dir
        )
    }

    /// Every layout form, using `host` where a registry host applies.
    #[must_use]
    pub fn all(&self, host: &str) -> Vec<String> {
        vec![
            self.flat(),
            self.legacy_store(host),
            self.flattened_store(),
            self.flattened_store_with_host(host),
            self.versioned_store("1.0.0"),
        ]
    }
}

/// A temporary project directory with an optional `excluder.toml`.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    /// Create an empty project.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Create a project whose `excluder.toml` contains `content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn with_config(content: &str) -> Result<Self> {
        let project = Self::new()?;
        project.write_config(content)?;
        Ok(project)
    }

    /// Project root.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the project's `excluder.toml`.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE_NAME)
    }

    /// Write `excluder.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)
            .with_context(|| format!("Failed to write {}", self.config_path().display()))
    }

    /// Create a subdirectory and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn subdir(&self, relative: &str) -> Result<PathBuf> {
        let dir = self.path().join(relative);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir)
    }
}
