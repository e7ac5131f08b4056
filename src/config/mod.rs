//! Configuration management for packages-excluder
//!
//! Projects describe what the generated pattern should let through in an
//! `excluder.toml` file next to their `package.json`:
//!
//! ```toml
//! # Packages that must still be transformed even though they live in node_modules
//! packages = ["react", "@myorg", "testing-library__dom"]
//!
//! # Also let through every @scope/dotted.name component
//! exclude_components = true
//!
//! # Optional: non-standard directory names
//! [layout]
//! modules_dir = "node_modules"
//! store_dir = ".pnpm"
//! ```
//!
//! # Discovery
//!
//! 1. An explicit path (`--config` or `PKGEX_CONFIG`) must exist
//! 2. Otherwise `excluder.toml` is searched from the current directory up to
//!    the filesystem root
//! 3. No file found: defaults (nothing excluded, default layout)
//!
//! # Modules
//!
//! - `parser` - Generic TOML parsing utilities with error context

mod parser;

pub use parser::{parse_config, parse_config_str};

use crate::constants::CONFIG_FILE_NAME;
use crate::core::ExcluderError;
use crate::pattern::{GenerationRequest, Layout, PatternBuilder};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of `excluder.toml`.
///
/// Every field is optional; a missing file and an empty file behave the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcluderConfig {
    /// Packages (or bare scopes) to let through, in order.
    pub packages: Vec<String>,

    /// Whether `@scope/dotted.name` components are let through as well.
    pub exclude_components: bool,

    /// Directory markers.
    pub layout: Layout,
}

impl ExcluderConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// layout markers are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        config
            .layout
            .validate()
            .with_context(|| format!("Invalid [layout] in {}", path.display()))?;

        debug!(
            "Loaded {} with {} package(s), exclude_components={}",
            path.display(),
            config.packages.len(),
            config.exclude_components
        );
        Ok(config)
    }

    /// Resolve and load the configuration for this invocation.
    ///
    /// Returns the configuration together with the file it came from, or
    /// defaults and `None` when no file exists.
    ///
    /// # Errors
    ///
    /// - [`ExcluderError::ConfigNotFound`] if `explicit_path` does not exist
    /// - any error from [`ExcluderConfig::load`]
    pub fn discover(explicit_path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ExcluderError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                Some(path)
            }
            None => {
                let current = std::env::current_dir()
                    .context("Cannot determine current working directory")?;
                find_config_from(current)
            }
        };

        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok((Self::default(), None))
            }
        }
    }

    /// The generation request described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::InvalidPackageName`] for an empty entry in
    /// `packages`.
    pub fn to_request(&self) -> Result<GenerationRequest, ExcluderError> {
        Ok(GenerationRequest::from_names(self.packages.iter().cloned())?
            .with_exclude_components(self.exclude_components))
    }

    /// A builder for the configured layout.
    #[must_use]
    pub fn builder(&self) -> PatternBuilder {
        PatternBuilder::new(self.layout.clone())
    }
}

/// Search for `excluder.toml` from `current` up to the filesystem root.
///
/// Returns the first match, closest directory first.
#[must_use]
pub fn find_config_from(mut current: PathBuf) -> Option<PathBuf> {
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}
