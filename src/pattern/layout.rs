//! Directory markers describing where dependencies live on disk.

use crate::constants::{DEFAULT_MODULES_DIR, DEFAULT_STORE_DIR};
use crate::core::ExcluderError;
use serde::{Deserialize, Serialize};

/// The two directory names the builder anchors on.
///
/// - `modules_dir` is the dependency-storage marker. It appears at the root
///   of a flat install and again inside every store entry.
/// - `store_dir` is the content-addressed store nested directly under
///   `modules_dir`.
///
/// ```toml
/// [layout]
/// modules_dir = "node_modules"
/// store_dir = ".pnpm"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Dependency-storage marker, `node_modules` by default.
    pub modules_dir: String,
    /// Store marker, `.pnpm` by default.
    pub store_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            modules_dir: DEFAULT_MODULES_DIR.to_string(),
            store_dir: DEFAULT_STORE_DIR.to_string(),
        }
    }
}

impl Layout {
    /// Creates a layout from explicit marker names.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::InvalidLayout`] if either marker is not a
    /// single, non-empty path segment.
    pub fn new(
        modules_dir: impl Into<String>,
        store_dir: impl Into<String>,
    ) -> Result<Self, ExcluderError> {
        let layout = Self {
            modules_dir: modules_dir.into(),
            store_dir: store_dir.into(),
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks that both markers are single path segments.
    ///
    /// Deserialized layouts bypass [`Layout::new`], so configuration loading
    /// calls this explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::InvalidLayout`] for an empty marker or one
    /// containing a path separator.
    pub fn validate(&self) -> Result<(), ExcluderError> {
        for marker in [&self.modules_dir, &self.store_dir] {
            if marker.is_empty() {
                return Err(ExcluderError::InvalidLayout {
                    marker: marker.clone(),
                    reason: "marker cannot be empty".to_string(),
                });
            }
            if marker.contains('/') || marker.contains('\\') {
                return Err(ExcluderError::InvalidLayout {
                    marker: marker.clone(),
                    reason: "marker must be a single path segment".to_string(),
                });
            }
        }
        Ok(())
    }
}
