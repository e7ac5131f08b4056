//! The pattern source string produced by the builder.

use super::matcher::ExclusionMatcher;
use crate::core::ExcluderError;
use serde::Serialize;
use std::fmt;

/// A generated pattern in source form.
///
/// This is what downstream tooling consumes, typically as a transform-ignore
/// entry. It is not compiled; use [`GeneratedPattern::compile`] to test paths
/// against it from Rust.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GeneratedPattern(String);

impl GeneratedPattern {
    pub(crate) const fn new(source: String) -> Self {
        Self(source)
    }

    /// The pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the pattern and returns its source.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Compiles the pattern with a lookaround-capable engine.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::PatternCompileError`] if the engine rejects
    /// the pattern.
    pub fn compile(&self) -> Result<ExclusionMatcher, ExcluderError> {
        ExclusionMatcher::new(self.clone())
    }
}

impl fmt::Display for GeneratedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedPattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<GeneratedPattern> for String {
    fn from(value: GeneratedPattern) -> Self {
        value.0
    }
}
