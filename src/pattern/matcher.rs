//! Compiled form of a generated pattern.
//!
//! The `regex` crate has no lookaround, so matching goes through
//! `fancy-regex`, which runs the lookahead on its backtracking VM and hands
//! the plain sub-expressions to `regex`.

use super::generated::GeneratedPattern;
use crate::core::ExcluderError;
use fancy_regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, trace};

/// `regex`'s default compiled size limit, kept as the floor.
const MIN_DELEGATE_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiled program budget per byte of pattern source.
const DELEGATE_SIZE_PER_BYTE: usize = 256;

/// Tests paths against a [`GeneratedPattern`].
///
/// [`matches`](Self::matches) has the same boolean semantics a downstream
/// tool applies to the pattern: `true` means the path sits in dependency
/// storage and is not covered by a listed package or component, so the
/// ignore rule applies to it. [`is_excluded`](Self::is_excluded) is the
/// negation: the path escapes the ignore rule and gets processed.
///
/// # Examples
///
/// ```rust
/// use packages_excluder::pattern::{GenerationRequest, generate_node_modules_pattern};
///
/// let request = GenerationRequest::from_names(["react"])?;
/// let matcher = generate_node_modules_pattern(&request).compile()?;
///
/// assert!(matcher.is_excluded("node_modules/react/index.js")?);
/// assert!(matcher.matches("node_modules/vue/index.js")?);
/// # Ok::<(), packages_excluder::core::ExcluderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    pattern: GeneratedPattern,
    regex: Regex,
}

impl ExclusionMatcher {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::PatternCompileError`] if `fancy-regex`
    /// rejects the pattern.
    pub fn new(pattern: GeneratedPattern) -> Result<Self, ExcluderError> {
        let limit = delegate_size_limit(pattern.as_str());
        debug!("Compiling {} byte pattern with size limit {}", pattern.as_str().len(), limit);

        let regex = RegexBuilder::new(pattern.as_str())
            .delegate_size_limit(limit)
            .build()
            .map_err(|e| ExcluderError::PatternCompileError {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            pattern,
            regex,
        })
    }

    /// The pattern this matcher was compiled from.
    #[must_use]
    pub const fn pattern(&self) -> &GeneratedPattern {
        &self.pattern
    }

    /// Unanchored search of `path`, `RegExp.prototype.test` style.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::MatchError`] if the backtracking limit is hit.
    pub fn matches(&self, path: &str) -> Result<bool, ExcluderError> {
        let path = normalize_separators(path);
        let matched = self.regex.is_match(&path).map_err(|e| ExcluderError::MatchError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        trace!("{} -> {}", path, if matched { "matched" } else { "not matched" });
        Ok(matched)
    }

    /// Whether the path escapes the ignore rule.
    ///
    /// # Errors
    ///
    /// Same as [`matches`](Self::matches).
    pub fn is_excluded(&self, path: &str) -> Result<bool, ExcluderError> {
        Ok(!self.matches(path)?)
    }

    /// [`matches`](Self::matches) for filesystem paths.
    ///
    /// # Errors
    ///
    /// Same as [`matches`](Self::matches).
    pub fn matches_path(&self, path: &Path) -> Result<bool, ExcluderError> {
        self.matches(&path.to_string_lossy())
    }
}

fn delegate_size_limit(pattern: &str) -> usize {
    pattern.len().saturating_mul(DELEGATE_SIZE_PER_BYTE).max(MIN_DELEGATE_SIZE_LIMIT)
}

/// Windows paths use `\`; the pattern only knows `/`.
fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}
