//! Package names as they appear in dependency storage.
//!
//! A [`PackageName`] is either unscoped (`react`) or scoped (`@myorg/button`).
//! A bare scope (`@myorg`) is also accepted: listing it excludes every package
//! published under that scope.

use crate::core::ExcluderError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// npm naming rules: optional `@scope/` prefix, lowercase URL-safe characters.
/// A bare scope is allowed so that whole organizations can be listed.
const NPM_NAME_PATTERN: &str =
    r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$|^@[a-z0-9\-*~][a-z0-9\-*._~]*$";

fn npm_name_regex() -> Option<&'static Regex> {
    static NPM_NAME: OnceLock<Option<Regex>> = OnceLock::new();
    NPM_NAME.get_or_init(|| Regex::new(NPM_NAME_PATTERN).ok()).as_ref()
}

/// A non-empty package identifier.
///
/// Names that break npm naming rules (uppercase, spaces, more than one `/`)
/// are still accepted; they are escaped like any other name and a warning
/// is logged so the caller can fix its configuration.
///
/// # Examples
///
/// ```rust
/// use packages_excluder::pattern::PackageName;
///
/// let name: PackageName = "@myorg/ui.button".parse()?;
/// assert_eq!(name.scope(), Some("@myorg"));
/// assert_eq!(name.local_name(), "ui.button");
/// assert_eq!(name.store_encoded(), "@myorg+ui.button");
/// assert!(name.is_component());
/// # Ok::<(), packages_excluder::core::ExcluderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Creates a package name, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::InvalidPackageName`] when `name` is empty or
    /// only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ExcluderError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExcluderError::InvalidPackageName {
                name,
                reason: "package name cannot be empty".to_string(),
            });
        }

        if !npm_name_regex().is_some_and(|re| re.is_match(&name)) {
            warn!("Package name '{}' does not follow npm naming rules; matching it literally", name);
        }

        Ok(Self(name))
    }

    /// The name exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name starts with an `@scope`.
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with('@')
    }

    /// The `@scope` part of a scoped name.
    ///
    /// For a bare scope (`@myorg`) this is the whole name.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        if !self.is_scoped() {
            return None;
        }
        Some(self.0.split_once('/').map_or(self.0.as_str(), |(scope, _)| scope))
    }

    /// The part after the scope separator, or the whole name when unscoped.
    ///
    /// A bare scope has an empty local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        if !self.is_scoped() {
            return &self.0;
        }
        self.0.split_once('/').map_or("", |(_, local)| local)
    }

    /// Encoding used by flattened store entries: the first `/` becomes `+`.
    ///
    /// Unscoped names are returned unchanged.
    #[must_use]
    pub fn store_encoded(&self) -> Cow<'_, str> {
        if self.0.contains('/') {
            Cow::Owned(self.0.replacen('/', "+", 1))
        } else {
            Cow::Borrowed(&self.0)
        }
    }

    /// Whether this concrete name follows the component convention:
    /// scoped, with at least one `.` in the local name.
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.is_scoped() && self.local_name().contains('.')
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = ExcluderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = ExcluderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackageName> for String {
    fn from(value: PackageName) -> Self {
        value.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
