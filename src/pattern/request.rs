//! The immutable input to pattern generation.

use super::package::PackageName;
use crate::core::ExcluderError;

/// What to exclude: an ordered set of package names and the component flag.
///
/// Duplicate names collapse to their first occurrence, so the generated
/// pattern follows input order and stays reproducible.
///
/// # Examples
///
/// ```rust
/// use packages_excluder::pattern::GenerationRequest;
///
/// let request = GenerationRequest::from_names(["react", "@myorg", "react"])?
///     .with_exclude_components(true);
///
/// assert_eq!(request.packages().len(), 2);
/// assert!(request.exclude_components());
/// # Ok::<(), packages_excluder::core::ExcluderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    packages: Vec<PackageName>,
    exclude_components: bool,
}

impl GenerationRequest {
    /// An empty request: no packages, components not excluded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from already validated names.
    #[must_use]
    pub fn with_packages(packages: impl IntoIterator<Item = PackageName>) -> Self {
        let mut request = Self::new();
        for package in packages {
            request.push(package);
        }
        request
    }

    /// Builds a request from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ExcluderError::InvalidPackageName`] for the first empty name.
    pub fn from_names<I, S>(names: I) -> Result<Self, ExcluderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let packages =
            names.into_iter().map(PackageName::new).collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_packages(packages))
    }

    /// Returns a copy of this request with the component flag set.
    #[must_use]
    pub fn with_exclude_components(mut self, exclude_components: bool) -> Self {
        self.exclude_components = exclude_components;
        self
    }

    /// Returns a copy of this request with `extra` appended after the
    /// existing packages.
    #[must_use]
    pub fn extended(mut self, extra: impl IntoIterator<Item = PackageName>) -> Self {
        for package in extra {
            self.push(package);
        }
        self
    }

    /// Packages in first-seen order.
    #[must_use]
    pub fn packages(&self) -> &[PackageName] {
        &self.packages
    }

    /// Whether component packages are excluded too.
    #[must_use]
    pub const fn exclude_components(&self) -> bool {
        self.exclude_components
    }

    /// True when the request excludes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && !self.exclude_components
    }

    fn push(&mut self, package: PackageName) {
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }
}
