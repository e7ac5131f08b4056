//! Assembly of the exclusion pattern.
//!
//! This is the only place that knows how dependency storage is laid out on
//! disk. Everything it emits sits inside one negative lookahead anchored at
//! the modules directory:
//!
//! ```text
//! node_modules/(?!(?:<alt>|<alt>|...)(?:/|$))
//! ```
//!
//! The anchor is not tied to the start of the path. Store installs nest the
//! modules directory inside every store entry, and a path counts as "not
//! excluded" as soon as any occurrence of the marker is followed by
//! something outside the alternation.
//!
//! # Alternatives per package
//!
//! | Layout           | Shape                                               |
//! |------------------|-----------------------------------------------------|
//! | flat             | `<name>`                                            |
//! | store, legacy    | `.pnpm/<registry>/<name>`                           |
//! | store, nested    | `.pnpm/<entry>/node_modules/<name>`                 |
//! | store, flattened | `.pnpm/[<registry>+]<name or encoded>[@...]`        |
//!
//! When components are excluded the same four shapes are emitted once more
//! with the structural patterns from [`super::component`].

use super::component::{COMPONENT_NAME, COMPONENT_STORE_NAME};
use super::escape::escape_literal;
use super::generated::GeneratedPattern;
use super::layout::Layout;
use super::package::PackageName;
use super::request::GenerationRequest;
use tracing::{debug, trace};

/// Marker followed by a separator or the end of the path.
const TERMINATOR: &str = "(?:/|$)";

/// A registry host joined to a flattened store name with `+`.
///
/// Hosts never contain `@`, which keeps an encoded scope (`@org+name`) from
/// being read as a host.
const REGISTRY_PREFIX: &str = r"(?:[^/@+]+\+)?";

/// Version or scope continuation after a name in a flattened store entry.
const STORE_SUFFIX: &str = "(?:[@+][^/]*)?";

/// Builds exclusion patterns for one [`Layout`].
///
/// The builder is cheap to create and holds no state beyond the escaped
/// markers, so it can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use packages_excluder::pattern::{GenerationRequest, Layout, PatternBuilder};
///
/// let builder = PatternBuilder::new(Layout::default());
/// let request = GenerationRequest::from_names(["react"])?;
/// let pattern = builder.build(&request);
///
/// assert!(pattern.as_str().starts_with("node_modules/(?!"));
/// # Ok::<(), packages_excluder::core::ExcluderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    modules_dir: String,
    store_dir: String,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl PatternBuilder {
    /// Creates a builder for the given layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            modules_dir: escape_literal(&layout.modules_dir),
            store_dir: escape_literal(&layout.store_dir),
        }
    }

    /// Generates the pattern for `request`.
    ///
    /// Identical requests always produce identical strings.
    #[must_use]
    pub fn build(&self, request: &GenerationRequest) -> GeneratedPattern {
        let alternatives = self.alternatives(request);

        debug!(
            "Building exclusion pattern for {} package(s), exclude_components={}, {} alternative(s)",
            request.packages().len(),
            request.exclude_components(),
            alternatives.len()
        );

        let source = if alternatives.is_empty() {
            // Nothing excluded; keep the lookahead shape without an empty branch
            format!("{}/(?!()/)", self.modules_dir)
        } else {
            format!("{}/(?!(?:{}){TERMINATOR})", self.modules_dir, alternatives.join("|"))
        };

        GeneratedPattern::new(source)
    }

    /// All alternatives for `request`, in request order, components last.
    ///
    /// Every entry is non-empty.
    #[must_use]
    pub fn alternatives(&self, request: &GenerationRequest) -> Vec<String> {
        let mut alternatives = Vec::new();

        for package in request.packages() {
            let before = alternatives.len();
            self.push_package(&mut alternatives, package);
            for alternative in &alternatives[before..] {
                trace!("{}: {}", package, alternative);
            }
        }

        if request.exclude_components() {
            self.push_components(&mut alternatives);
        }

        alternatives
    }

    fn push_package(&self, alternatives: &mut Vec<String>, package: &PackageName) {
        let literal = escape_literal(package.as_str());
        let encoded = escape_literal(&package.store_encoded());

        let store_names = if literal == encoded {
            literal.clone()
        } else {
            format!("(?:{literal}|{encoded})")
        };

        alternatives.push(literal.clone());
        alternatives.push(self.store_segment(&literal));
        alternatives.push(format!(
            "{}/{REGISTRY_PREFIX}{store_names}{STORE_SUFFIX}",
            self.store_dir
        ));
    }

    fn push_components(&self, alternatives: &mut Vec<String>) {
        alternatives.push(COMPONENT_NAME.to_string());
        alternatives.push(self.store_segment(COMPONENT_NAME));
        alternatives.push(format!("{}/{REGISTRY_PREFIX}{COMPONENT_STORE_NAME}", self.store_dir));
    }

    /// `<store>/<segment>/[<modules>/]<name>`: the legacy registry directory
    /// layout and the modules directory nested in a store entry.
    fn store_segment(&self, name: &str) -> String {
        format!("{}/[^/]+/(?:{}/)?{name}", self.store_dir, self.modules_dir)
    }
}
