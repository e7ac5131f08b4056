//! Exclusion pattern generation.
//!
//! Build and test tools commonly skip everything under `node_modules` while
//! still transforming a handful of packages. This module produces the single
//! regular expression that expresses "everything in dependency storage
//! except these packages" across the layouts package managers use:
//!
//! - **Flat** (npm, yarn): `node_modules/<name>/...`
//! - **Store, legacy** (pnpm < 6): `node_modules/.pnpm/<registry>/<name>/...`
//! - **Store, flattened** (pnpm >= 6): `node_modules/.pnpm/[<registry>+]<name>@<version>/...`
//!   where scoped names are encoded as `@org+name`
//! - **Store, nested**: `node_modules/.pnpm/<entry>/node_modules/<name>/...`
//!
//! # Pipeline
//!
//! Generation is four pure steps:
//!
//! 1. [`escape_literal`] - make each name regex-safe
//! 2. [`PackageName::store_encoded`] - derive the flattened store name
//! 3. [`PatternBuilder::alternatives`] - one alternative per name and layout,
//!    plus the structural component alternatives
//! 4. [`PatternBuilder::build`] - wrap everything in one negative lookahead
//!
//! # Examples
//!
//! ```rust
//! use packages_excluder::pattern::{GenerationRequest, generate_node_modules_pattern};
//!
//! # fn example() -> Result<(), packages_excluder::core::ExcluderError> {
//! let request = GenerationRequest::from_names(["react", "@myorg"])?
//!     .with_exclude_components(true);
//! let pattern = generate_node_modules_pattern(&request);
//!
//! // Hand the source to the downstream tool...
//! println!("{pattern}");
//!
//! // ...or test paths from Rust.
//! let matcher = pattern.compile()?;
//! assert!(matcher.is_excluded("node_modules/.pnpm/registry.npmjs.org+@myorg+ui/")?);
//! assert!(matcher.matches("node_modules/lodash/index.js")?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod builder;
mod component;
mod escape;
mod generated;
mod layout;
mod matcher;
mod package;
mod request;

pub use builder::PatternBuilder;
pub use component::{COMPONENT_NAME, COMPONENT_STORE_NAME};
pub use escape::escape_literal;
pub use generated::GeneratedPattern;
pub use layout::Layout;
pub use matcher::ExclusionMatcher;
pub use package::PackageName;
pub use request::GenerationRequest;

/// Generates the pattern for `request` using the default
/// `node_modules` / `.pnpm` layout.
#[must_use]
pub fn generate_node_modules_pattern(request: &GenerationRequest) -> GeneratedPattern {
    PatternBuilder::default().build(request)
}
