//! packages-excluder - node_modules exclusion patterns for build and test tools
//!
//! Test runners and bundlers usually skip transforming anything under
//! `node_modules`. Some packages still need the transform: ESM-only
//! dependencies, or first-party components installed into dependency storage.
//! This crate generates the single regular expression that expresses
//! "everything in dependency storage except these packages", covering flat
//! installs (npm, yarn) and pnpm's content-addressed store.
//!
//! # Architecture Overview
//!
//! - [`pattern`] - The generator: name escaping, store-name encoding,
//!   component alternatives and assembly into one negative lookahead, plus
//!   a matcher for testing paths from Rust
//! - [`config`] - `excluder.toml` loading and discovery
//! - [`cli`] - The `pkgex` command line
//! - [`core`] - Error types and user-friendly error reporting
//!
//! # Quick Start
//!
//! ```rust
//! use packages_excluder::pattern::{GenerationRequest, generate_node_modules_pattern};
//!
//! # fn main() -> Result<(), packages_excluder::core::ExcluderError> {
//! let request = GenerationRequest::from_names(["react", "@myorg"])?;
//! let pattern = generate_node_modules_pattern(&request);
//!
//! // e.g. jest: transformIgnorePatterns: [pattern]
//! assert!(pattern.as_str().starts_with("node_modules/(?!"));
//! # Ok(())
//! # }
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Pattern for the packages listed in excluder.toml
//! pkgex generate
//!
//! # Ad-hoc
//! pkgex generate -p react -p @myorg --exclude-components
//!
//! # What would happen to these paths?
//! pkgex check node_modules/.pnpm/react@18.2.0/node_modules/react/index.js
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod pattern;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
