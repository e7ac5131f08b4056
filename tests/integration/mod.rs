//! Integration test suite for packages-excluder
//!
//! End-to-end checks of generated patterns against realistic dependency
//! storage paths, and of the `pkgex` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **layouts**: listed packages across flat and pnpm store layouts
//! - **components**: `@scope/dotted.name` component handling
//! - **escaping**: names containing regex metacharacters
//! - **cli_generate**: `pkgex generate`
//! - **cli_check**: `pkgex check`
//! - **config**: `excluder.toml` discovery and errors through the binary

mod cli_check;
mod config;
mod escaping;
mod layouts;
