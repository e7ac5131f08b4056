//! Test utilities for packages-excluder
//!
//! Helpers shared by unit tests and the integration suite:
//! - [`init_test_logging`] - opt-in tracing output for tests
//! - [`fixtures`] - dependency-storage path builders and temporary projects
//!
//! # Example
//!
//! ```rust,ignore
//! use packages_excluder::test_utils::fixtures::StorePaths;
//!
//! let paths = StorePaths::new("@myorg/ui.button");
//! assert_eq!(paths.flat(), "node_modules/@myorg/ui.button/index.js");
//! ```

pub mod fixtures;

pub use fixtures::{StorePaths, TestProject};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, tests stay silent.
///
/// ```bash
/// RUST_LOG=trace cargo test --test integration
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
