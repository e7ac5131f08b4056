//! Global constants used throughout the packages-excluder codebase.
//!
//! Directory markers, configuration file names and environment variables
//! live here so the builder, the configuration loader and the CLI agree
//! on them.

/// Default dependency-storage marker.
///
/// npm, yarn and pnpm all install third-party packages below a
/// `node_modules` directory, and pnpm nests it again inside every store
/// entry.
pub const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Default store marker used by content-addressed installs (pnpm).
pub const DEFAULT_STORE_DIR: &str = ".pnpm";

/// Name of the project configuration file searched for by the CLI.
pub const CONFIG_FILE_NAME: &str = "excluder.toml";

/// Environment variable pointing at an explicit configuration file.
///
/// Takes effect when `--config` is not passed on the command line.
pub const CONFIG_ENV_VAR: &str = "PKGEX_CONFIG";

/// Characters escaped by [`crate::pattern::escape_literal`].
///
/// Kept to the set that is meaningful (or harmless to escape) in both the
/// JavaScript and Rust regex dialects. Escaping `-` or `@` would be a
/// syntax error for Unicode-mode JavaScript patterns.
pub const REGEX_META_CHARS: &[char] =
    &['.', '+', '*', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\', '/'];
