//! Generic TOML parsing with file path context.
//!
//! Read and parse failures carry the offending path so the CLI can tell the
//! user which file to fix:
//!
//! ```text
//! Invalid configuration in /repo/excluder.toml: line 2: invalid type: string "yes", expected a boolean
//! ```

use crate::core::ExcluderError;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML file into `T`.
///
/// # Errors
///
/// Returns an error if the file cannot be read (path as context, the
/// `std::io::Error` as the cause) or [`ExcluderError::ConfigError`] if its
/// content does not deserialize into `T`.
///
/// # Examples
///
/// ```rust,no_run
/// use packages_excluder::config::parse_config;
/// use packages_excluder::config::ExcluderConfig;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: ExcluderConfig = parse_config(Path::new("excluder.toml"))?;
/// println!("{} package(s)", config.packages.len());
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content, path)
}

/// Parse TOML `content` that came from `origin`.
///
/// Split out from [`parse_config`] so callers holding content in memory get
/// the same error shape.
///
/// # Errors
///
/// Returns an error if `content` does not deserialize into `T`.
pub fn parse_config_str<T>(content: &str, origin: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let config: T = toml::from_str(content).map_err(|e| ExcluderError::ConfigError {
        file: origin.display().to_string(),
        reason: describe_toml_error(content, &e),
    })?;

    Ok(config)
}

/// The TOML message prefixed with the line it refers to, when known.
fn describe_toml_error(content: &str, error: &toml::de::Error) -> String {
    let message = error.message().trim_end();
    match error.span() {
        Some(span) => {
            let before = content.get(..span.start).unwrap_or(content);
            let line = before.matches('\n').count() + 1;
            format!("line {line}: {message}")
        }
        None => message.to_string(),
    }
}
