//! Command-line interface for packages-excluder.
//!
//! The `pkgex` binary is a thin caller around [`crate::pattern`]: it resolves
//! configuration, merges command line selections and prints or applies the
//! generated pattern.
//!
//! # Commands
//!
//! - `generate` - Print the exclusion pattern
//! - `check` - Classify paths against the pattern
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging on stderr
//! - `--quiet` / `-q` - Errors only
//! - `--config` / `-c` - Explicit `excluder.toml` (also `PKGEX_CONFIG`)
//!
//! Logs always go to stderr so stdout carries nothing but command output and
//! can be captured directly, e.g. `PATTERN=$(pkgex generate)`.

mod check;
pub mod common;
mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::CONFIG_ENV_VAR;

/// Runtime configuration derived from global flags.
///
/// Separated from [`Cli`] so logging setup can be exercised without parsing
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter override from `--verbose` / `--quiet`; `None` means `info`.
    pub log_level: Option<String>,

    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over `log_level`. Calling this more than
    /// once is harmless; later calls keep the first subscriber.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_filter())
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pkgex",
    about = "Generate node_modules exclusion patterns for build and test tools",
    version,
    long_about = "pkgex generates a single regular expression that matches dependency storage \
                  (node_modules, including pnpm's .pnpm store) except for an allow-list of \
                  packages and, optionally, @scope/dotted.name components."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to excluder.toml (searched upward from the current directory by default)
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the exclusion pattern
    Generate(generate::GenerateCommand),

    /// Report whether paths are excluded by the pattern
    Check(check::CheckCommand),
}

impl Cli {
    /// Execute the parsed command line.
    ///
    /// # Errors
    ///
    /// Returns the command's error for `main` to report.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Dispatch to the subcommand with an already built configuration.
    ///
    /// # Errors
    ///
    /// Returns the command's error.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_config_path(config.config_path),
            Commands::Check(cmd) => cmd.execute_with_config_path(config.config_path),
        }
    }
}
