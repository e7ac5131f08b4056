//! Print the exclusion pattern.
//!
//! # Examples
//!
//! ```bash
//! # Pattern from excluder.toml
//! pkgex generate
//!
//! # Ad-hoc packages, no configuration needed
//! pkgex generate -p react -p @myorg --exclude-components
//!
//! # Machine-readable output
//! pkgex generate --format json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use super::common::{CommandContext, OutputFormat, SelectionArgs};

/// Command to print the generated pattern.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// JSON document printed by `generate --format json`.
#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    pattern: &'a str,
    packages: Vec<&'a str>,
    exclude_components: bool,
    config: Option<String>,
}

impl GenerateCommand {
    /// Execute the command with an optional explicit configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be resolved.
    pub fn execute_with_config_path(self, config_path: Option<PathBuf>) -> Result<()> {
        let ctx = CommandContext::resolve(config_path, &self.selection)?;
        println!("{}", self.render(&ctx)?);
        Ok(())
    }

    /// Render the command output without printing it.
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let pattern = ctx.pattern();

        info!(
            "Generated pattern for {} package(s){}",
            ctx.request.packages().len(),
            if ctx.request.exclude_components() { " and components" } else { "" }
        );

        match self.format {
            OutputFormat::Text => Ok(pattern.into_string()),
            OutputFormat::Json => {
                let output = GenerateOutput {
                    pattern: pattern.as_str(),
                    packages: ctx.request.packages().iter().map(|p| p.as_str()).collect(),
                    exclude_components: ctx.request.exclude_components(),
                    config: ctx.config_path.as_ref().map(|p| p.display().to_string()),
                };
                serde_json::to_string_pretty(&output).context("Failed to serialize output")
            }
        }
    }
}
