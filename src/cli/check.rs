//! Classify paths against the generated pattern.
//!
//! Each path is reported as `excluded` (let through, the ignore rule does
//! not apply) or `included` (the ignore rule applies). Useful for checking a
//! configuration before wiring the pattern into a build tool.
//!
//! # Examples
//!
//! ```bash
//! pkgex check -p react node_modules/react/index.js node_modules/vue/index.js
//! # excluded  node_modules/react/index.js
//! # included  node_modules/vue/index.js
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{CommandContext, OutputFormat, SelectionArgs};

/// Command to test paths against the generated pattern.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Paths to classify
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<String>,

    #[command(flatten)]
    selection: SelectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// One classified path.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct PathReport {
    path: String,
    excluded: bool,
}

impl CheckCommand {
    /// Execute the command with an optional explicit configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be resolved or the pattern
    /// cannot be compiled.
    pub fn execute_with_config_path(self, config_path: Option<PathBuf>) -> Result<()> {
        let ctx = CommandContext::resolve(config_path, &self.selection)?;
        let reports = self.classify(&ctx)?;

        match self.format {
            OutputFormat::Text => {
                for report in &reports {
                    let status = if report.excluded {
                        "excluded".green()
                    } else {
                        "included".yellow()
                    };
                    println!("{status}  {}", report.path);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize output")?;
                println!("{json}");
            }
        }

        Ok(())
    }

    fn classify(&self, ctx: &CommandContext) -> Result<Vec<PathReport>> {
        let matcher = ctx.pattern().compile()?;

        self.paths
            .iter()
            .map(|path| {
                let excluded = matcher
                    .is_excluded(path)
                    .with_context(|| format!("Failed to check path: {path}"))?;
                Ok(PathReport {
                    path: path.clone(),
                    excluded,
                })
            })
            .collect()
    }
}
