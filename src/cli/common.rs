//! Common utilities shared by CLI commands

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::config::ExcluderConfig;
use crate::pattern::{GeneratedPattern, GenerationRequest, PackageName, PatternBuilder};

/// Package selection flags shared by `generate` and `check`.
///
/// Values given here extend the configuration file rather than replace it:
/// packages are appended after the configured ones and
/// `--exclude-components` can only switch the flag on.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Package or @scope to let through (repeatable).
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    pub packages: Vec<String>,

    /// Also let through @scope/dotted.name component packages.
    #[arg(long)]
    pub exclude_components: bool,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    #[default]
    Text,

    /// A single JSON document for scripting
    Json,
}

/// Everything a command needs after configuration has been resolved.
#[derive(Debug)]
pub struct CommandContext {
    /// Loaded configuration (defaults when no file was found)
    pub config: ExcluderConfig,
    /// Where the configuration came from, if anywhere
    pub config_path: Option<PathBuf>,
    /// Merged request: configured packages first, then CLI packages
    pub request: GenerationRequest,
    /// Builder for the configured layout
    pub builder: PatternBuilder,
}

impl CommandContext {
    /// Load configuration and merge in the command line selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or a package
    /// name is empty.
    pub fn resolve(config_path: Option<PathBuf>, selection: &SelectionArgs) -> Result<Self> {
        let (config, config_path) = ExcluderConfig::discover(config_path)?;

        let extra = selection
            .packages
            .iter()
            .map(|name| PackageName::new(name.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let request = config
            .to_request()?
            .extended(extra)
            .with_exclude_components(config.exclude_components || selection.exclude_components);

        debug!(
            "Resolved request: {} package(s), exclude_components={}",
            request.packages().len(),
            request.exclude_components()
        );

        let builder = config.builder();

        Ok(Self {
            config,
            config_path,
            request,
            builder,
        })
    }

    /// Generate the pattern for the resolved request.
    #[must_use]
    pub fn pattern(&self) -> GeneratedPattern {
        self.builder.build(&self.request)
    }
}
