//! Error handling for packages-excluder
//!
//! This module provides the strongly-typed error enum used by the library and
//! the user-friendly reporting layer used by the CLI.
//!
//! # Architecture
//!
//! - [`ExcluderError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-facing details and suggestions
//!
//! Library code returns [`ExcluderError`] (or `anyhow::Error` wrapping it) and
//! the CLI converts whatever reaches `main` with [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use packages_excluder::core::{ExcluderError, ErrorContext};
//!
//! let context = ErrorContext::new(ExcluderError::ConfigNotFound {
//!     path: "ci/excluder.toml".to_string(),
//! })
//! .with_suggestion("Check the path passed to --config");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for packages-excluder operations.
///
/// Pattern generation itself is total over valid input; the variants here
/// cover the edges: input validation, compiling a pattern for matching,
/// and loading configuration.
#[derive(Error, Debug, Clone)]
pub enum ExcluderError {
    /// A package name was rejected before reaching the builder.
    ///
    /// Only the empty name is rejected; unusual names are escaped instead.
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// A layout marker (modules or store directory) is unusable.
    #[error("Invalid layout marker '{marker}': {reason}")]
    InvalidLayout {
        /// The offending marker value
        marker: String,
        /// Why it was rejected
        reason: String,
    },

    /// A generated pattern could not be compiled by the matching engine.
    #[error("Failed to compile pattern '{pattern}': {reason}")]
    PatternCompileError {
        /// Pattern source
        pattern: String,
        /// Engine error message
        reason: String,
    },

    /// The matching engine gave up while testing a path.
    #[error("Failed to match path '{path}': {reason}")]
    MatchError {
        /// The path under test
        path: String,
        /// Engine error message
        reason: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested
        path: String,
    },

    /// Configuration file content is invalid.
    #[error("Invalid configuration in {file}: {reason}")]
    ConfigError {
        /// Configuration file
        file: String,
        /// What is wrong with it
        reason: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information.
///
/// Displayed by the CLI with terminal colors:
/// - Error message: red and bold
/// - Details: yellow
/// - Suggestion: green
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ExcluderError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ExcluderError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognizes [`ExcluderError`] anywhere in the error chain and a top-level
/// [`std::io::Error`]; everything else is reported with its full
/// cause chain.
///
/// # Examples
///
/// ```rust,no_run
/// use packages_excluder::core::{ExcluderError, user_friendly_error};
///
/// let error = anyhow::Error::from(ExcluderError::ConfigNotFound {
///     path: "excluder.toml".to_string(),
/// });
/// user_friendly_error(error).display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(excluder_error) = cause.downcast_ref::<ExcluderError>() {
            return create_error_context(excluder_error.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ExcluderError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check the ownership and permissions of the configuration file")
                .with_details("pkgex only reads files; it never writes to the project");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ExcluderError::Other {
                    message: error.to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    // Generic error - include the full error chain
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ExcluderError::Other {
        message,
    })
}

/// Map each [`ExcluderError`] variant to a context with a tailored suggestion.
fn create_error_context(error: ExcluderError) -> ErrorContext {
    match &error {
        ExcluderError::InvalidPackageName {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove empty entries from the package list")
            .with_details("Package names are matched literally; every entry must name a package or a scope such as '@myorg'"),

        ExcluderError::InvalidLayout {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Set [layout] modules_dir and store_dir to single directory names, e.g. \"node_modules\" and \".pnpm\""),

        ExcluderError::PatternCompileError {
            ..
        } => ErrorContext::new(error)
            .with_details("The pattern uses negative lookahead; the matching engine must support it"),

        ExcluderError::MatchError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Try a shorter path or report the path that triggered the failure"),

        ExcluderError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path passed to --config or the PKGEX_CONFIG environment variable"),

        ExcluderError::ConfigError {
            file,
            ..
        } => {
            let suggestion = format!("Fix the configuration in {file} and run the command again");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("`packages` must be an array of strings and `exclude_components` a boolean")
        }

        _ => ErrorContext::new(error),
    }
}
