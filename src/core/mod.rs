//! Core types for packages-excluder
//!
//! This module holds the error type shared by the pattern builder, the
//! matcher, the configuration loader and the CLI.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`ExcluderError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! # Design Principles
//!
//! Pattern generation is a total function; errors only come from input
//! validation at the edges (empty names, bad layout markers), from compiling
//! a pattern for matching, and from configuration loading.

pub mod error;

pub use error::{ErrorContext, ExcluderError, user_friendly_error};
