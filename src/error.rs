//! Error types for tcprobe operations.
//!
//! This module defines [`ProbeError`], the crate-level error used by
//! configuration loading and the command-line front end, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Installation, module and loader outcomes are [`ValidationError`]s,
//!   returned as values and shown to the user as-is
//! - Use `ProbeError` for config and CLI failures
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::layout::ValidationError;

/// Core error type for tcprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An installation, module or loader check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tcprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
