//! Error types for Lacuna operations.
//!
//! This module defines [`LacunaError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed corpus content is never an error: lines or paragraphs that
//!   don't match a recognized pattern are skipped, and an empty requirement
//!   list is a valid (if low-value) result.
//! - Programmer-supplied configuration (thresholds, keyword limits) fails
//!   fast with a descriptive error instead of being silently coerced.
//! - Use `anyhow::Error` (via `LacunaError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Lacuna operations.
#[derive(Debug, Error)]
pub enum LacunaError {
    /// Document not found at the given path.
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Document has an extension we cannot extract text from.
    #[error("Unsupported document format '{extension}' for {path} (supported: {supported})")]
    UnsupportedFormat {
        path: PathBuf,
        extension: String,
        supported: String,
    },

    /// Entity catalog could not be loaded or parsed.
    #[error("Failed to load catalog at {path}: {message}")]
    Catalog { path: PathBuf, message: String },

    /// Invalid programmer-supplied configuration (thresholds, limits).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An answer source failed to produce a response.
    #[error("Answer source '{name}' failed: {message}")]
    Source { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Lacuna operations.
pub type Result<T> = std::result::Result<T, LacunaError>;
