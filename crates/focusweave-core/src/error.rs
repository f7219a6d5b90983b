//! Core error types for focusweave-core.
//!
//! The scheduling pipeline itself is total over its documented input domain
//! and never fails; errors here come from constructor-time validation and
//! from loading or saving the preferences file.

use std::path::PathBuf;
use thiserror::Error;

/// Preferences-specific errors.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// Failed to load the preferences file
    #[error("Failed to load preferences from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the preferences file
    #[error("Failed to save preferences to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the preferences file
    #[error("Failed to parse preferences: {0}")]
    ParseFailed(String),

    /// Config directory could not be resolved or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}
