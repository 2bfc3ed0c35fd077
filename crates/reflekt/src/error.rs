// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types for Reflekt
//!
//! Generation, critique and refinement are infallible: unknown styles and
//! modes degrade to defaults instead of failing. Errors only arise at the
//! configuration boundary, when options are read from disk or parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Reflekt operations
pub type Result<T> = core::result::Result<T, Error>;

/// Main error type for the Reflekt library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration errors (unsupported file format, etc.)
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Configuration error for a file whose extension is not understood.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::Config(format!(
            "unsupported options file '{}' (expected .yaml, .yml or .json)",
            path.display()
        ))
    }

    /// Check if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
