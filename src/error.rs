//! Error types for doccheck
//!
//! This module defines the error types used throughout doccheck, following
//! a hierarchical structure with specific error variants for different
//! error categories. Missing documentation is not an error: defects are the
//! tool's output and travel in [`crate::engine::WalkReport`].

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Syntactically valid but unusable configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Errors that abort a tree walk
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A configured root directory does not exist
    #[error("Directory {} not found!", .0.display())]
    RootNotFound(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file errors; the walker downgrades these to warnings
#[derive(Debug, thiserror::Error)]
pub enum FileCheckError {
    #[error("Failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error type for doccheck
#[derive(Debug, thiserror::Error)]
pub enum DocCheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Traversal error
    #[error("{0}")]
    Walk(#[from] WalkError),

    /// Writing diagnostics failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
