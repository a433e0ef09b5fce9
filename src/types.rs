#![forbid(unsafe_code)]

//! Core domain types for doccheck
//!
//! This module defines the values that flow between the walker, the checker
//! and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One declaration line that is not immediately preceded by a documentation comment
///
/// `file` is always absolute and `line` is the 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Defect {
    pub file: PathBuf,
    pub line: usize,
}

impl Defect {
    /// Creates a new Defect
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing Comment: {}, line {}",
            self.file.display(),
            self.line
        )
    }
}

/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Trimmed text starts with an ignore prefix
    Ignored,
    /// Contains a keyword as a whole space-delimited token
    Declaration,
    /// Anything else
    Plain,
}

/// Returns the text after the last `.` of a path
///
/// A path without any `.` yields the whole path, so it never matches an
/// ordinary extension.
pub fn extension_of(path: &Path) -> String {
    let text = path.to_string_lossy();
    match text.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => text.into_owned(),
    }
}

/// A glob pattern for path exclusion
///
/// This is a simple wrapper around a string that will be used with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
