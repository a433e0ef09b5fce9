#![forbid(unsafe_code)]

//! doccheck: a documentation-comment gate for pre-commit hooks and CI
//!
//! doccheck walks source trees and reports every declaration line (one that
//! contains a configured keyword such as `fn` or `struct` as a whole word)
//! whose immediately preceding line lacks the documentation marker (`///`).
//! The check is purely line-textual; nothing is parsed and no file is modified.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, DocCheckError, FileCheckError, WalkError};

// Re-export core domain types for convenient access
pub use config::Config;
pub use engine::{CommentRules, FileChecker, FileOutcome, TreeWalker, WalkReport};
pub use types::{Defect, GlobPattern, LineKind};
