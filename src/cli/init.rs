//! Initialize a doccheck configuration
//!
//! Writes a commented `doccheck.toml` holding the built-in defaults.

use crate::cli::common::DEFAULT_CONFIG_FILE;
use std::fs;
use std::path::Path;

/// Default content for doccheck.toml
const DEFAULT_DOCCHECK_TOML: &str = r#"[doccheck]
version = "1"

# Root directories to scan, in order
roots = ["./src"]

# File extensions that are checked
extensions = ["rs"]

# Tokens that introduce a declaration (matched as whole space-separated words)
keywords = ["fn", "struct"]

# Lines starting with one of these (after trimming) are never declarations
ignore_prefixes = ["//", "/*", "*/", "*"]

# A declaration is documented when the line directly above contains this
doc_marker = "///"

# Paths to skip, relative to each root
# exclude = ["**/generated/**"]

# Respect .gitignore files while walking
# gitignore = true

[output]
format = "human"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to doccheck.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// Already existed and `force` was not set
    Skipped,
    Overwritten,
}

/// Run the init command in the working directory
pub fn run_init(force: bool) -> Result<InitOutcome, InitError> {
    run_init_in(Path::new("."), force)
}

/// Write doccheck.toml into `dir`
///
/// # Arguments
/// * `dir` - Directory that receives the file
/// * `force` - If true, overwrite an existing file. If false, leave it untouched.
pub fn run_init_in(dir: &Path, force: bool) -> Result<InitOutcome, InitError> {
    let path = dir.join(DEFAULT_CONFIG_FILE);

    if path.exists() {
        if !force {
            return Ok(InitOutcome::Skipped);
        }
        fs::write(&path, DEFAULT_DOCCHECK_TOML)?;
        return Ok(InitOutcome::Overwritten);
    }

    fs::write(&path, DEFAULT_DOCCHECK_TOML)?;
    Ok(InitOutcome::Created)
}
