//! Parsing and validation for doccheck.toml configuration files

use crate::engine::file_checker::CommentRules;
use crate::error::ConfigError;
use crate::types::GlobPattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported configuration version
pub const CONFIG_VERSION: &str = "1";

/// Main configuration struct for doccheck.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Checker and traversal settings
    pub doccheck: DocCheckMeta,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace configured roots and output settings with command-line values
    ///
    /// Empty `roots` keeps the configured roots. The result is validated again.
    pub fn apply_overrides(
        &mut self,
        roots: &[String],
        format: Option<OutputFormat>,
        color: Option<ColorOption>,
    ) -> Result<(), ConfigError> {
        if !roots.is_empty() {
            self.doccheck.roots = roots.iter().map(PathBuf::from).collect();
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if let Some(color) = color {
            self.output.color = color;
        }
        self.validate()
    }

    /// Builds the immutable rule set handed to the file checker
    pub fn comment_rules(&self) -> CommentRules {
        CommentRules::new(
            self.doccheck.extensions.iter().cloned(),
            self.doccheck.keywords.clone(),
            self.doccheck.ignore_prefixes.clone(),
            self.doccheck.doc_marker.clone(),
        )
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        let meta = &self.doccheck;

        if meta.version != CONFIG_VERSION {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '{}'",
                meta.version, CONFIG_VERSION
            )));
        }

        if meta.roots.is_empty() {
            return Err(ConfigError::Validation(
                "No roots configured. Add at least one directory to `roots`.".to_string(),
            ));
        }

        if meta.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "No extensions configured. Add at least one file extension to `extensions`."
                    .to_string(),
            ));
        }

        for ext in &meta.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "Invalid extension '{}': use the bare extension, e.g. \"rs\"",
                    ext
                )));
            }
        }

        if meta.keywords.is_empty() {
            return Err(ConfigError::Validation(
                "No keywords configured. Add at least one declaration keyword to `keywords`."
                    .to_string(),
            ));
        }

        for keyword in &meta.keywords {
            if keyword.is_empty() || keyword.contains(' ') {
                return Err(ConfigError::Validation(format!(
                    "Invalid keyword '{}': keywords must be single non-empty tokens",
                    keyword
                )));
            }
        }

        if meta.ignore_prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(ConfigError::Validation(
                "Empty ignore prefix would ignore every line".to_string(),
            ));
        }

        if meta.doc_marker.is_empty() {
            return Err(ConfigError::Validation(
                "doc_marker must not be empty".to_string(),
            ));
        }

        for pattern in &meta.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}

/// `[doccheck]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCheckMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Root directories to scan, in order
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    /// File extensions that are checked
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Tokens that introduce a declaration
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Line prefixes that mark a comment line, in priority order
    #[serde(default = "default_ignore_prefixes")]
    pub ignore_prefixes: Vec<String>,

    /// Substring that marks the previous line as documentation
    #[serde(default = "default_doc_marker")]
    pub doc_marker: String,

    /// Paths to skip, relative to each root
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,

    /// Respect .gitignore files while walking
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for DocCheckMeta {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            roots: default_roots(),
            extensions: default_extensions(),
            keywords: default_keywords(),
            ignore_prefixes: default_ignore_prefixes(),
            doc_marker: default_doc_marker(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("./src")]
}

fn default_extensions() -> Vec<String> {
    vec!["rs".to_string()]
}

fn default_keywords() -> Vec<String> {
    vec!["fn".to_string(), "struct".to_string()]
}

fn default_ignore_prefixes() -> Vec<String> {
    ["//", "/*", "*/", "*"].iter().map(|s| s.to_string()).collect()
}

fn default_doc_marker() -> String {
    "///".to_string()
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
