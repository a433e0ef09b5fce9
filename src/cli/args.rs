//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat as ConfigOutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for doccheck commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormat> for ConfigOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => ConfigOutputFormat::Human,
            OutputFormat::Jsonl => ConfigOutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorOption::Auto,
            ColorChoice::Always => ColorOption::Always,
            ColorChoice::Never => ColorOption::Never,
        }
    }
}

/// doccheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "doccheck")]
#[command(about = "Flag declarations that lack an immediately preceding documentation comment")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides [output].color)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,
}

/// Available doccheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check root directories for undocumented declarations
    Check {
        /// Root directories to scan (defaults to the configured roots)
        paths: Vec<String>,

        /// Configuration file (defaults to ./doccheck.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (overrides [output].format)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Report skipped files and totals on stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a default doccheck.toml
    Init {
        /// Overwrite an existing doccheck.toml
        #[arg(long)]
        force: bool,
    },
}
