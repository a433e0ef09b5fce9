//! Check command implementation
//!
//! This module implements the `doccheck check` command, which:
//! - Loads configuration from doccheck.toml (or built-in defaults)
//! - Applies command-line overrides
//! - Validates every root before walking any of them
//! - Writes each root's defects in traversal order once its files are checked
//!   (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_DEFECTS, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, load_config, stderr_color,
    stdout_color,
};
use crate::config::{Config, OutputFormat as ConfigOutputFormat};
use crate::engine::{TreeWalker, WalkEvent, WalkReport};
use crate::error::{ConfigError, DocCheckError, WalkError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{StandardStream, WriteColor};

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No missing comments
/// - 1: One or more missing comments
/// - 2: Error (missing root directory, configuration or I/O error)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_check(
    paths: &[String],
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
    verbose: bool,
) -> i32 {
    let config = match prepare_config(paths, config_path, format, color) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return match e {
                ConfigError::Parse(_) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            };
        }
    };

    let mut stdout = StandardStream::stdout(stdout_color(config.output.color));
    let mut stderr = StandardStream::stderr(stderr_color(config.output.color));

    match execute(&config, verbose, &mut stdout, &mut stderr) {
        Ok(report) if report.passed() => EXIT_SUCCESS,
        Ok(_) => EXIT_DEFECTS,
        Err(DocCheckError::Walk(WalkError::RootNotFound(root))) => {
            if let Err(e) = HumanFormatter::new().write_missing_root(&mut stderr, &root) {
                eprintln!("Error: {}", e);
            }
            EXIT_ERROR
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Load the configuration file and apply command-line overrides
fn prepare_config(
    paths: &[String],
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> Result<Config, ConfigError> {
    let mut config = load_config(config_path)?;
    config.apply_overrides(paths, format.map(Into::into), color.map(Into::into))?;
    Ok(config)
}

/// Walk every configured root and write diagnostics
///
/// Results go to `out`; warnings and verbose details go to `err`. A missing
/// root is returned before anything is written.
pub fn execute<W, E>(
    config: &Config,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) -> Result<WalkReport, DocCheckError>
where
    W: WriteColor,
    E: WriteColor,
{
    let walker = TreeWalker::from_config(config)?;
    let roots = &config.doccheck.roots;

    let report = match config.output.format {
        ConfigOutputFormat::Human => walk_human(&walker, roots, out)?,
        ConfigOutputFormat::Jsonl => walk_jsonl(&walker, roots, out)?,
    };

    let human = HumanFormatter::new();
    for warning in &report.warnings {
        human.write_warning(err, warning)?;
    }

    if verbose {
        for skipped in &report.skipped {
            writeln!(
                err,
                "Skipped {} ({})",
                skipped.path.display(),
                skipped.reason.as_str()
            )?;
        }
        writeln!(err, "Checked {} files", report.files_checked)?;
    }

    Ok(report)
}

fn walk_human<W: WriteColor>(
    walker: &TreeWalker,
    roots: &[PathBuf],
    out: &mut W,
) -> Result<WalkReport, DocCheckError> {
    let formatter = HumanFormatter::new();
    let mut written: io::Result<()> = Ok(());

    let report = walker.walk_roots(roots, |event| {
        if written.is_err() {
            return;
        }
        written = match event {
            WalkEvent::RootStarted(root) => formatter.write_root_header(out, root),
            WalkEvent::Defect(defect) => formatter.write_defect(out, defect),
        };
    })?;
    written?;

    formatter.write_summary(out, report.defect_count())?;
    Ok(report)
}

fn walk_jsonl<W: WriteColor>(
    walker: &TreeWalker,
    roots: &[PathBuf],
    out: &mut W,
) -> Result<WalkReport, DocCheckError> {
    let formatter = JsonlFormatter::new();
    let mut written: io::Result<()> = Ok(());

    let report = walker.walk_roots(roots, |event| {
        if written.is_err() {
            return;
        }
        if let WalkEvent::Defect(defect) = event {
            written = formatter
                .format_defect(defect)
                .map_err(io::Error::from)
                .and_then(|line| writeln!(out, "{}", line));
        }
    })?;
    written?;

    let summary = formatter
        .format_summary(roots, &report)
        .map_err(io::Error::from)?;
    writeln!(out, "{}", summary)?;
    Ok(report)
}
