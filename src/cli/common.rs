//! Common helper functions shared across CLI commands

use crate::config::{ColorOption, Config};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::Path;

/// No defects found
pub const EXIT_SUCCESS: i32 = 0;
/// At least one defect found
pub const EXIT_DEFECTS: i32 = 1;
/// Missing root directory, unreadable or invalid configuration
pub const EXIT_ERROR: i32 = 2;
/// Configuration file is not valid TOML
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "doccheck.toml";

/// Load the configuration
///
/// An explicit path must exist. Without one, `doccheck.toml` in the working
/// directory is used when present and the built-in defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read,
/// `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        Config::load(default_path)
    } else {
        Ok(Config::default())
    }
}

/// Resolve the color setting for one output stream
pub(crate) fn color_choice(option: ColorOption, is_terminal: bool) -> termcolor::ColorChoice {
    match option {
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
        ColorOption::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorOption::Auto => termcolor::ColorChoice::Never,
    }
}

pub(crate) fn stdout_color(option: ColorOption) -> termcolor::ColorChoice {
    color_choice(option, std::io::stdout().is_terminal())
}

pub(crate) fn stderr_color(option: ColorOption) -> termcolor::ColorChoice {
    color_choice(option, std::io::stderr().is_terminal())
}
