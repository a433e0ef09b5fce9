//! doccheck CLI entry point

use clap::Parser;
use doccheck::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use doccheck::cli::init::InitOutcome;
use doccheck::cli::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            config,
            format,
            verbose,
        } => doccheck::cli::check::run_check(
            &paths,
            config.as_deref(),
            format,
            cli.color,
            verbose,
        ),
        Command::Init { force } => match doccheck::cli::init::run_init(force) {
            Ok(InitOutcome::Created) => {
                println!("Created doccheck.toml.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote doccheck.toml.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Skipped) => {
                println!("doccheck.toml already exists. Use --force to overwrite it.");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}
