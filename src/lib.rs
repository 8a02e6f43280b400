//! Core library entry for the `framelog` CLI.
//!
//! A review-status board for canvas frames: frames are ingested through a
//! selection scan, move across ordered status columns, and are watched for
//! drift against the live canvas.

pub mod adapters;
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod model;
pub mod ports;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["framelog", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_missing_arguments() {
        let result = run(["framelog", "move", "item-1"]);
        assert!(result.is_err());
    }
}
