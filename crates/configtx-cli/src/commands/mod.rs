//! Command descriptors and dispatch
//!
//! The root command is assembled from an explicit list of [`CommandSpec`]s
//! and every run goes through [`dispatch`], which owns the exit code.

use crate::error::CommandResult;
use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;

pub mod endpoints;

/// Name of the root command
pub const ROOT_NAME: &str = "configtx";

/// Id and long name of the hidden legacy logging flag
pub const LOGGING_LEVEL: &str = "logging-level";

/// Process exit status on success
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status on any failure
pub const EXIT_FAILURE: u8 = 1;

/// A subcommand: how to build its argument parser and how to run it
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Subcommand name as typed on the command line
    pub name: &'static str,
    /// Builds the clap definition
    pub command: fn() -> Command,
    /// Runs the command against its parsed arguments
    pub run: fn(&ArgMatches) -> CommandResult<()>,
}

/// All subcommands of `configtx`
#[must_use]
pub fn commands() -> Vec<CommandSpec> {
    vec![endpoints::spec()]
}

/// Environment variable that can stand in for a flag
///
/// Upper-cased key with `.` and `-` replaced by `_`.
#[must_use]
pub fn env_key(key: &str) -> String {
    key.replace(['.', '-'], "_").to_ascii_uppercase()
}

/// Build the root command with the given subcommands
#[must_use]
pub fn root_command(specs: &[CommandSpec]) -> Command {
    let root = Command::new(ROOT_NAME)
        .version(crate::VERSION)
        .about("Channel configuration transaction tool")
        .arg_required_else_help(true)
        .arg(
            Arg::new(LOGGING_LEVEL)
                .long(LOGGING_LEVEL)
                .env(env_key(LOGGING_LEVEL))
                .global(true)
                .hide(true)
                .help("Legacy logging level flag"),
        );

    specs
        .iter()
        .fold(root, |root, spec| root.subcommand((spec.command)()))
}

/// Parse `args`, run the selected command and return the exit status.
///
/// Failures print a one-line diagnostic to standard error. Help and version
/// requests exit with success.
pub fn dispatch<I, T>(specs: &[CommandSpec], args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match root_command(specs).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => return report_parse_error(&err),
    };

    let Some((name, sub_matches)) = matches.subcommand() else {
        return EXIT_SUCCESS;
    };
    let Some(spec) = specs.iter().find(|spec| spec.name == name) else {
        eprintln!("Error: unknown command {name}");
        return EXIT_FAILURE;
    };

    crate::logging::init(
        sub_matches
            .get_one::<String>(LOGGING_LEVEL)
            .map(String::as_str),
    );

    match (spec.run)(sub_matches) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            tracing::debug!(command = name, error = ?err, "command failed");
            eprintln!("Error: {err}");
            EXIT_FAILURE
        }
    }
}

/// Run `configtx` with the process arguments
pub fn run_from<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    dispatch(&commands(), args)
}

fn report_parse_error(err: &clap::Error) -> u8 {
    // Printing can only fail on a closed stdout/stderr; nothing left to tell.
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}
