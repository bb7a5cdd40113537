//! Run a dispatched command line to completion.

use tracing::{debug, info};
use ws_core::{CommandResult, Error};

use crate::traits::ProcessLauncher;

/// Split `command_line` with POSIX shell quoting rules.
pub fn split_command_line(command_line: &str) -> Result<Vec<String>, Error> {
    match shlex::split(command_line) {
        Some(argv) if !argv.is_empty() => Ok(argv),
        _ => Err(Error::InvalidCommandLine {
            command: command_line.to_string(),
        }),
    }
}

/// Execute `command_line` with inherited stdio and wait for it.
///
/// There is no timeout; the child runs until it exits on its own.
pub fn run_command_line<L: ProcessLauncher + ?Sized>(
    launcher: &L,
    command_line: &str,
) -> Result<CommandResult, Error> {
    let argv = split_command_line(command_line)?;
    info!(command = command_line, "dispatching");
    debug!(?argv, "spawning child");

    let exit_code = launcher.status(&argv)?;
    debug!(exit_code, "child exited");
    Ok(CommandResult::new(exit_code))
}
