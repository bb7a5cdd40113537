//! Run `service action` pairs in order, stopping at the first failure.

use tracing::info;

use ws_core::{Error, InitBackend, ServiceActionPair};
use ws_io::{ProcessLauncher, run_command_line};

use crate::display::{print_exit_status, print_planned_command};

/// Command lines for every pair, in order, without running anything.
pub(crate) fn plan(
    backend: &InitBackend,
    pairs: &[ServiceActionPair],
) -> Result<Vec<String>, Error> {
    pairs
        .iter()
        .map(|pair| backend.handle(&pair.service).command_for(&pair.action))
        .collect()
}

/// Print what would be run. Always exits 0.
pub fn run_dry(backend: &InitBackend, pairs: &[ServiceActionPair]) -> Result<i32, Error> {
    for command in plan(backend, pairs)? {
        print_planned_command(&command);
    }
    Ok(0)
}

/// Dispatch each pair and return the exit code the program should end
/// with: the first non-zero code, or 0 if every pair succeeded.
///
/// A launch failure aborts the chain with the error.
pub fn run<L: ProcessLauncher + ?Sized>(
    backend: &InitBackend,
    pairs: &[ServiceActionPair],
    launcher: &L,
) -> Result<i32, Error> {
    let mut exit_code = 0;

    for pair in pairs {
        let handle = backend.handle(&pair.service);
        let command = handle.command_for(&pair.action)?;
        let result = run_command_line(launcher, &command)?;
        print_exit_status(pair, result.exit_code);

        exit_code = result.exit_code;
        if !result.success() {
            info!(
                init = %backend.family(),
                service = handle.service(),
                action = %pair.action,
                exit_code,
                "stopping after failed action"
            );
            break;
        }
    }

    Ok(exit_code)
}
