//! Help display for usage errors.

use clap::CommandFactory;
use tracing::debug;

use ws_io::ProcessLauncher;

use crate::Cli;

/// Argv that re-runs this executable with `--help`.
pub(crate) fn self_help_argv() -> Option<Vec<String>> {
    let exe = std::env::current_exe().ok()?;
    Some(vec![
        exe.to_string_lossy().into_owned(),
        "--help".to_string(),
    ])
}

/// Show the help text by re-invoking ourselves, falling back to rendering
/// it in-process if that cannot be done.
pub fn show<L: ProcessLauncher + ?Sized>(launcher: &L) {
    if let Some(argv) = self_help_argv() {
        match launcher.status(&argv) {
            Ok(0) => return,
            Ok(code) => debug!(code, "help subprocess exited non-zero"),
            Err(e) => debug!(error = %e, "help subprocess failed to launch"),
        }
    }

    let mut cmd = Cli::command();
    if cmd.print_help().is_ok() {
        println!();
    }
}
