//! Trait abstraction over child process execution to enable mocking in tests.
//!
//! Both the init detector (which probes `initctl --version`) and the command
//! runner go through [`ProcessLauncher`], so tests can script exit codes and
//! probe output without touching the host's init system.

use std::process::{Command, ExitStatus, Stdio};

#[cfg(test)]
use mockall::automock;

use ws_core::Error;

/// Captured result of a probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    pub exit_code: i32,
    pub stdout: String,
}

impl ProbeOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Launches child processes.
#[cfg_attr(test, automock)]
pub trait ProcessLauncher: Send + Sync {
    /// Run `argv` with stdin/stdout/stderr inherited from this process and
    /// block until it exits. Returns the child's exit code.
    fn status(&self, argv: &[String]) -> Result<i32, Error>;

    /// Run `argv` with stdout captured and stderr discarded.
    fn output(&self, argv: &[String]) -> Result<ProbeOutput, Error>;
}

/// Real launcher using `std::process::Command`.
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(argv: &[String]) -> Result<Command, Error> {
        let (program, args) = argv.split_first().ok_or_else(|| Error::InvalidCommandLine {
            command: String::new(),
        })?;
        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for SystemLauncher {
    fn status(&self, argv: &[String]) -> Result<i32, Error> {
        let status = Self::command(argv)?
            .status()
            .map_err(|e| Error::ExecutionFailure {
                command: argv.join(" "),
                message: e.to_string(),
            })?;
        Ok(exit_code_of(status))
    }

    fn output(&self, argv: &[String]) -> Result<ProbeOutput, Error> {
        let output = Self::command(argv)?
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::ExecutionFailure {
                command: argv.join(" "),
                message: e.to_string(),
            })?;
        Ok(ProbeOutput {
            exit_code: exit_code_of(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Exit code of a finished child; signal deaths map to `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
