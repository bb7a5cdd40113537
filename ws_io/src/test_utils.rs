//! Test utilities for wrapserv
//!
//! - `ScriptedLauncher` - a [`ProcessLauncher`] that records every argv it is
//!   asked to run and answers from a queue of scripted exit codes
//! - `fake_root` - a temp directory laid out like a host of a given init family
//!
//! # Example
//!
//! ```ignore
//! use ws_io::test_utils::ScriptedLauncher;
//!
//! let launcher = ScriptedLauncher::new().with_exit_codes([0, 3]);
//! // ... drive the pair loop ...
//! assert_eq!(launcher.launched().len(), 2);
//! ```

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;
use ws_core::{Error, InitFamily};

use crate::traits::{ProbeOutput, ProcessLauncher};

// ============================================================================
// Scripted launcher
// ============================================================================

/// Launcher that never spawns anything.
///
/// `status` pops the next scripted result (exit code 0 once the queue runs
/// dry); `output` always returns the configured probe output.
pub struct ScriptedLauncher {
    results: Mutex<VecDeque<Result<i32, Error>>>,
    probe: Result<ProbeOutput, Error>,
    launched: Mutex<Vec<Vec<String>>>,
    probed: Mutex<Vec<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            probe: Err(Error::ExecutionFailure {
                command: "initctl --version".to_string(),
                message: "not scripted".to_string(),
            }),
            launched: Mutex::new(Vec::new()),
            probed: Mutex::new(Vec::new()),
        }
    }

    /// Queue exit codes returned by successive `status` calls.
    pub fn with_exit_codes(self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.results
            .lock()
            .unwrap()
            .extend(codes.into_iter().map(Ok));
        self
    }

    /// Queue a launch failure for the next `status` call.
    pub fn with_launch_failure(self, message: &str) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(Error::ExecutionFailure {
                command: String::new(),
                message: message.to_string(),
            }));
        self
    }

    /// Answer probes with `stdout` and exit code 0.
    pub fn with_probe_output(mut self, stdout: &str) -> Self {
        self.probe = Ok(ProbeOutput {
            exit_code: 0,
            stdout: stdout.to_string(),
        });
        self
    }

    /// Every argv passed to `status`, in call order.
    pub fn launched(&self) -> Vec<Vec<String>> {
        self.launched.lock().unwrap().clone()
    }

    /// Every argv passed to `output`, in call order.
    pub fn probed(&self) -> Vec<Vec<String>> {
        self.probed.lock().unwrap().clone()
    }
}

impl Default for ScriptedLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for ScriptedLauncher {
    fn status(&self, argv: &[String]) -> Result<i32, Error> {
        self.launched.lock().unwrap().push(argv.to_vec());
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(0))
    }

    fn output(&self, argv: &[String]) -> Result<ProbeOutput, Error> {
        self.probed.lock().unwrap().push(argv.to_vec());
        self.probe.clone()
    }
}

// ============================================================================
// Filesystem fixtures
// ============================================================================

/// Stand-in for `DetectorConfig::resolve_init` on a host where reading
/// PID 1's executable needs privileges we lack.
pub fn refuse_init_read(_path: &Path) -> io::Result<PathBuf> {
    Err(io::Error::from(io::ErrorKind::PermissionDenied))
}

/// Temp directory shaped like a host running `family`, for use with
/// `DetectorConfig::under` and `ToolCandidates::under`.
///
/// Upstart hosts look like SysV hosts on disk; pair the root with a
/// launcher whose probe output mentions upstart.
pub fn fake_root(family: InitFamily) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let init = match family {
        InitFamily::Systemd => "lib/systemd/systemd",
        _ => "sbin/init",
    };
    let init_path = root.join(init);
    fs::create_dir_all(init_path.parent().unwrap()).unwrap();
    fs::write(&init_path, "").unwrap();
    fs::create_dir_all(root.join("proc/1")).unwrap();
    #[cfg(unix)]
    std::os::unix::fs::symlink(&init_path, root.join("proc/1/exe")).unwrap();

    match family {
        InitFamily::Systemd => {
            fs::create_dir_all(root.join("etc/systemd")).unwrap();
            fs::create_dir_all(root.join("bin")).unwrap();
            fs::write(root.join("bin/systemctl"), "").unwrap();
        }
        InitFamily::Upstart | InitFamily::SysV => {
            fs::create_dir_all(root.join("etc/init.d")).unwrap();
            fs::create_dir_all(root.join("usr/sbin")).unwrap();
            fs::write(root.join("usr/sbin/service"), "").unwrap();
        }
        InitFamily::Unknown => {}
    }

    tmp
}
