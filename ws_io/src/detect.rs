//! Init system detection.
//!
//! Checks run in order and the first match wins:
//! 1. PID 1's executable resolves to a path containing `systemd` and the
//!    systemd configuration directory exists.
//! 2. `initctl --version` succeeds and mentions upstart.
//! 3. The SysV init script directory exists.
//!
//! Anything else is [`InitFamily::Unknown`].

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use ws_core::{Error, InitFamily};

use crate::traits::ProcessLauncher;

/// Well-known locations consulted during detection.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Link to the executable of PID 1.
    pub init_exe: PathBuf,
    /// Present on systemd hosts.
    pub systemd_dir: PathBuf,
    /// Present on SysV hosts.
    pub sysv_dir: PathBuf,
    /// Command whose output identifies upstart.
    pub upstart_probe: Vec<String>,
    /// Resolves `init_exe` to its real path.
    pub resolve_init: fn(&Path) -> io::Result<PathBuf>,
}

fn canonical_path(path: &Path) -> io::Result<PathBuf> {
    std::fs::canonicalize(path)
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            init_exe: PathBuf::from("/proc/1/exe"),
            systemd_dir: PathBuf::from("/etc/systemd"),
            sysv_dir: PathBuf::from("/etc/init.d"),
            upstart_probe: vec!["initctl".to_string(), "--version".to_string()],
            resolve_init: canonical_path,
        }
    }
}

impl DetectorConfig {
    /// Config with every path rooted under `root` instead of `/`.
    pub fn under(root: &Path) -> Self {
        Self {
            init_exe: root.join("proc/1/exe"),
            systemd_dir: root.join("etc/systemd"),
            sysv_dir: root.join("etc/init.d"),
            ..Self::default()
        }
    }
}

pub struct InitDetector<'a, L: ProcessLauncher + ?Sized> {
    config: DetectorConfig,
    launcher: &'a L,
}

impl<'a, L: ProcessLauncher + ?Sized> InitDetector<'a, L> {
    pub fn new(config: DetectorConfig, launcher: &'a L) -> Self {
        Self { config, launcher }
    }

    /// Decide which init family is running.
    ///
    /// Fails only when PID 1's executable cannot be read for lack of
    /// privileges. A failing upstart probe just means "not upstart".
    pub fn detect(&self) -> Result<InitFamily, Error> {
        let init_path = self.init_executable()?;
        debug!(init = ?init_path, "resolved init executable");

        if let Some(path) = &init_path
            && path.to_string_lossy().contains("systemd")
            && self.config.systemd_dir.exists()
        {
            return Ok(InitFamily::Systemd);
        }

        if self.probe_upstart() {
            return Ok(InitFamily::Upstart);
        }

        if self.config.sysv_dir.exists() {
            return Ok(InitFamily::SysV);
        }

        Ok(InitFamily::Unknown)
    }

    /// Real path of PID 1's executable, or `None` if it is unavailable for
    /// any reason other than missing privileges.
    fn init_executable(&self) -> Result<Option<PathBuf>, Error> {
        match (self.config.resolve_init)(&self.config.init_exe) {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
                path: self.config.init_exe.clone(),
            }),
            Err(e) => {
                debug!(
                    path = %self.config.init_exe.display(),
                    error = %e,
                    "init executable unavailable"
                );
                Ok(None)
            }
        }
    }

    fn probe_upstart(&self) -> bool {
        match self.launcher.output(&self.config.upstart_probe) {
            Ok(out) if out.success() => {
                let is_upstart = out.stdout.to_lowercase().contains("upstart");
                debug!(is_upstart, "upstart probe finished");
                is_upstart
            }
            Ok(out) => {
                debug!(exit_code = out.exit_code, "upstart probe exited non-zero");
                false
            }
            Err(e) => {
                warn!(error = %e, "upstart probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockProcessLauncher, ProbeOutput};
    use std::fs;
    use tempfile::TempDir;

    /// Lay out a fake root whose PID 1 links to `init_target`.
    fn fake_root(init_target: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join(init_target.trim_start_matches('/'));
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "").unwrap();
        fs::create_dir_all(tmp.path().join("proc/1")).unwrap();
        #[cfg(unix)]
        std::os::unix::fs::symlink(&target, tmp.path().join("proc/1/exe")).unwrap();
        tmp
    }

    fn probe_says(stdout: &'static str, exit_code: i32) -> MockProcessLauncher {
        let mut launcher = MockProcessLauncher::new();
        launcher.expect_output().returning(move |_| {
            Ok(ProbeOutput {
                exit_code,
                stdout: stdout.to_string(),
            })
        });
        launcher
    }

    fn probe_fails() -> MockProcessLauncher {
        let mut launcher = MockProcessLauncher::new();
        launcher.expect_output().returning(|argv| {
            Err(Error::ExecutionFailure {
                command: argv.join(" "),
                message: "No such file or directory".to_string(),
            })
        });
        launcher
    }

    #[test]
    #[cfg(unix)]
    fn test_detects_systemd() {
        let tmp = fake_root("lib/systemd/systemd");
        fs::create_dir_all(tmp.path().join("etc/systemd")).unwrap();

        let mut launcher = MockProcessLauncher::new();
        launcher.expect_output().never();

        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::Systemd);
    }

    #[test]
    #[cfg(unix)]
    fn test_systemd_binary_without_config_dir_is_not_systemd() {
        let tmp = fake_root("lib/systemd/systemd");
        fs::create_dir_all(tmp.path().join("etc/init.d")).unwrap();

        let launcher = probe_fails();
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::SysV);
    }

    #[test]
    #[cfg(unix)]
    fn test_detects_upstart_case_insensitively() {
        let tmp = fake_root("sbin/init");
        fs::create_dir_all(tmp.path().join("etc/init.d")).unwrap();

        let launcher = probe_says("init (Upstart 1.12.1)\n", 0);
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::Upstart);
    }

    #[test]
    #[cfg(unix)]
    fn test_failed_upstart_probe_falls_through_to_sysv() {
        let tmp = fake_root("sbin/init");
        fs::create_dir_all(tmp.path().join("etc/init.d")).unwrap();

        let launcher = probe_fails();
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::SysV);
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_upstart_probe_is_not_upstart() {
        let tmp = fake_root("sbin/init");

        let launcher = probe_says("upstart", 1);
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::Unknown);
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_probe_output_is_not_upstart() {
        let tmp = fake_root("sbin/init");
        fs::create_dir_all(tmp.path().join("etc/init.d")).unwrap();

        let launcher = probe_says("", 0);
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::SysV);
    }

    #[test]
    fn test_nothing_matches_is_unknown() {
        let tmp = TempDir::new().unwrap();

        let launcher = probe_fails();
        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        assert_eq!(detector.detect().unwrap(), InitFamily::Unknown);
    }

    #[test]
    fn test_refused_init_read_is_permission_denied() {
        let tmp = TempDir::new().unwrap();
        let config = DetectorConfig {
            resolve_init: |_| Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            ..DetectorConfig::under(tmp.path())
        };

        let mut launcher = MockProcessLauncher::new();
        launcher.expect_output().never();

        let err = InitDetector::new(config, &launcher).detect().unwrap_err();
        assert_eq!(
            err,
            Error::PermissionDenied {
                path: tmp.path().join("proc/1/exe"),
            }
        );
        assert_eq!(err.exit_code(), 126);
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_proc_dir_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = fake_root("sbin/init");
        let proc_dir = tmp.path().join("proc/1");
        fs::set_permissions(&proc_dir, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores directory modes, so there is nothing to refuse.
        let locked = fs::read_dir(&proc_dir).is_err();
        let launcher = probe_fails();
        let result = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher).detect();
        fs::set_permissions(&proc_dir, fs::Permissions::from_mode(0o755)).unwrap();

        if locked {
            assert!(matches!(result, Err(Error::PermissionDenied { .. })));
        }
    }

    #[test]
    fn test_probe_uses_configured_command() {
        let tmp = TempDir::new().unwrap();

        let mut launcher = MockProcessLauncher::new();
        launcher
            .expect_output()
            .withf(|argv: &[String]| {
                argv.len() == 2 && argv[0] == "initctl" && argv[1] == "--version"
            })
            .times(1)
            .returning(|_| {
                Ok(ProbeOutput {
                    exit_code: 0,
                    stdout: String::new(),
                })
            });

        let detector = InitDetector::new(DetectorConfig::under(tmp.path()), &launcher);
        detector.detect().unwrap();
    }
}
