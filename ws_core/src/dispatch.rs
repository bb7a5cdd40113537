//! Translate `(service, action)` into the init system's own command line.
//!
//! systemd takes the verb first (`systemctl reload nginx`); upstart and SysV
//! both go through the `service` wrapper with the service first
//! (`service nginx reload`).

use std::path::PathBuf;

use serde::Serialize;

use crate::action::ServiceAction;
use crate::errors::Error;
use crate::init::InitFamily;

/// Control binaries resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolPaths {
    pub systemctl: PathBuf,
    pub service: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            systemctl: PathBuf::from("systemctl"),
            service: PathBuf::from("service"),
        }
    }
}

/// Per-family command construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitBackend {
    Systemd { systemctl: PathBuf },
    Upstart { service: PathBuf },
    SysV { service: PathBuf },
}

impl InitBackend {
    /// Pick the backend for a detected family. `Unknown` has none.
    pub fn for_family(family: InitFamily, tools: &ToolPaths) -> Result<Self, Error> {
        match family {
            InitFamily::Systemd => Ok(InitBackend::Systemd {
                systemctl: tools.systemctl.clone(),
            }),
            InitFamily::Upstart => Ok(InitBackend::Upstart {
                service: tools.service.clone(),
            }),
            InitFamily::SysV => Ok(InitBackend::SysV {
                service: tools.service.clone(),
            }),
            InitFamily::Unknown => Err(Error::UnsupportedInitFamily { family }),
        }
    }

    pub fn family(&self) -> InitFamily {
        match self {
            InitBackend::Systemd { .. } => InitFamily::Systemd,
            InitBackend::Upstart { .. } => InitFamily::Upstart,
            InitBackend::SysV { .. } => InitFamily::SysV,
        }
    }

    /// Build the argument vector for `action` on `service`.
    pub fn build_argv(&self, service: &str, action: &str) -> Vec<String> {
        match self {
            InitBackend::Systemd { systemctl } => vec![
                systemctl.to_string_lossy().into_owned(),
                action.to_string(),
                service.to_string(),
            ],
            InitBackend::Upstart { service: program } | InitBackend::SysV { service: program } => {
                vec![
                    program.to_string_lossy().into_owned(),
                    service.to_string(),
                    action.to_string(),
                ]
            }
        }
    }

    /// Build the command line for `action` on `service`, quoting each word
    /// only where shell splitting would otherwise change it.
    pub fn build_command(&self, service: &str, action: &str) -> Result<String, Error> {
        let argv = self.build_argv(service, action);
        shlex::try_join(argv.iter().map(String::as_str)).map_err(|_| Error::InvalidCommandLine {
            command: argv.join(" "),
        })
    }

    /// Bind this backend to a single service.
    pub fn handle<'a>(&'a self, service: &'a str) -> ServiceHandle<'a> {
        ServiceHandle {
            backend: self,
            service,
        }
    }
}

/// A service bound to the backend that controls it.
#[derive(Debug, Clone, Copy)]
pub struct ServiceHandle<'a> {
    backend: &'a InitBackend,
    service: &'a str,
}

impl ServiceHandle<'_> {
    pub fn service(&self) -> &str {
        self.service
    }

    /// Command line for a parsed action.
    pub fn command_for(&self, action: &ServiceAction) -> Result<String, Error> {
        self.backend.build_command(self.service, action.as_str())
    }
}
