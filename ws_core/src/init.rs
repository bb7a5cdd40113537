//! Init system families.

use std::fmt;

use serde::Serialize;

/// The init system running as PID 1.
///
/// Resolved once per invocation; every service/action pair in the run is
/// dispatched through the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InitFamily {
    Systemd,
    Upstart,
    #[serde(rename = "sysv")]
    SysV,
    Unknown,
}

impl InitFamily {
    pub fn name(&self) -> &'static str {
        match self {
            InitFamily::Systemd => "systemd",
            InitFamily::Upstart => "upstart",
            InitFamily::SysV => "sysv",
            InitFamily::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, InitFamily::Unknown)
    }
}

impl fmt::Display for InitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
