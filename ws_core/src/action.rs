//! Service actions and the positional `service action` pairs they arrive in.

use std::fmt;

use crate::errors::Error;

/// An operation requested on a service.
///
/// The five common verbs get their own variants; anything else (`enable`,
/// `force-reload`, `condrestart`, ...) is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
    Reload,
    Status,
    Other(String),
}

impl ServiceAction {
    /// Parse an action name. Matching is case-sensitive: `Start` is
    /// forwarded as-is rather than treated as `start`.
    pub fn parse(name: &str) -> Self {
        match name {
            "start" => ServiceAction::Start,
            "stop" => ServiceAction::Stop,
            "restart" => ServiceAction::Restart,
            "reload" => ServiceAction::Reload,
            "status" => ServiceAction::Status,
            other => ServiceAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
            ServiceAction::Reload => "reload",
            ServiceAction::Status => "status",
            ServiceAction::Other(name) => name,
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `service action` pair taken positionally from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceActionPair {
    pub service: String,
    pub action: ServiceAction,
}

impl ServiceActionPair {
    pub fn new(service: impl Into<String>, action: &str) -> Self {
        Self {
            service: service.into(),
            action: ServiceAction::parse(action),
        }
    }
}

/// Split positional arguments into consecutive `(service, action)` pairs.
///
/// An empty list or an odd number of tokens is a usage error, as is an
/// empty service or action token.
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> Result<Vec<ServiceActionPair>, Error> {
    if args.is_empty() {
        return Err(Error::UsageError {
            message: "no service/action pairs given".to_string(),
        });
    }
    if args.len() % 2 != 0 {
        return Err(Error::UsageError {
            message: format!(
                "incomplete service/action pair: '{}' has no action",
                args[args.len() - 1].as_ref()
            ),
        });
    }

    args.chunks(2)
        .map(|chunk| {
            let service = chunk[0].as_ref();
            let action = chunk[1].as_ref();
            if service.is_empty() || action.is_empty() {
                return Err(Error::UsageError {
                    message: "service and action names must not be empty".to_string(),
                });
            }
            Ok(ServiceActionPair::new(service, action))
        })
        .collect()
}

/// Outcome of running one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
