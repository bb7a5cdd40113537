pub mod action;
pub mod dispatch;
pub mod errors;
pub mod init;

pub use action::{CommandResult, ServiceAction, ServiceActionPair, parse_pairs};
pub use dispatch::{InitBackend, ServiceHandle, ToolPaths};
pub use errors::{EXIT_PERMISSION_DENIED, EXIT_USAGE, Error};
pub use init::InitFamily;
