pub mod detect;
pub mod paths;
pub mod runner;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use detect::{DetectorConfig, InitDetector};
pub use paths::{ToolCandidates, first_existing};
pub use runner::{run_command_line, split_command_line};
pub use traits::{ProbeOutput, ProcessLauncher, SystemLauncher, exit_code_of};
