//! Command implementations for the wrapserv CLI.
//!
//! Each submodule handles one terminal state of a run.

pub mod help;
pub mod init_name;
pub mod pairs;
