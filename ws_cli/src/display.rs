//! Output formatting helpers.

use console::style;
use serde::Serialize;
use std::path::Path;

use ws_core::{InitFamily, ServiceActionPair, ToolPaths};

// ============================================================================
// Pure formatters
// ============================================================================

/// Status line printed after each pair finishes.
pub(crate) fn format_exit_status(pair: &ServiceActionPair, exit_code: i32) -> String {
    format!(
        "Exit status: {} ({} {})",
        exit_code, pair.service, pair.action
    )
}

pub(crate) fn format_unknown_init_message() -> String {
    "Unable to detect the init system; no service actions were run".to_string()
}

/// Detection report printed by `--show-init-name --json`.
#[derive(Debug, Serialize)]
pub(crate) struct InitReport<'a> {
    pub init: InitFamily,
    pub systemctl: &'a Path,
    pub service: &'a Path,
}

impl<'a> InitReport<'a> {
    pub fn new(init: InitFamily, tools: &'a ToolPaths) -> Self {
        Self {
            init,
            systemctl: &tools.systemctl,
            service: &tools.service,
        }
    }
}

// ============================================================================
// Printers
// ============================================================================

pub fn print_exit_status(pair: &ServiceActionPair, exit_code: i32) {
    let line = format_exit_status(pair, exit_code);
    if exit_code == 0 {
        println!("{} {}", style("==>").green().bold(), line);
    } else {
        println!("{} {}", style("==>").red().bold(), style(line).red());
    }
}

pub fn print_planned_command(command: &str) {
    println!("{} {}", style("==>").cyan().bold(), command);
}

pub fn print_unknown_init() {
    println!(
        "{} {}",
        style("warning:").yellow().bold(),
        format_unknown_init_message()
    );
}

pub fn print_usage_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}
