//! `--show-init-name`: report the detected init system.

use ws_core::{Error, InitFamily, ToolPaths};

use crate::display::InitReport;

pub fn run(family: InitFamily, tools: &ToolPaths, json: bool) -> Result<(), Error> {
    if json {
        let report = InitReport::new(family, tools);
        let rendered =
            serde_json::to_string_pretty(&report).map_err(|e| Error::ExecutionFailure {
                command: "--show-init-name --json".to_string(),
                message: e.to_string(),
            })?;
        println!("{}", rendered);
    } else {
        println!("{}", family);
    }
    Ok(())
}
