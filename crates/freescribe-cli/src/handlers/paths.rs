//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use freescribe_paths::{PathResolver, ResolvedPaths};

use crate::error::CliError;

/// Render the resolved paths as `key = value` lines, or pretty JSON.
pub fn render(resolver: &PathResolver, json: bool) -> Result<String, CliError> {
    let paths = ResolvedPaths::resolve(resolver)?;
    if json {
        Ok(serde_json::to_string_pretty(&paths)?)
    } else {
        Ok(paths.to_string())
    }
}

/// Execute the paths command.
pub fn execute(resolver: &PathResolver, json: bool) -> Result<(), CliError> {
    println!("{}", render(resolver, json)?);
    Ok(())
}
