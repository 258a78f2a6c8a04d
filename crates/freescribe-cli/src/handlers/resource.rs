//! Resource command handler.

use freescribe_paths::PathResolver;

use crate::error::CliError;

/// Resolve a per-user file; creates the application directory in bundled mode.
pub fn render(resolver: &PathResolver, filename: &str) -> Result<String, CliError> {
    let path = resolver.resolve_user_resource_path(filename)?;
    Ok(path.display().to_string())
}

/// Execute the resource command.
pub fn execute(resolver: &PathResolver, filename: &str) -> Result<(), CliError> {
    println!("{}", render(resolver, filename)?);
    Ok(())
}
