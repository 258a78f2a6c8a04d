//! Bundled command handler.

use freescribe_paths::PathResolver;

use crate::error::CliError;

/// Resolve `segments` against the bundle base directory.
pub fn render(resolver: &PathResolver, segments: &[String]) -> Result<String, CliError> {
    let path = resolver.resolve_bundled_path(segments)?;
    Ok(path.display().to_string())
}

/// Execute the bundled command.
pub fn execute(resolver: &PathResolver, segments: &[String]) -> Result<(), CliError> {
    println!("{}", render(resolver, segments)?);
    Ok(())
}
