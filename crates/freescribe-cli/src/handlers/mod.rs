//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(resolver: &PathResolver, ...) -> Result<(), CliError>`
//! - A `render` function returns the output so it can be tested without stdout
//! - No resolution logic of their own; everything goes through `PathResolver`

pub mod bundled;
pub mod paths;
pub mod resource;
