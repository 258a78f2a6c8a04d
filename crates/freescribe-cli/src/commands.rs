//! Subcommands of the `freescribe-paths` binary.

use clap::Subcommand;

/// Available path resolution commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show every resolved FreeScribe directory
    Paths {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a read-only resource shipped with the application
    Bundled {
        /// Directory names followed by the file name
        #[arg(required = true, num_args = 1..)]
        segments: Vec<String>,
    },

    /// Resolve a writable per-user file (creates the data directory when bundled)
    Resource {
        /// File name inside the user data directory
        filename: String,
    },
}
