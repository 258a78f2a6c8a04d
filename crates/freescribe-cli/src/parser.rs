//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::{Path, PathBuf};

use clap::Parser;
use freescribe_paths::ExecutionMode;

use crate::commands::Commands;

/// Command-line interface for inspecting FreeScribe path resolution.
///
/// Global options select the execution mode; subcommands resolve paths
/// the same way the application does.
#[derive(Parser)]
#[command(name = "freescribe-paths")]
#[command(about = "Inspect FreeScribe resource and user data paths")]
#[command(version)]
pub struct Cli {
    /// Bundle extraction directory; resolves in bundled mode when set
    #[arg(long = "bundle-root", env = "FREESCRIBE_BUNDLE_ROOT", global = true)]
    pub bundle_root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execution mode selected by `--bundle-root`; blank means source.
    pub fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::from_bundle_root(self.bundle_root.as_deref().map(Path::as_os_str))
    }
}
