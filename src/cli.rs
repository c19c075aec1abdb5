//! Command-line interface definition.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "zl-cleanup",
    about = "Normalize dirty download filenames and hard-link the clean copies into place",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Link (or rename) dirty files to their clean names
    Clean(CleanOpts),
    /// Show how names would be cleaned, without touching the filesystem
    Check(CheckOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clean(_) => "clean",
            Self::Check(_) => "check",
            Self::Version => "version",
        }
    }
}

/// Options for the `clean` subcommand.
#[allow(clippy::struct_excessive_bools)] // one per CLI switch
#[derive(Parser, Debug, Clone, Default)]
pub struct CleanOpts {
    /// Directory holding the dirty files [default: ~/Downloads]
    #[arg(short, long)]
    pub source: Option<String>,

    /// Directory receiving the clean names (repeatable, order kept) [default: source]
    #[arg(short, long = "destination")]
    pub destinations: Vec<String>,

    /// Perform the links instead of previewing them
    #[arg(long)]
    pub run: bool,

    /// Trash originals that were linked everywhere (requires --run)
    #[arg(long)]
    pub trash: bool,

    /// Only report files whose name cannot be cleaned
    #[arg(long)]
    pub only_failed: bool,

    /// Suppress progress output; errors are still shown
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-file outcomes at the end
    #[arg(long)]
    pub summary: bool,

    /// Rename the original instead of adding a hard link
    #[arg(long)]
    pub rename: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Configuration file [default: $XDG_CONFIG_HOME/zl-cleanup/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Options for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckOpts {
    /// File names to normalize and validate
    #[arg(required = true)]
    pub names: Vec<String>,
}
