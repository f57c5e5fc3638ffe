mod check;
mod status;

use std::path::Path;

use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate version bumps between a base ref and the working tree
    Check(CheckArgs),
    /// Show what the pending change documents declare
    Status(StatusArgs),
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Git ref providing the base snapshot
    #[arg(long, default_value = "HEAD")]
    pub base: String,

    /// Git ref providing the new snapshot (default: working tree)
    #[arg(long)]
    pub head: Option<String>,

    /// Suppress success output
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Suppress output, only signal via the exit code
    #[arg(long, short)]
    pub quiet: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Check(args) => check::run(&args, start_path),
            Self::Status(args) => status::run(&args, start_path),
        }
    }
}
