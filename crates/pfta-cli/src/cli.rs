//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Fault tree analyser: read a fault tree text file, write its analysis
/// tables to `<path>.out/`.
#[derive(Parser, Debug)]
#[command(name = "pfta", about, disable_version_flag = true)]
pub struct Cli {
    /// Path to a fault tree text file.
    pub path: PathBuf,

    /// Suppress log output.
    #[arg(long)]
    pub quiet: bool,

    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub(crate) version: (),
}
