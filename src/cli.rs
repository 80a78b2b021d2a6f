use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(name = "dirmat", version, about = "Flatten a directory tree into a CSV matrix", long_about = None)]
pub struct Args {
    /// Root directory to scan
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Output CSV file path
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "dir_tree.csv",
        value_hint = ValueHint::FilePath
    )]
    pub output: PathBuf,

    /// Print the matrix as JSON to stdout instead of writing a CSV file
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the root is not a directory or the output cannot be
/// written.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
