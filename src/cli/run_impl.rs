use anyhow::{Result, bail};

use crate::formatters;
use crate::traversal;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    // Fail before touching anything: no traversal, no output file.
    if !args.root.is_dir() {
        bail!("'{}' is not a valid directory", args.root.display());
    }

    if args.verbose > 0 {
        eprintln!("Scanning directory: {}", args.root.display());
    }
    let rows = traversal::scan(&args.root);
    if args.verbose > 0 {
        eprintln!("Found {} directories", rows.len());
    }

    if args.json {
        let s = serde_json::to_string_pretty(&rows)?;
        println!("{}", s);
        return Ok(());
    }

    formatters::csv::write_file(&rows, &args.output)?;
    println!("Directory tree saved to {}", args.output.display());
    Ok(())
}
