//! # userformats
//!
//! A command-line tool that writes the same fake user table as Parquet, CSV,
//! gzip-compressed CSV and JSON, then compares the artifact sizes.
//!
//! ## Usage
//!
//! ```bash
//! # Generate 100000 users into ./data and print the size report
//! userformats run
//!
//! # Smaller run, two formats, JSON report
//! userformats run --rows 1000 -f parquet -f csv --json
//!
//! # Measure what is already on disk
//! userformats report --data-dir data
//!
//! # Peek into an artifact
//! userformats read csv.gz --head 3
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
