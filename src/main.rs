//! # ms2parse
//!
//! Command-line front end for the MS2 parser.
//!
//! ## Usage
//!
//! ```bash
//! # Show header fields and run statistics
//! ms2parse info run01.ms2
//!
//! # List malformed lines (exit status 1 if any)
//! ms2parse check run01.ms2
//!
//! # Export the parsed document as JSON
//! ms2parse dump run01.ms2 --output run01.json --pretty
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
