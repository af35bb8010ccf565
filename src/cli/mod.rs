use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ms2parse::ParserConfig;

mod check;
mod config;
mod dump;
mod info;

use config::Config;

/// ms2parse - MS2 tandem mass spectrometry file parser
#[derive(Parser)]
#[command(name = "ms2parse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Stop with an error after this many input lines
    #[arg(long, global = true)]
    max_lines: Option<usize>,

    /// Stop with an error after this many input bytes
    #[arg(long, global = true)]
    max_bytes: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display header fields and run statistics for an MS2 file
    Info {
        /// Input MS2 file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report malformed and out-of-place lines; exits non-zero if any are found
    Check {
        /// Input MS2 file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export the parsed document as JSON
    Dump {
        /// Input MS2 file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON file path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    fn parser_config(&self) -> Result<ParserConfig> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(config.parser_config(self.max_lines, self.max_bytes))
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.parser_config()?;
    match cli.command {
        Commands::Info { file } => info::run(file, &config),
        Commands::Check { file } => check::run(file, &config),
        Commands::Dump {
            file,
            output,
            pretty,
        } => dump::run(file, output, pretty, &config),
    }
}
