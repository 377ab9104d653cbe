use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod formats;
mod read;
mod report;
mod run;

mod config;
mod profile;

pub use profile::Profile;

/// Default number of records generated by `run`
pub const DEFAULT_ROWS: i64 = 100_000;

/// userformats - Compare the on-disk size of tabular data formats
#[derive(Parser)]
#[command(name = "userformats")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Write profile for trading speed against artifact size.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ProfileArg {
    /// Prioritize speed over size
    Fast,
    /// Balance between speed and size
    #[default]
    Balanced,
    /// Smallest artifacts, slower writes
    MaxCompression,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Fast => Profile::Fast,
            ProfileArg::Balanced => Profile::Balanced,
            ProfileArg::MaxCompression => Profile::MaxCompression,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fake users, write every format and report the sizes
    Run {
        /// Number of records to generate (default: 100000)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        rows: Option<i64>,

        /// Directory receiving the artifacts (default: ./data)
        #[arg(short = 'd', long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Only write these formats (repeatable)
        #[arg(short = 'f', long = "format", value_name = "FORMAT")]
        formats: Vec<String>,

        /// Seed the value source for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Write profile (fast, balanced, max-compression)
        #[arg(short = 'p', long, default_value = "balanced", value_enum)]
        profile: ProfileArg,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the size report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the size of the artifacts already on disk
    Report {
        /// Directory holding the artifacts (default: ./data)
        #[arg(short = 'd', long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the size report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode one artifact and show its first records
    Read {
        /// Format identifier (parquet, csv, csv.gz, json)
        #[arg(value_name = "FORMAT")]
        format: String,

        /// Directory holding the artifacts (default: ./data)
        #[arg(short = 'd', long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Number of records to print
        #[arg(long, default_value_t = 5)]
        head: usize,
    },

    /// List the registered formats
    Formats {
        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
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
    match cli.command {
        Commands::Run {
            rows,
            data_dir,
            formats,
            seed,
            profile,
            config,
            json,
        } => run::run(run::RunArgs {
            rows,
            data_dir,
            formats,
            seed,
            profile: Profile::from(profile),
            config,
            json,
        }),
        Commands::Report {
            data_dir,
            config,
            json,
        } => report::run(data_dir, config, json),
        Commands::Read {
            format,
            data_dir,
            config,
            head,
        } => read::run(format, data_dir, config, head),
        Commands::Formats { config } => formats::run(config),
    }
}
