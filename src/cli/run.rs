use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use userformats::generator::{RandomValueSource, RecordGenerator};
use userformats::pipeline::Pipeline;

use super::config::Config;
use super::{report, Profile, DEFAULT_ROWS};

/// Options of the `run` command after argument parsing
pub struct RunArgs {
    pub rows: Option<i64>,
    pub data_dir: Option<PathBuf>,
    pub formats: Vec<String>,
    pub seed: Option<u64>,
    pub profile: Profile,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Generate users, write the selected formats and print the size report
pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let rows = args.rows.or(config.output.rows).unwrap_or(DEFAULT_ROWS);
    let layout = config.layout(args.data_dir);
    let registry = config.registry(args.profile, &args.formats)?;

    info!("userformats - write and measure");
    info!("===============================");
    info!("Rows: {}", rows);
    info!("Data directory: {}", layout.data_dir().display());
    info!("Formats: {}", registry.identifiers().join(", "));
    info!("Profile: {}", args.profile);

    let source = match args.seed {
        Some(seed) => RandomValueSource::seeded(seed),
        None => RandomValueSource::from_entropy(),
    };
    let mut generator = RecordGenerator::new(source);

    let pipeline = Pipeline::new(registry, layout);
    let summary = pipeline
        .run(&mut generator, rows)
        .context("Failed to write artifacts")?;

    for write in &summary.writes {
        info!("  {}: {}", write.format, write.stats);
    }

    report::print(&summary.report, args.json)
}
