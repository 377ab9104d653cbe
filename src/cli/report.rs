use anyhow::{Context, Result};
use std::path::PathBuf;

use userformats::report::{SizeReport, SizeReporter};

use super::config::Config;
use super::Profile;

/// Measure the artifacts already present in the data directory
pub fn run(data_dir: Option<PathBuf>, config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let layout = config.layout(data_dir);
    let registry = config.registry(Profile::default(), &[])?;

    let report = SizeReporter::new(layout)
        .measure(&registry)
        .context("Failed to measure artifacts")?;

    print(&report, json)
}

/// Print a size report as a table or as JSON
pub fn print(report: &SizeReport, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(());
    }

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    Ok(())
}
