use anyhow::{Context, Result};
use std::path::PathBuf;

use userformats::codec::{FormatKind, ParquetCodec};
use userformats::pipeline::Pipeline;
use userformats::schema::columns;

use super::config::Config;
use super::Profile;

/// Decode one artifact and print its first records
pub fn run(
    format: String,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    head: usize,
) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let registry = config.registry(Profile::default(), &[])?;
    let pipeline = Pipeline::new(registry, config.layout(data_dir));

    let descriptor = pipeline.registry().descriptor(&format)?;
    let path = pipeline.layout().artifact_path(descriptor);

    let dataset = pipeline
        .read(&format)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    println!("Artifact Contents");
    println!("=================");
    println!("File: {}", path.display());
    println!("Format: {} ({})", descriptor.identifier, descriptor.kind);
    println!("Records: {}", dataset.len());
    println!("Distinct ids: {}", dataset.distinct_ids());

    if descriptor.kind == FormatKind::ColumnarBinary {
        let footer = ParquetCodec::default()
            .footer_info(&path)
            .context("Failed to read Parquet footer")?;
        println!("Row groups: {}", footer.num_row_groups);
        println!("Format version: {}", footer.format_version);
    }
    println!();

    if head == 0 || dataset.is_empty() {
        return Ok(());
    }

    println!("{}", columns::ALL.join(" | "));
    for record in dataset.iter().take(head) {
        println!("{}", record.to_text_row().join(" | "));
    }
    if dataset.len() > head {
        println!("... {} more", dataset.len() - head);
    }

    Ok(())
}
