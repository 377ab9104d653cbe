use anyhow::Result;
use std::path::PathBuf;

use super::config::Config;
use super::Profile;

/// List the registered formats with their artifact file names
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let registry = config.registry(Profile::default(), &[])?;

    println!("{:<10} {:<20} {:<28} {}", "Format", "File", "Kind", "Compressed");
    for (descriptor, _) in registry.iter() {
        println!(
            "{:<10} {:<20} {:<28} {}",
            descriptor.identifier,
            descriptor.file_name,
            descriptor.kind.as_str(),
            if descriptor.compressed { "yes" } else { "no" }
        );
    }

    Ok(())
}
