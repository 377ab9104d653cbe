//! TOML configuration file support.
//!
//! Every setting can also come from a config file; command-line flags win
//! over the file, and the file wins over the profile presets:
//!
//! ```toml
//! # userformats.toml
//! [output]
//! data_dir = "data"
//! rows = 100000
//! formats = ["parquet", "csv"]
//!
//! [files]
//! csv = "users.csv"
//!
//! [parquet]
//! codec = "zstd"
//! compression_level = 9
//! row_group_size = 50000
//!
//! [csv]
//! delimiter = ";"
//! gzip_level = 9
//!
//! [json]
//! orient = "records"
//! pretty = false
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use userformats::codec::{CodecOptions, CompressionType, JsonOrient};
use userformats::pipeline::{ArtifactLayout, DEFAULT_DATA_DIR};
use userformats::registry::FormatRegistry;

use super::Profile;

/// Root configuration structure for userformats.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output location and selection.
    #[serde(default)]
    pub output: OutputConfig,

    /// Artifact file name overrides, keyed by format identifier.
    #[serde(default)]
    pub files: BTreeMap<String, String>,

    /// Parquet writer settings.
    #[serde(default)]
    pub parquet: ParquetSection,

    /// Settings shared by both CSV formats.
    #[serde(default)]
    pub csv: CsvSection,

    /// JSON layout settings.
    #[serde(default)]
    pub json: JsonSection,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the artifacts.
    pub data_dir: Option<PathBuf>,

    /// Number of records to generate.
    pub rows: Option<i64>,

    /// Formats to write, by identifier.
    pub formats: Option<Vec<String>>,
}

/// `[parquet]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParquetSection {
    /// Compression codec: `zstd`, `snappy` or `none`.
    pub codec: Option<String>,

    /// ZSTD compression level (1-22); implies `codec = "zstd"` when no codec is given.
    pub compression_level: Option<i32>,

    /// Number of records per row group.
    pub row_group_size: Option<usize>,
}

/// `[csv]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CsvSection {
    /// Single-byte field delimiter.
    pub delimiter: Option<String>,

    /// Gzip level for `csv.gz` (0-9).
    pub gzip_level: Option<u32>,
}

/// `[json]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonSection {
    /// `columns` or `records`.
    pub orient: Option<JsonOrient>,
    /// Indent the document.
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Artifact layout, preferring the command-line directory.
    pub fn layout(&self, data_dir: Option<PathBuf>) -> ArtifactLayout {
        let dir = data_dir
            .or_else(|| self.output.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        ArtifactLayout::new(dir)
    }

    /// Codec settings: profile presets overridden by the file.
    pub fn codec_options(&self, profile: Profile) -> Result<CodecOptions> {
        let mut options = CodecOptions {
            parquet: profile.parquet_config(),
            gzip_level: profile.gzip_level(),
            ..CodecOptions::default()
        };

        let level = self.parquet.compression_level;
        match self.parquet.codec.as_deref().map(str::to_lowercase).as_deref() {
            Some("zstd") => {
                let default_level = match options.parquet.compression {
                    CompressionType::Zstd(current) => current,
                    _ => 3,
                };
                options.parquet.compression = CompressionType::Zstd(level.unwrap_or(default_level));
            }
            Some("snappy") => options.parquet.compression = CompressionType::Snappy,
            Some("none") | Some("uncompressed") => {
                options.parquet.compression = CompressionType::Uncompressed
            }
            Some(other) => bail!(
                "Unknown parquet codec '{}'. Valid options: zstd, snappy, none",
                other
            ),
            None => {
                if let Some(level) = level {
                    options.parquet.compression = CompressionType::Zstd(level);
                }
            }
        }

        if let Some(row_group_size) = self.parquet.row_group_size {
            options.parquet.row_group_size = row_group_size;
        }

        if let Some(delimiter) = &self.csv.delimiter {
            options.delimiter = match delimiter.as_bytes() {
                [byte] => *byte,
                _ => bail!("CSV delimiter must be a single ASCII character, got '{}'", delimiter),
            };
        }
        if let Some(level) = self.csv.gzip_level {
            if level > 9 {
                bail!("Gzip level must be between 0 and 9, got {}", level);
            }
            options.gzip_level = level;
        }

        if let Some(orient) = self.json.orient {
            options.json_orient = orient;
        }
        if let Some(pretty) = self.json.pretty {
            options.json_pretty = pretty;
        }

        Ok(options)
    }

    /// Registry with file name overrides applied and narrowed to `formats`.
    ///
    /// Command-line `formats` win over `[output] formats`; an empty selection
    /// keeps every built-in format.
    pub fn registry(&self, profile: Profile, formats: &[String]) -> Result<FormatRegistry> {
        let mut registry = FormatRegistry::with_options(&self.codec_options(profile)?);

        for (identifier, file_name) in &self.files {
            registry
                .set_file_name(identifier, file_name.as_str())
                .with_context(|| format!("Invalid [files] entry '{}'", identifier))?;
        }

        let selection = if formats.is_empty() {
            self.output.formats.as_deref().unwrap_or_default()
        } else {
            formats
        };
        if !selection.is_empty() {
            registry.retain(selection)?;
        }

        Ok(registry)
    }
}
