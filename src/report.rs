//! # Size Reporter
//!
//! Measures the artifacts of every registered format after the writes and
//! yields them as an ordered [`SizeReport`]. Formats that were never written
//! are left out; they are not an error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(feature = "colorized_output")]
use console::style;
use log::debug;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::pipeline::ArtifactLayout;
use crate::registry::FormatRegistry;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to mebibytes
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MIB
}

/// On-disk size of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSize {
    /// Format identifier
    pub format: String,
    /// Artifact file name
    pub file_name: String,
    /// Exact size in bytes
    pub bytes: u64,
}

impl FormatSize {
    /// Size in mebibytes (`bytes / 1024²`)
    pub fn size_mib(&self) -> f64 {
        bytes_to_mib(self.bytes)
    }
}

impl Serialize for FormatSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormatSize", 4)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("file_name", &self.file_name)?;
        state.serialize_field("bytes", &self.bytes)?;
        state.serialize_field("size_mib", &self.size_mib())?;
        state.end()
    }
}

/// Ordered sizes of the artifacts present on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeReport {
    /// Directory that was inspected
    pub data_dir: PathBuf,
    /// One entry per existing artifact, in registry order
    pub entries: Vec<FormatSize>,
}

impl SizeReport {
    /// Entry for a format identifier
    pub fn get(&self, format: &str) -> Option<&FormatSize> {
        self.entries.iter().find(|e| e.format == format)
    }

    /// Number of measured artifacts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no artifact was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all artifact sizes
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }

    /// Entry with the fewest bytes (first one on ties)
    pub fn smallest(&self) -> Option<&FormatSize> {
        self.entries
            .iter()
            .reduce(|best, e| if e.bytes < best.bytes { e } else { best })
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Artifact Size Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("====================").cyan()));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Directory").bold(),
                self.data_dir.display()
            ));

            if self.entries.is_empty() {
                output.push_str(&format!("{}\n", style("No artifacts found").yellow()));
                return output;
            }

            let smallest = self.smallest().map(|e| e.format.as_str());
            output.push_str(&format!("{}\n", style(header_line()).bold()));
            for entry in &self.entries {
                let line = entry_line(entry);
                if Some(entry.format.as_str()) == smallest {
                    output.push_str(&format!("{}\n", style(line).green()));
                } else {
                    output.push_str(&format!("{}\n", line));
                }
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} artifacts, {:.3} MiB\n",
                style("Total").bold(),
                style(self.entries.len()).cyan(),
                bytes_to_mib(self.total_bytes())
            ));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

fn header_line() -> String {
    format!("{:<10} {:<20} {:>12} {:>14}", "Format", "File", "Size (MiB)", "Bytes")
}

fn entry_line(entry: &FormatSize) -> String {
    format!(
        "{:<10} {:<20} {:>12.3} {:>14}",
        entry.format,
        entry.file_name,
        entry.size_mib(),
        entry.bytes
    )
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Artifact Size Report")?;
        writeln!(f, "====================")?;
        writeln!(f, "Directory: {}", self.data_dir.display())?;
        writeln!(f)?;

        if self.entries.is_empty() {
            return writeln!(f, "No artifacts found");
        }

        writeln!(f, "{}", header_line())?;
        for entry in &self.entries {
            writeln!(f, "{}", entry_line(entry))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Total: {} artifacts, {:.3} MiB",
            self.entries.len(),
            bytes_to_mib(self.total_bytes())
        )
    }
}

impl Serialize for SizeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SizeReport", 3)?;
        state.serialize_field("data_dir", &self.data_dir)?;
        state.serialize_field("entries", &self.entries)?;
        state.serialize_field("total_bytes", &self.total_bytes())?;
        state.end()
    }
}

/// Measures artifacts inside an [`ArtifactLayout`]
#[derive(Debug, Clone)]
pub struct SizeReporter {
    layout: ArtifactLayout,
}

impl SizeReporter {
    /// Create a reporter for a data directory layout
    pub fn new(layout: ArtifactLayout) -> Self {
        Self { layout }
    }

    /// Layout being measured
    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Measure every registered format, in registry order.
    ///
    /// Missing artifacts and paths that are not regular files are omitted.
    /// Any other I/O failure propagates.
    pub fn measure(&self, registry: &FormatRegistry) -> io::Result<SizeReport> {
        let mut entries = Vec::with_capacity(registry.len());

        for (descriptor, _) in registry.iter() {
            let path = self.layout.artifact_path(descriptor);
            let Some(bytes) = file_size(&path)? else {
                debug!("Skipping {}: no artifact at {}", descriptor.identifier, path.display());
                continue;
            };

            entries.push(FormatSize {
                format: descriptor.identifier.clone(),
                file_name: descriptor.file_name.clone(),
                bytes,
            });
        }

        Ok(SizeReport {
            data_dir: self.layout.data_dir().to_path_buf(),
            entries,
        })
    }
}

fn file_size(path: &Path) -> io::Result<Option<u64>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        // A path component is a regular file, so nothing can exist below it
        Err(_) if path.parent().is_some_and(|parent| parent.exists() && !parent.is_dir()) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn size(format: &str, bytes: u64) -> FormatSize {
        FormatSize {
            format: format.to_string(),
            file_name: format!("data.{}", format),
            bytes,
        }
    }

    #[test]
    fn test_size_mib() {
        assert_eq!(size("csv", 1024 * 1024).size_mib(), 1.0);
        assert_eq!(size("csv", 512 * 1024).size_mib(), 0.5);
        assert_eq!(size("csv", 0).size_mib(), 0.0);
    }

    #[test]
    fn test_report_queries() {
        let report = SizeReport {
            data_dir: PathBuf::from("data"),
            entries: vec![size("parquet", 300), size("csv", 900), size("json", 300)],
        };

        assert_eq!(report.total_bytes(), 1500);
        assert_eq!(report.smallest().unwrap().format, "parquet");
        assert_eq!(report.get("csv").unwrap().bytes, 900);
        assert!(report.get("xml").is_none());

        let text = report.to_string();
        assert!(text.contains("Artifact Size Report"));
        assert!(text.find("parquet").unwrap() < text.find("csv").unwrap());
        assert!(!report.format_colored().is_empty());
    }

    #[test]
    fn test_report_json() {
        let report = SizeReport {
            data_dir: PathBuf::from("data"),
            entries: vec![size("csv", 2 * 1024 * 1024)],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_bytes"], 2 * 1024 * 1024);
        assert_eq!(value["entries"][0]["format"], "csv");
        assert_eq!(value["entries"][0]["size_mib"], 2.0);
    }

    #[test]
    fn test_measure_skips_missing_and_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.csv"), b"0123456789").unwrap();
        fs::create_dir(dir.path().join("data.json")).unwrap();

        let reporter = SizeReporter::new(ArtifactLayout::new(dir.path()));
        let report = reporter.measure(&FormatRegistry::standard()).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0], FormatSize {
            format: "csv".to_string(),
            file_name: "data.csv".to_string(),
            bytes: 10,
        });
    }

    #[test]
    fn test_measure_empty_dir() {
        let dir = tempdir().unwrap();
        let reporter = SizeReporter::new(ArtifactLayout::new(dir.path().join("missing")));
        let report = reporter.measure(&FormatRegistry::standard()).unwrap();
        assert!(report.is_empty());
        assert!(report.to_string().contains("No artifacts found"));
    }

    #[test]
    fn test_measure_data_dir_is_a_file() {
        let dir = tempdir().unwrap();
        let not_a_dir = dir.path().join("data");
        fs::write(&not_a_dir, b"plain file").unwrap();

        let reporter = SizeReporter::new(ArtifactLayout::new(&not_a_dir));
        let report = reporter.measure(&FormatRegistry::standard()).unwrap();
        assert!(report.is_empty());
    }
}
