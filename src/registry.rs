//! # Format Registry
//!
//! Ordered mapping from a format identifier to its [`Codec`] and
//! [`FormatDescriptor`]. Iteration follows registration order, which is also
//! the order of the size report.
//!
//! The standard registry holds the four built-in formats:
//!
//! | Identifier | File name | Kind |
//! |------------|-----------|------|
//! | `parquet` | `data.parquet` | columnar-binary |
//! | `csv` | `data.csv` | delimited-text |
//! | `csv.gz` | `data.csv.gz` | compressed-delimited-text |
//! | `json` | `data.json` | row-oriented-text |

use std::fmt;

use serde::Serialize;

use crate::codec::{Codec, CodecOptions, DelimitedCodec, FormatKind, JsonCodec, ParquetCodec};

/// Identifier of the Parquet format
pub const PARQUET: &str = "parquet";
/// Identifier of the plain CSV format
pub const CSV: &str = "csv";
/// Identifier of the gzip-compressed CSV format
pub const CSV_GZ: &str = "csv.gz";
/// Identifier of the JSON format
pub const JSON: &str = "json";

/// Errors raised by registry lookups and registration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No format is registered under this identifier
    #[error("Unknown format '{0}'")]
    UnknownFormat(String),

    /// A format with this identifier is already registered
    #[error("Format '{0}' is already registered")]
    DuplicateFormat(String),
}

/// Static description of a registered format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatDescriptor {
    /// Unique identifier, e.g. `"csv.gz"`
    pub identifier: String,
    /// File name of the artifact inside the data directory
    pub file_name: String,
    /// Encoding family
    pub kind: FormatKind,
    /// Whether the payload is wrapped in a general-purpose compressed stream
    pub compressed: bool,
}

impl FormatDescriptor {
    /// Describe a format; `compressed` follows from `kind`
    pub fn new(
        identifier: impl Into<String>,
        file_name: impl Into<String>,
        kind: FormatKind,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            file_name: file_name.into(),
            kind,
            compressed: kind == FormatKind::CompressedDelimitedText,
        }
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.identifier, self.file_name, self.kind)
    }
}

struct Entry {
    descriptor: FormatDescriptor,
    codec: Box<dyn Codec>,
}

/// Insertion-ordered set of formats
#[derive(Default)]
pub struct FormatRegistry {
    entries: Vec<Entry>,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| &e.descriptor))
            .finish()
    }
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in formats with default codec settings
    pub fn standard() -> Self {
        Self::with_options(&CodecOptions::default())
    }

    /// The four built-in formats, in order parquet, csv, csv.gz, json
    pub fn with_options(options: &CodecOptions) -> Self {
        let mut registry = Self::new();
        registry.push_builtin(
            PARQUET,
            "data.parquet",
            Box::new(ParquetCodec::new(options.parquet.clone())),
        );
        registry.push_builtin(
            CSV,
            "data.csv",
            Box::new(DelimitedCodec::plain().with_delimiter(options.delimiter)),
        );
        registry.push_builtin(
            CSV_GZ,
            "data.csv.gz",
            Box::new(DelimitedCodec::gzip(options.gzip_level).with_delimiter(options.delimiter)),
        );
        let json = JsonCodec::new(options.json_orient).pretty(options.json_pretty);
        registry.push_builtin(JSON, "data.json", Box::new(json));
        registry
    }

    /// Add a format at the end of the registry.
    ///
    /// Fails with [`RegistryError::DuplicateFormat`] if the identifier is taken.
    pub fn register(
        &mut self,
        descriptor: FormatDescriptor,
        codec: Box<dyn Codec>,
    ) -> Result<(), RegistryError> {
        if self.position(&descriptor.identifier).is_some() {
            return Err(RegistryError::DuplicateFormat(descriptor.identifier));
        }
        self.entries.push(Entry { descriptor, codec });
        Ok(())
    }

    /// Look up the codec and descriptor registered under `identifier`
    pub fn resolve(
        &self,
        identifier: &str,
    ) -> Result<(&dyn Codec, &FormatDescriptor), RegistryError> {
        self.position(identifier)
            .map(|i| {
                let entry = &self.entries[i];
                (entry.codec.as_ref(), &entry.descriptor)
            })
            .ok_or_else(|| RegistryError::UnknownFormat(identifier.to_string()))
    }

    /// Descriptor registered under `identifier`
    pub fn descriptor(&self, identifier: &str) -> Result<&FormatDescriptor, RegistryError> {
        self.resolve(identifier).map(|(_, descriptor)| descriptor)
    }

    /// Override the artifact file name of a registered format
    pub fn set_file_name(
        &mut self,
        identifier: &str,
        file_name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let i = self
            .position(identifier)
            .ok_or_else(|| RegistryError::UnknownFormat(identifier.to_string()))?;
        self.entries[i].descriptor.file_name = file_name.into();
        Ok(())
    }

    /// Keep only the formats in `identifiers`, preserving registry order.
    ///
    /// Fails with [`RegistryError::UnknownFormat`] on the first identifier that
    /// is not registered; the registry is unchanged in that case.
    pub fn retain(&mut self, identifiers: &[String]) -> Result<(), RegistryError> {
        if let Some(unknown) = identifiers.iter().find(|id| self.position(id).is_none()) {
            return Err(RegistryError::UnknownFormat(unknown.clone()));
        }
        self.entries
            .retain(|e| identifiers.iter().any(|id| *id == e.descriptor.identifier));
        Ok(())
    }

    /// Iterate over `(descriptor, codec)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&FormatDescriptor, &dyn Codec)> {
        self.entries.iter().map(|e| (&e.descriptor, e.codec.as_ref()))
    }

    /// Registered identifiers in order
    pub fn identifiers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.descriptor.identifier.as_str())
            .collect()
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no format is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_builtin(&mut self, identifier: &str, file_name: &str, codec: Box<dyn Codec>) {
        let descriptor = FormatDescriptor::new(identifier, file_name, codec.kind());
        self.entries.push(Entry { descriptor, codec });
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.descriptor.identifier == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let registry = FormatRegistry::standard();
        assert_eq!(registry.identifiers(), vec!["parquet", "csv", "csv.gz", "json"]);
        assert_eq!(registry.len(), 4);

        let names: Vec<_> = registry.iter().map(|(d, _)| d.file_name.as_str()).collect();
        assert_eq!(names, vec!["data.parquet", "data.csv", "data.csv.gz", "data.json"]);
    }

    #[test]
    fn test_resolve() {
        let registry = FormatRegistry::standard();
        let (codec, descriptor) = registry.resolve(CSV_GZ).unwrap();
        assert_eq!(codec.kind(), FormatKind::CompressedDelimitedText);
        assert!(descriptor.compressed);
        assert!(!registry.descriptor(CSV).unwrap().compressed);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = FormatRegistry::standard();
        let err = registry.resolve("xml").unwrap_err();
        assert_eq!(err, RegistryError::UnknownFormat("xml".to_string()));
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = FormatRegistry::standard();
        let descriptor = FormatDescriptor::new(JSON, "other.json", FormatKind::RowOrientedText);
        let err = registry
            .register(descriptor, Box::new(JsonCodec::default()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateFormat(_)));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_register_appends() {
        let mut registry = FormatRegistry::new();
        assert!(registry.is_empty());

        let descriptor = FormatDescriptor::new("tsv", "data.tsv", FormatKind::DelimitedText);
        registry
            .register(descriptor, Box::new(DelimitedCodec::plain().with_delimiter(b'\t')))
            .unwrap();
        assert_eq!(registry.identifiers(), vec!["tsv"]);
    }

    #[test]
    fn test_set_file_name() {
        let mut registry = FormatRegistry::standard();
        registry.set_file_name(CSV, "users.csv").unwrap();
        assert_eq!(registry.descriptor(CSV).unwrap().file_name, "users.csv");
        assert!(registry.set_file_name("xml", "x.xml").is_err());
    }

    #[test]
    fn test_retain() {
        let mut registry = FormatRegistry::standard();
        registry
            .retain(&["json".to_string(), "parquet".to_string()])
            .unwrap();
        assert_eq!(registry.identifiers(), vec!["parquet", "json"]);

        let err = registry.retain(&["csv".to_string()]).unwrap_err();
        assert_eq!(err, RegistryError::UnknownFormat("csv".to_string()));
        assert_eq!(registry.len(), 2);
    }
}
