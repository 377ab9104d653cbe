//! # Codec Module
//!
//! One interface over every artifact format. A [`Codec`] encodes a borrowed
//! [`Dataset`] to a file and decodes such a file back into a dataset.
//!
//! | Codec | Kind | Artifact |
//! |-------|------|----------|
//! | [`ParquetCodec`] | columnar-binary | Parquet with embedded Arrow schema |
//! | [`DelimitedCodec::plain`] | delimited-text | CSV with header row |
//! | [`DelimitedCodec::gzip`] | compressed-delimited-text | the same CSV in a gzip stream |
//! | [`JsonCodec`] | row-oriented-text | one JSON document |
//!
//! ## Write Semantics
//!
//! Every encode writes to a temporary file next to the destination and renames
//! it into place once complete. A failed encode leaves the previous artifact
//! (if any) untouched.
//!
//! ## Fidelity
//!
//! Parquet round-trips every value exactly. The text formats store timestamps
//! as text (CSV, record-oriented JSON) or epoch milliseconds (column-oriented
//! JSON); decoding re-casts them through the fixed schema, so precision below
//! one second (resp. one millisecond) is lost.

mod artifact;
mod config;
mod delimited;
mod error;
mod json;
mod parquet;


use std::fmt;
use std::path::Path;

use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::dataset::Dataset;

pub use config::{CodecOptions, CompressionType, JsonOrient, ParquetConfig};
pub use delimited::DelimitedCodec;
pub use error::CodecError;
pub use json::JsonCodec;
pub use self::parquet::{FooterInfo, ParquetCodec};

/// Family of a codec's encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    /// Self-describing columnar layout with embedded type metadata
    ColumnarBinary,
    /// Delimiter-separated values with a header row
    DelimitedText,
    /// Delimited text inside a general-purpose compressed stream
    CompressedDelimitedText,
    /// One structured document for the whole dataset
    RowOrientedText,
}

impl FormatKind {
    /// Kebab-case name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::ColumnarBinary => "columnar-binary",
            FormatKind::DelimitedText => "delimited-text",
            FormatKind::CompressedDelimitedText => "compressed-delimited-text",
            FormatKind::RowOrientedText => "row-oriented-text",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics from a completed encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    /// Number of records written
    pub rows_written: usize,
    /// Size of the committed artifact in bytes
    pub bytes_written: u64,
}

impl fmt::Display for EncodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} records ({} bytes)",
            self.rows_written, self.bytes_written
        )
    }
}

/// Encode/decode pair for one artifact format
pub trait Codec: Send + Sync {
    /// Encoding family of this codec
    fn kind(&self) -> FormatKind;

    /// Serialize every record, in order, to `destination`.
    fn encode(&self, dataset: &Dataset, destination: &Path) -> Result<EncodeStats, CodecError>;

    /// Parse an existing artifact back into a dataset.
    ///
    /// Fails with [`CodecError::NotFound`] when `source` does not exist and with
    /// [`CodecError::MalformedArtifact`] when its content does not parse.
    fn decode(&self, source: &Path) -> Result<Dataset, CodecError>;

    /// Encode untyped tabular input.
    ///
    /// A batch that is not shaped like the user table fails with
    /// [`CodecError::TypeMismatch`] before `destination` is touched.
    fn encode_batch(
        &self,
        batch: &RecordBatch,
        destination: &Path,
    ) -> Result<EncodeStats, CodecError> {
        let dataset = Dataset::try_from_batch(batch)?;
        self.encode(&dataset, destination)
    }
}

impl std::fmt::Debug for dyn Codec + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("kind", &self.kind()).finish()
    }
}
