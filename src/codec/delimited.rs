use std::io::{BufReader, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::dataset::{Dataset, Record};
use crate::schema::columns;

use super::artifact::{open_artifact, write_atomically};
use super::{Codec, CodecError, EncodeStats, FormatKind};

/// Delimited-text codec, optionally wrapped in a gzip stream.
///
/// The first line is the header with the twelve column names in schema order.
/// Timestamps are written as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedCodec {
    delimiter: u8,
    gzip: Option<Compression>,
}

impl DelimitedCodec {
    /// Plain comma-separated values
    pub fn plain() -> Self {
        Self {
            delimiter: b',',
            gzip: None,
        }
    }

    /// Comma-separated values in a gzip stream at `level` (clamped to 0-9)
    pub fn gzip(level: u32) -> Self {
        Self {
            delimiter: b',',
            gzip: Some(Compression::new(level.min(9))),
        }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Field delimiter
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Whether the text is gzip-compressed
    pub fn is_compressed(&self) -> bool {
        self.gzip.is_some()
    }

    fn write_rows<W: Write>(&self, sink: W, dataset: &Dataset) -> Result<W, CodecError> {
        // Header is written by hand so that an empty dataset still gets one
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(sink);

        writer.write_record(columns::ALL)?;
        for record in dataset {
            writer.serialize(record)?;
        }
        writer.flush()?;

        writer
            .into_inner()
            .map_err(|e| CodecError::IoError(e.into_error()))
    }

    fn read_rows<R: Read>(&self, source: R, path: &Path) -> Result<Dataset, CodecError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| CodecError::malformed(path, e))?
            .clone();
        if !headers.iter().eq(columns::ALL) {
            return Err(CodecError::malformed(
                path,
                format!("unexpected header {:?}", headers.iter().collect::<Vec<_>>()),
            ));
        }

        let mut dataset = Dataset::new();
        for row in reader.deserialize::<Record>() {
            dataset.push(row.map_err(|e| CodecError::malformed(path, e))?);
        }
        Ok(dataset)
    }
}

impl Default for DelimitedCodec {
    fn default() -> Self {
        Self::plain()
    }
}

impl Codec for DelimitedCodec {
    fn kind(&self) -> FormatKind {
        if self.is_compressed() {
            FormatKind::CompressedDelimitedText
        } else {
            FormatKind::DelimitedText
        }
    }

    fn encode(&self, dataset: &Dataset, destination: &Path) -> Result<EncodeStats, CodecError> {
        let bytes_written = write_atomically(destination, |out| {
            match self.gzip {
                Some(level) => {
                    let encoder = self.write_rows(GzEncoder::new(out, level), dataset)?;
                    encoder.finish()?;
                }
                None => {
                    self.write_rows(out, dataset)?;
                }
            }
            Ok(())
        })?;

        Ok(EncodeStats {
            rows_written: dataset.len(),
            bytes_written,
        })
    }

    fn decode(&self, source: &Path) -> Result<Dataset, CodecError> {
        let file = BufReader::new(open_artifact(source)?);
        match self.gzip {
            Some(_) => self.read_rows(GzDecoder::new(file), source),
            None => self.read_rows(file, source),
        }
    }
}
