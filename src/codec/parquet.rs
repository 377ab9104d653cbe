use std::collections::HashMap;
use std::path::Path;

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::file::reader::{FileReader, SerializedFileReader};

use crate::dataset::Dataset;
use crate::schema::{
    create_user_schema_arc, validate_schema, KEY_CREATED, KEY_FORMAT_VERSION, KEY_ROW_COUNT,
    KEY_WRITER_INFO, USERFORMATS_FORMAT_VERSION,
};

use super::artifact::{open_artifact, write_atomically};
use super::{Codec, CodecError, EncodeStats, FormatKind, ParquetConfig};

/// Columnar-binary codec backed by Apache Parquet
#[derive(Debug, Clone, Default)]
pub struct ParquetCodec {
    config: ParquetConfig,
}

/// Summary of a Parquet artifact's footer
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Format version recorded by the writer, `"unknown"` for foreign files
    pub format_version: String,
    /// Total number of rows across row groups
    pub total_rows: i64,
    /// Number of row groups
    pub num_row_groups: usize,
    /// Raw key-value metadata
    pub key_value_metadata: HashMap<String, String>,
}

impl ParquetCodec {
    /// Create a codec with the given writer configuration
    pub fn new(config: ParquetConfig) -> Self {
        Self { config }
    }

    /// Writer configuration
    pub fn config(&self) -> &ParquetConfig {
        &self.config
    }

    fn footer_entries(rows: usize) -> HashMap<String, String> {
        let mut metadata = HashMap::new();
        metadata.insert(
            KEY_FORMAT_VERSION.to_string(),
            USERFORMATS_FORMAT_VERSION.to_string(),
        );
        metadata.insert(KEY_ROW_COUNT.to_string(), rows.to_string());
        metadata.insert(KEY_CREATED.to_string(), chrono::Utc::now().to_rfc3339());
        metadata.insert(
            KEY_WRITER_INFO.to_string(),
            format!("userformats {}", env!("CARGO_PKG_VERSION")),
        );
        metadata
    }

    /// Read the footer of an existing artifact without decoding its rows
    pub fn footer_info(&self, source: &Path) -> Result<FooterInfo, CodecError> {
        let file = open_artifact(source)?;
        let reader = SerializedFileReader::new(file).map_err(|e| CodecError::malformed(source, e))?;
        let parquet_metadata = reader.metadata();
        let file_meta = parquet_metadata.file_metadata();

        let mut kv_metadata = HashMap::new();
        if let Some(kv_list) = file_meta.key_value_metadata() {
            for kv in kv_list {
                if let Some(value) = &kv.value {
                    kv_metadata.insert(kv.key.clone(), value.clone());
                }
            }
        }

        let format_version = kv_metadata
            .get(KEY_FORMAT_VERSION)
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let total_rows: i64 = (0..parquet_metadata.num_row_groups())
            .map(|i| parquet_metadata.row_group(i).num_rows())
            .sum();

        Ok(FooterInfo {
            format_version,
            total_rows,
            num_row_groups: parquet_metadata.num_row_groups(),
            key_value_metadata: kv_metadata,
        })
    }
}

impl Codec for ParquetCodec {
    fn kind(&self) -> FormatKind {
        FormatKind::ColumnarBinary
    }

    fn encode(&self, dataset: &Dataset, destination: &Path) -> Result<EncodeStats, CodecError> {
        let batch = dataset.to_record_batch()?;
        let props = self
            .config
            .to_writer_properties(&Self::footer_entries(dataset.len()));

        let bytes_written = write_atomically(destination, |out| {
            let mut writer = ArrowWriter::try_new(out, create_user_schema_arc(), Some(props))?;
            if batch.num_rows() > 0 {
                writer.write(&batch)?;
            }
            writer.close()?;
            Ok(())
        })?;

        Ok(EncodeStats {
            rows_written: dataset.len(),
            bytes_written,
        })
    }

    fn decode(&self, source: &Path) -> Result<Dataset, CodecError> {
        let file = open_artifact(source)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .map_err(|e| CodecError::malformed(source, e))?;

        validate_schema(builder.schema()).map_err(|e| CodecError::malformed(source, e))?;

        let reader = builder
            .with_batch_size(self.config.read_batch_size.max(1))
            .build()
            .map_err(|e| CodecError::malformed(source, e))?;

        let mut dataset = Dataset::new();
        for batch in reader {
            let batch = batch.map_err(|e| CodecError::malformed(source, e))?;
            let part =
                Dataset::try_from_batch(&batch).map_err(|e| CodecError::malformed(source, e))?;
            dataset.append(part);
        }

        Ok(dataset)
    }
}
