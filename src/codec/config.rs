use std::collections::HashMap;

use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;
use parquet::schema::types::ColumnPath;
use serde::{Deserialize, Serialize};

use crate::schema::columns;

/// Compression options for the Parquet artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// ZSTD compression (best compression ratio)
    Zstd(i32),
    /// Snappy compression (what pyarrow writes by default)
    Snappy,
    /// No compression (fastest write, largest files)
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        Self::Snappy
    }
}

impl CompressionType {
    /// Maximum compression (slower write, smallest files)
    pub fn max_compression() -> Self {
        Self::Zstd(19)
    }

    /// Balanced compression (default)
    pub fn balanced() -> Self {
        Self::Snappy
    }

    /// Fast write (no compression)
    pub fn fast() -> Self {
        Self::Uncompressed
    }

    fn to_parquet(self) -> Compression {
        match self {
            CompressionType::Zstd(level) => {
                Compression::ZSTD(ZstdLevel::try_new(level).unwrap_or_default())
            }
            CompressionType::Snappy => Compression::SNAPPY,
            CompressionType::Uncompressed => Compression::UNCOMPRESSED,
        }
    }
}

/// Configuration for the Parquet codec
#[derive(Debug, Clone)]
pub struct ParquetConfig {
    /// Compression type to use
    pub compression: CompressionType,

    /// Target row group size (number of records per group)
    pub row_group_size: usize,

    /// Data page size in bytes
    pub data_page_size: usize,

    /// Whether to write statistics for columns
    pub write_statistics: bool,

    /// Dictionary page size limit in bytes
    pub dictionary_page_size_limit: usize,

    /// Number of records per batch when decoding
    pub read_batch_size: usize,
}

impl Default for ParquetConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::default(),
            row_group_size: 100_000,
            // 1MB data pages
            data_page_size: 1024 * 1024,
            write_statistics: true,
            dictionary_page_size_limit: 1024 * 1024,
            read_batch_size: 65_536,
        }
    }
}

impl ParquetConfig {
    /// Configuration optimized for maximum compression (slower write)
    pub fn max_compression() -> Self {
        Self {
            compression: CompressionType::max_compression(),
            row_group_size: 500_000,
            data_page_size: 2 * 1024 * 1024,
            dictionary_page_size_limit: 2 * 1024 * 1024,
            ..Self::default()
        }
    }

    /// Configuration optimized for fast writing (larger files)
    pub fn fast() -> Self {
        Self {
            compression: CompressionType::fast(),
            row_group_size: 50_000,
            data_page_size: 512 * 1024,
            write_statistics: false,
            dictionary_page_size_limit: 512 * 1024,
            ..Self::default()
        }
    }

    /// Balanced configuration (default)
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Create writer properties from this configuration
    pub(super) fn to_writer_properties(
        &self,
        metadata: &HashMap<String, String>,
    ) -> WriterProperties {
        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        let mut builder = WriterProperties::builder()
            .set_compression(self.compression.to_parquet())
            .set_data_page_size_limit(self.data_page_size)
            .set_dictionary_page_size_limit(self.dictionary_page_size_limit)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size.max(1));

        // Names and places repeat heavily across users; dictionary + RLE pays off
        let dict_columns = [
            columns::FIRSTNAME,
            columns::LASTNAME,
            columns::COUNTRY,
            columns::CITY,
        ];
        for col in dict_columns {
            let path = ColumnPath::new(vec![col.to_string()]);
            builder = builder.set_column_dictionary_enabled(path, true);
        }

        // Effectively unique per record
        let unique_columns = [
            columns::ID,
            columns::EMAIL,
            columns::USERNAME,
            columns::PASSWORD,
            columns::PHONENUMBER,
        ];
        for col in unique_columns {
            let path = ColumnPath::new(vec![col.to_string()]);
            builder = builder.set_column_dictionary_enabled(path, false);
        }

        let mut kv_metadata: Vec<KeyValue> = metadata
            .iter()
            .map(|(k, v)| KeyValue {
                key: k.clone(),
                value: Some(v.clone()),
            })
            .collect();
        kv_metadata.sort_by(|a, b| a.key.cmp(&b.key));

        builder = builder.set_key_value_metadata(Some(kv_metadata));

        builder.build()
    }
}

/// Layout of the JSON document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonOrient {
    /// `{"column": {"0": value, "1": value, ...}, ...}` with timestamps as
    /// epoch milliseconds
    #[default]
    Columns,
    /// `[{"id": ..., "created_at": "...", ...}, ...]` with timestamps as text
    Records,
}

/// Settings for every built-in codec, used to assemble the standard registry
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Parquet writer settings
    pub parquet: ParquetConfig,
    /// Field delimiter for both CSV variants
    pub delimiter: u8,
    /// Gzip level for the compressed CSV (0-9)
    pub gzip_level: u32,
    /// JSON document layout
    pub json_orient: JsonOrient,
    /// Indent the JSON document
    pub json_pretty: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            parquet: ParquetConfig::default(),
            delimiter: b',',
            gzip_level: 6,
            json_orient: JsonOrient::default(),
            json_pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::KEY_FORMAT_VERSION;

    #[test]
    fn test_presets() {
        assert_eq!(ParquetConfig::default().compression, CompressionType::Snappy);
        assert_eq!(ParquetConfig::fast().compression, CompressionType::Uncompressed);
        assert_eq!(ParquetConfig::max_compression().compression, CompressionType::Zstd(19));
        assert_eq!(ParquetConfig::balanced().row_group_size, 100_000);
    }

    #[test]
    fn test_writer_properties() {
        let mut metadata = HashMap::new();
        metadata.insert(KEY_FORMAT_VERSION.to_string(), "1.0.0".to_string());

        let props = ParquetConfig::default().to_writer_properties(&metadata);
        let kv = props.key_value_metadata().unwrap();
        assert_eq!(kv.len(), 1);
        assert_eq!(kv[0].key, KEY_FORMAT_VERSION);

        let city = ColumnPath::new(vec![columns::CITY.to_string()]);
        let id = ColumnPath::new(vec![columns::ID.to_string()]);
        assert!(props.dictionary_enabled(&city));
        assert!(!props.dictionary_enabled(&id));
        assert_eq!(props.compression(&id), Compression::SNAPPY);
    }
}
