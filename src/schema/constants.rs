/// Artifact layout version - follows semantic versioning
pub const USERFORMATS_FORMAT_VERSION: &str = "1.0.0";

/// Metadata key for format version in Parquet footer
pub const KEY_FORMAT_VERSION: &str = "userformats:format_version";

/// Metadata key for the number of records in Parquet footer
pub const KEY_ROW_COUNT: &str = "userformats:row_count";

/// Metadata key for the write timestamp in Parquet footer
pub const KEY_CREATED: &str = "userformats:created";

/// Metadata key for the writer software in Parquet footer
pub const KEY_WRITER_INFO: &str = "userformats:writer_info";

/// Text rendering of timestamps in CSV and record-oriented JSON
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
