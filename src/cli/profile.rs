//! Write profiles for common use cases.
//!
//! Profiles preset the Parquet writer and the gzip level, hiding low-level
//! settings from end users.

use std::fmt;

use userformats::codec::ParquetConfig;

/// Write profiles for common use cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Profile {
    /// Prioritize write speed over size.
    ///
    /// - Parquet: uncompressed, 50,000-record row groups, no statistics
    /// - Gzip level 1
    Fast,

    /// Sizes comparable to common tooling defaults (default).
    ///
    /// - Parquet: Snappy, 100,000-record row groups
    /// - Gzip level 6
    #[default]
    Balanced,

    /// Smallest artifacts, slower writes.
    ///
    /// - Parquet: ZSTD level 19, 500,000-record row groups
    /// - Gzip level 9
    MaxCompression,
}

impl Profile {
    /// Returns the Parquet writer settings for this profile.
    pub fn parquet_config(&self) -> ParquetConfig {
        match self {
            Profile::Fast => ParquetConfig::fast(),
            Profile::Balanced => ParquetConfig::balanced(),
            Profile::MaxCompression => ParquetConfig::max_compression(),
        }
    }

    /// Returns the gzip level used for `csv.gz`.
    pub fn gzip_level(&self) -> u32 {
        match self {
            Profile::Fast => 1,
            Profile::Balanced => 6,
            Profile::MaxCompression => 9,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Fast => write!(f, "fast"),
            Profile::Balanced => write!(f, "balanced"),
            Profile::MaxCompression => write!(f, "max-compression"),
        }
    }
}
