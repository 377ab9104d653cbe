//! # userformats - Storage Footprint of Tabular Formats
//!
//! `userformats` synthesizes a table of fake user records, writes it through
//! several interchangeable serialization formats and reports how large each
//! artifact is on disk.
//!
//! ## Key Features
//!
//! - **One Codec Interface**: Parquet, CSV, gzip-compressed CSV and JSON all
//!   implement [`codec::Codec`], so any of them can write and read back the
//!   same [`dataset::Dataset`].
//!
//! - **Atomic Artifacts**: every write goes to a temporary sibling file that is
//!   renamed into place, so a failed write never leaves a partial artifact.
//!
//! - **Fixed, Typed Schema**: records are a plain struct; the Arrow schema is
//!   used for the columnar format and to validate untyped input.
//!
//! - **Pluggable Events**: the pipeline reports progress to an injected
//!   [`events::EventSink`] instead of logging from deep inside.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use userformats::prelude::*;
//!
//! let mut generator = RecordGenerator::new(RandomValueSource::from_entropy());
//! let dataset = generator.generate(10_000)?;
//!
//! let pipeline = Pipeline::new(FormatRegistry::standard(), ArtifactLayout::new("data"));
//! pipeline.write_all(&dataset)?;
//!
//! let report = pipeline.measure()?;
//! for entry in &report.entries {
//!     println!("{}: {:.2} MiB", entry.format, entry.size_mib());
//! }
//! # Ok::<(), userformats::pipeline::PipelineError>(())
//! ```
//!
//! This creates:
//! ```text
//! data/
//! ├── data.parquet   # columnar-binary
//! ├── data.csv       # delimited-text
//! ├── data.csv.gz    # compressed-delimited-text
//! └── data.json      # row-oriented-text
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: column names and the Arrow schema of the user table
//! - [`dataset`]: records and their Arrow conversion
//! - [`generator`]: random record generation behind a [`generator::ValueSource`]
//! - [`codec`]: the four artifact formats
//! - [`registry`]: identifier → codec mapping, in a fixed order
//! - [`report`]: on-disk size measurement
//! - [`events`]: lifecycle events and sinks
//! - [`pipeline`]: generate, write, measure
//!
//! ## Schema
//!
//! | Column | Type |
//! |--------|------|
//! | id | Utf8 (UUID v4) |
//! | created_at | Timestamp(µs) |
//! | updated_at | Timestamp(µs) |
//! | firstname | Utf8 |
//! | lastname | Utf8 |
//! | birthday | Timestamp(µs) |
//! | email | Utf8 |
//! | username | Utf8 |
//! | password | Utf8 |
//! | phonenumber | Utf8 |
//! | country | Utf8 |
//! | city | Utf8 |

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod dataset;
pub mod events;
pub mod generator;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod schema;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::codec::{
        Codec, CodecError, CodecOptions, CompressionType, DelimitedCodec, EncodeStats, FormatKind,
        JsonCodec, JsonOrient, ParquetCodec, ParquetConfig,
    };
    pub use crate::dataset::{Dataset, Record};
    pub use crate::events::{EventSink, LogSink, NullSink, PipelineEvent, RecordingSink};
    pub use crate::generator::{GeneratorError, RandomValueSource, RecordGenerator, ValueSource};
    pub use crate::pipeline::{ArtifactLayout, Pipeline, PipelineError, PipelineSummary};
    pub use crate::registry::{FormatDescriptor, FormatRegistry, RegistryError};
    pub use crate::report::{FormatSize, SizeReport, SizeReporter};
    pub use crate::schema::{columns, create_user_schema, SchemaMismatch};
}
