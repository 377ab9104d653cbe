//! # Pipeline
//!
//! Wires generation, one encode per selected format, and measurement:
//!
//! ```text
//! RecordGenerator ──► Dataset ──┬──► ParquetCodec   ──► data.parquet ─┐
//!                               ├──► DelimitedCodec ──► data.csv      ├──► SizeReporter
//!                               ├──► DelimitedCodec ──► data.csv.gz   │
//!                               └──► JsonCodec      ──► data.json    ─┘
//! ```
//!
//! The dataset is generated once and borrowed by every codec. Each codec
//! writes its own path, so with the `parallel` feature the encodes run
//! concurrently; results are still returned in registry order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use userformats::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::new(FormatRegistry::standard(), ArtifactLayout::new("data"));
//! let mut generator = RecordGenerator::new(RandomValueSource::from_entropy());
//!
//! let summary = pipeline.run(&mut generator, 1_000)?;
//! println!("{}", summary.report);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::codec::{Codec, CodecError, EncodeStats};
use crate::dataset::Dataset;
use crate::events::{EventSink, LogSink, PipelineEvent};
use crate::generator::{GeneratorError, RecordGenerator, ValueSource};
use crate::registry::{FormatDescriptor, FormatRegistry, RegistryError};
use crate::report::{SizeReport, SizeReporter};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Location of the artifacts on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    data_dir: PathBuf,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl ArtifactLayout {
    /// Place artifacts in `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the artifacts
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `<data_dir>/<file_name>`
    pub fn artifact_path(&self, descriptor: &FormatDescriptor) -> PathBuf {
        self.data_dir.join(&descriptor.file_name)
    }

    /// Create the data directory and its parents if missing
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }
}

/// Errors that can occur while running the pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Record generation failed
    #[error("Generation error: {0}")]
    Generator(#[from] GeneratorError),

    /// Encoding or decoding an artifact failed
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Format lookup failed
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Filesystem error outside a codec
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result of writing one format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Format identifier
    pub format: String,
    /// Artifact path
    pub path: PathBuf,
    /// Encode statistics
    pub stats: EncodeStats,
}

/// Everything a full run produced
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    /// Number of generated records
    pub rows: usize,
    /// One outcome per written format, in registry order
    pub writes: Vec<WriteOutcome>,
    /// Sizes measured after all writes
    pub report: SizeReport,
}

/// Generate → encode each format → measure
pub struct Pipeline {
    registry: FormatRegistry,
    layout: ArtifactLayout,
    sink: Arc<dyn EventSink>,
}

impl Pipeline {
    /// Create a pipeline that reports events through [`LogSink`]
    pub fn new(registry: FormatRegistry, layout: ArtifactLayout) -> Self {
        Self {
            registry,
            layout,
            sink: Arc::new(LogSink),
        }
    }

    /// Replace the event sink
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Registered formats
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Artifact layout
    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Generate `count` records
    pub fn generate<S: ValueSource>(
        &self,
        generator: &mut RecordGenerator<S>,
        count: i64,
    ) -> Result<Dataset, PipelineError> {
        self.sink.emit(&PipelineEvent::GenerationStarted { count });
        let dataset = generator.generate(count)?;
        self.sink.emit(&PipelineEvent::GenerationFinished {
            count: dataset.len(),
        });
        Ok(dataset)
    }

    /// Write `dataset` with every registered format.
    ///
    /// Creates the data directory first. Stops at the first failing format;
    /// artifacts already committed stay on disk.
    pub fn write_all(&self, dataset: &Dataset) -> Result<Vec<WriteOutcome>, PipelineError> {
        self.layout.ensure_dir()?;
        let entries: Vec<(&FormatDescriptor, &dyn Codec)> = self.registry.iter().collect();

        #[cfg(feature = "parallel")]
        let outcomes = entries
            .into_par_iter()
            .map(|(descriptor, codec)| self.write_one(descriptor, codec, dataset))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let outcomes = entries
            .into_iter()
            .map(|(descriptor, codec)| self.write_one(descriptor, codec, dataset))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(outcomes)
    }

    /// Write `dataset` with a single format
    pub fn write_format(
        &self,
        format: &str,
        dataset: &Dataset,
    ) -> Result<WriteOutcome, PipelineError> {
        let (codec, descriptor) = self.registry.resolve(format)?;
        self.layout.ensure_dir()?;
        self.write_one(descriptor, codec, dataset)
    }

    /// Measure the artifacts currently on disk
    pub fn measure(&self) -> Result<SizeReport, PipelineError> {
        let reporter = SizeReporter::new(self.layout.clone());
        Ok(reporter.measure(&self.registry)?)
    }

    /// Decode the artifact of one format
    pub fn read(&self, format: &str) -> Result<Dataset, PipelineError> {
        let (codec, descriptor) = self.registry.resolve(format)?;
        let path = self.layout.artifact_path(descriptor);
        self.sink.emit(&PipelineEvent::ReadStarted {
            format: descriptor.identifier.clone(),
            path: path.clone(),
        });

        let dataset = codec.decode(&path)?;

        self.sink.emit(&PipelineEvent::ReadFinished {
            format: descriptor.identifier.clone(),
            path,
            rows: dataset.len(),
        });
        Ok(dataset)
    }

    /// Generate `count` records, write every format and measure the result
    pub fn run<S: ValueSource>(
        &self,
        generator: &mut RecordGenerator<S>,
        count: i64,
    ) -> Result<PipelineSummary, PipelineError> {
        let dataset = self.generate(generator, count)?;
        let writes = self.write_all(&dataset)?;
        let report = self.measure()?;

        Ok(PipelineSummary {
            rows: dataset.len(),
            writes,
            report,
        })
    }

    fn write_one(
        &self,
        descriptor: &FormatDescriptor,
        codec: &dyn Codec,
        dataset: &Dataset,
    ) -> Result<WriteOutcome, PipelineError> {
        let path = self.layout.artifact_path(descriptor);
        self.sink.emit(&PipelineEvent::WriteStarted {
            format: descriptor.identifier.clone(),
            path: path.clone(),
        });

        let stats = codec.encode(dataset, &path)?;

        self.sink.emit(&PipelineEvent::WriteFinished {
            format: descriptor.identifier.clone(),
            path: path.clone(),
            bytes: stats.bytes_written,
        });

        Ok(WriteOutcome {
            format: descriptor.identifier.clone(),
            path,
            stats,
        })
    }
}
