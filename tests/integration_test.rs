//! Integration tests for userformats
//!
//! These tests drive the public API from generation through writing, reading
//! and measuring.

use std::fs;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use tempfile::tempdir;
use userformats::prelude::*;

fn generator(seed: u64) -> RecordGenerator<RandomValueSource> {
    RecordGenerator::new(RandomValueSource::seeded(seed))
}

/// Three users written as parquet and csv, measured in registry order
#[test]
fn test_parquet_and_csv_are_measured_in_order() {
    let dir = tempdir().unwrap();
    let layout = ArtifactLayout::new(dir.path());
    let registry = FormatRegistry::standard();

    let dataset = generator(1).generate(3).unwrap();
    assert_eq!(dataset.len(), 3);

    for format in ["csv", "parquet"] {
        let (codec, descriptor) = registry.resolve(format).unwrap();
        codec.encode(&dataset, &layout.artifact_path(descriptor)).unwrap();
    }

    let report = SizeReporter::new(layout).measure(&registry).unwrap();
    let formats: Vec<_> = report.entries.iter().map(|e| e.format.as_str()).collect();
    assert_eq!(formats, vec!["parquet", "csv"]);
    assert!(report.entries.iter().all(|e| e.bytes > 0));
}

/// Zero users still yield readable artifacts for every format
#[test]
fn test_zero_rows_every_format() {
    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new(FormatRegistry::standard(), ArtifactLayout::new(dir.path()));

    let summary = pipeline.run(&mut generator(2), 0).unwrap();
    assert_eq!(summary.rows, 0);
    assert_eq!(summary.report.len(), 4);

    for format in ["parquet", "csv", "csv.gz", "json"] {
        assert!(pipeline.read(format).unwrap().is_empty(), "{}", format);
    }
}

/// Full pipeline; every format decodes back to the generated users
#[test]
fn test_full_pipeline_round_trip() {
    let dir = tempdir().unwrap();
    let sink = Arc::new(RecordingSink::new());
    let layout = ArtifactLayout::new(dir.path().join("data"));
    let pipeline = Pipeline::new(FormatRegistry::standard(), layout).with_sink(sink.clone());

    let dataset = pipeline.generate(&mut generator(3), 200).unwrap();
    let writes = pipeline.write_all(&dataset).unwrap();
    assert_eq!(writes.len(), 4);

    for write in &writes {
        assert_eq!(write.stats.rows_written, 200);
        assert_eq!(fs::metadata(&write.path).unwrap().len(), write.stats.bytes_written);
        assert_eq!(pipeline.read(&write.format).unwrap(), dataset, "{}", write.format);
    }

    let report = pipeline.measure().unwrap();
    assert_eq!(report.total_bytes(), writes.iter().map(|w| w.stats.bytes_written).sum::<u64>());

    // One generation pair, then a write pair and a read pair per format
    let events = sink.events();
    assert_eq!(events.len(), 2 + 2 * 4 + 2 * 4);
    let reads = events
        .iter()
        .filter(|e| matches!(e, PipelineEvent::ReadFinished { rows: 200, .. }))
        .count();
    assert_eq!(reads, 4);
}

/// Unwritten formats are left out of the report
#[test]
fn test_measure_before_and_after_writes() {
    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new(FormatRegistry::standard(), ArtifactLayout::new(dir.path()));

    assert!(pipeline.measure().unwrap().is_empty());

    let dataset = generator(4).generate(10).unwrap();
    pipeline.write_format("json", &dataset).unwrap();

    let report = pipeline.measure().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.get("json").unwrap().file_name, "data.json");
    assert!(report.get("parquet").is_none());
}

/// Gzip makes the delimited text smaller
#[test]
fn test_compressed_csv_is_smaller() {
    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new(FormatRegistry::standard(), ArtifactLayout::new(dir.path()));
    let summary = pipeline.run(&mut generator(5), 1_000).unwrap();

    let csv = summary.report.get("csv").unwrap().bytes;
    let gz = summary.report.get("csv.gz").unwrap().bytes;
    assert!(gz < csv);
    assert!(summary.report.smallest().unwrap().bytes <= gz);
}

/// A table that is not the user table is rejected before anything is written
#[test]
fn test_foreign_batch_is_type_mismatch() {
    let dir = tempdir().unwrap();
    let layout = ArtifactLayout::new(dir.path());
    let registry = FormatRegistry::standard();

    let schema = Arc::new(Schema::new(vec![Field::new("name", DataType::Utf8, false)]));
    let names: ArrayRef = Arc::new(StringArray::from(vec!["a", "b"]));
    let batch = RecordBatch::try_new(schema, vec![names]).unwrap();

    for (descriptor, codec) in registry.iter() {
        let path = layout.artifact_path(descriptor);
        let err = codec.encode_batch(&batch, &path).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch(_)), "{}", descriptor.identifier);
        assert!(!path.exists());
    }
}

/// Reading a format that was never written
#[test]
fn test_decode_missing_artifact() {
    let dir = tempdir().unwrap();
    let registry = FormatRegistry::standard();
    let (codec, _) = registry.resolve("parquet").unwrap();

    let err = codec.decode(&dir.path().join("nothing.parquet")).unwrap_err();
    assert!(matches!(err, CodecError::NotFound(_)));
}

/// Negative counts and unknown formats
#[test]
fn test_invalid_requests() {
    let err = generator(6).generate(-1).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidArgument { count: -1 }));

    let err = FormatRegistry::standard().resolve("xml").unwrap_err();
    assert_eq!(err, RegistryError::UnknownFormat("xml".to_string()));
}

/// Custom codec options flow through the standard registry
#[test]
fn test_registry_with_options() {
    let dir = tempdir().unwrap();
    let options = CodecOptions {
        delimiter: b';',
        json_orient: JsonOrient::Records,
        ..CodecOptions::default()
    };
    let registry = FormatRegistry::with_options(&options);
    let pipeline =
        Pipeline::new(registry, ArtifactLayout::new(dir.path())).with_sink(Arc::new(NullSink));

    let dataset = generator(7).generate(4).unwrap();
    pipeline.write_all(&dataset).unwrap();

    let csv = fs::read_to_string(dir.path().join("data.csv")).unwrap();
    assert!(csv.starts_with("id;created_at;updated_at"));

    let bytes = fs::read(dir.path().join("data.json")).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
}
