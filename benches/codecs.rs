use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use userformats::dataset::Dataset;
use userformats::generator::{RandomValueSource, RecordGenerator};
use userformats::registry::FormatRegistry;

fn sample(rows: i64) -> Dataset {
    RecordGenerator::new(RandomValueSource::seeded(1))
        .generate(rows)
        .expect("generation failed")
}

/// Benchmark record generation throughput
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for rows in [1_000i64, 10_000] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut generator = RecordGenerator::new(RandomValueSource::seeded(2));
            b.iter(|| generator.generate(rows).expect("generation failed"));
        });
    }

    group.finish();
}

/// Benchmark encoding the same dataset with every format
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let registry = FormatRegistry::standard();
    let rows = 10_000;
    let dataset = sample(rows);
    let temp_dir = TempDir::new().expect("temp dir");

    group.throughput(Throughput::Elements(rows as u64));
    for (descriptor, codec) in registry.iter() {
        let path = temp_dir.path().join(&descriptor.file_name);
        group.bench_function(BenchmarkId::from_parameter(&descriptor.identifier), |b| {
            b.iter(|| codec.encode(&dataset, &path).expect("encode failed"));
        });
    }

    group.finish();
}

/// Benchmark decoding an artifact of every format
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let registry = FormatRegistry::standard();
    let rows = 10_000;
    let dataset = sample(rows);
    let temp_dir = TempDir::new().expect("temp dir");

    group.throughput(Throughput::Elements(rows as u64));
    for (descriptor, codec) in registry.iter() {
        let path = temp_dir.path().join(&descriptor.file_name);
        codec.encode(&dataset, &path).expect("encode failed");
        group.bench_function(BenchmarkId::from_parameter(&descriptor.identifier), |b| {
            b.iter(|| codec.decode(&path).expect("decode failed"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_encode, bench_decode);
criterion_main!(benches);
