//! Benchmarks for extraction and binning
//!
//! Run with: cargo bench

use corpus_hist::analysis::Histogram;
use corpus_hist::extract;
use corpus_hist::{AccessorExpression, Dataset, ExtractedValue, Scalar};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::path::Path;

fn sample_document(i: usize) -> serde_json::Value {
    serde_json::json!({
        "id": i,
        "s": [
            { "c": (i as f64).sin(), "samples": (0..32).collect::<Vec<_>>() },
            { "c": (i as f64).cos() }
        ],
        "meta": { "seed": i * 7, "host": "bench" }
    })
}

fn bench_accessor_parse(c: &mut Criterion) {
    c.bench_function("accessor_parse", |b| {
        b.iter(|| AccessorExpression::parse(black_box("['s'][0]['c']")).unwrap());
    });
}

fn bench_extract(c: &mut Criterion) {
    let expr = AccessorExpression::parse("['s'][1]['c']").unwrap();
    let docs: Vec<_> = (0..1000).map(sample_document).collect();
    let path = Path::new("bench.json");

    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Elements(docs.len() as u64));
    group.bench_function("apply_1000", |b| {
        b.iter(|| {
            for doc in &docs {
                black_box(extract::apply(doc, &expr, path).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [1000, 10_000, 100_000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| ((i * 7919) % 1000) as f64 / 10.0).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("compute_30", size), &values, |b, values| {
            b.iter(|| Histogram::compute(black_box(values), 30));
        });
    }

    group.finish();
}

fn bench_dataset_numeric(c: &mut Criterion) {
    let mut dataset = Dataset::new();
    for i in 0..10_000 {
        dataset.append(ExtractedValue::new(
            Scalar::Number(i as f64),
            format!("out/{i}.json"),
        ));
    }

    c.bench_function("dataset_numeric_10k", |b| {
        b.iter(|| black_box(dataset.numeric_values().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_accessor_parse,
    bench_extract,
    bench_histogram,
    bench_dataset_numeric
);
criterion_main!(benches);
