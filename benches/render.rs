//! Benchmarks for the formatting pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::{estimate_reading_time, parse_document, render_document, render_html};

const SAMPLE: &str = include_str!("../tests/fixtures/sample.md");

/// Repeat the fixture into a long-article workload.
fn long_article() -> String {
    let mut out = String::new();
    for _ in 0..50 {
        out.push_str(SAMPLE);
        out.push_str("\n\n");
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let long = long_article();
    c.bench_function("parse_document", |b| {
        b.iter(|| parse_document(&long));
    });
}

fn bench_render(c: &mut Criterion) {
    let long = long_article();
    let doc = parse_document(&long);
    c.bench_function("render_document", |b| {
        b.iter(|| render_document(&doc));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let long = long_article();
    c.bench_function("render_html", |b| {
        b.iter(|| render_html(&long));
    });
}

fn bench_reading_time(c: &mut Criterion) {
    let long = long_article();
    c.bench_function("estimate_reading_time", |b| {
        b.iter(|| estimate_reading_time(&long));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_render,
    bench_full_pipeline,
    bench_reading_time
);
criterion_main!(benches);
