//! Criterion benchmarks for the INI codec and reconciler.
//!
//! Run with:
//! ```bash
//! cargo bench --package spicecfg-core --bench ini_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spicecfg_core::{
    parse_document, reconcile, serialize_document, synthesize, IniDocument, Overrides, Schema,
};

fn full_config_text() -> String {
    let doc = synthesize(&Schema::canonical(), &Overrides::new());
    serialize_document(&doc).unwrap_or_default()
}

fn bench_parse(c: &mut Criterion) {
    let text = full_config_text();
    c.bench_function("parse_full_config", |b| {
        b.iter(|| parse_document(black_box(&text)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let doc = synthesize(&Schema::canonical(), &Overrides::new());
    c.bench_function("serialize_full_config", |b| {
        b.iter(|| serialize_document(black_box(&doc)))
    });
}

fn bench_reconcile(c: &mut Criterion) {
    let schema = Schema::canonical();
    let mut group = c.benchmark_group("reconcile");

    group.bench_function("empty_document", |b| {
        b.iter(|| {
            let mut doc = IniDocument::new();
            reconcile(black_box(&mut doc), &schema)
        })
    });

    let complete = synthesize(&schema, &Overrides::new());
    group.bench_function("complete_document", |b| {
        b.iter(|| {
            let mut doc = complete.clone();
            reconcile(black_box(&mut doc), &schema)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_reconcile);
criterion_main!(benches);
