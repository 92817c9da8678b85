//! Benchmarks for fault classification.
//!
//! The matcher sits on the hot path of every completed command, so a
//! full-catalog scan over a typical vendor message has to stay in the
//! microsecond range.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use sanctl_common::{FaultSignature, RawOutput, has_error, sp_not_available};

/// Clean success outputs that must scan the whole catalog and miss.
const CLEAN_OUTPUTS: &[&str] = &[
    "",
    "Operation completed successfully.",
    "Pool Name:  Pool4File\nPool ID:  0\nState:  Ready",
];

/// Outputs that hit early catalog entries.
const EARLY_HITS: &[&str] = &[
    "Error: the specified pool may not exist",
    "Error\nMessage\nEnd of data stream",
];

/// Outputs that hit late catalog entries.
const LATE_HITS: &[&str] = &[
    "0x31038016e",
    "The interface is not currently attached",
];

fn bench_full_catalog_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier/full_catalog_miss");
    for text in CLEAN_OUTPUTS {
        let short_name = if text.len() > 20 { &text[..20] } else { text };
        group.bench_with_input(BenchmarkId::new("out", short_name), text, |b, text| {
            let out = RawOutput::from(*text);
            b.iter(|| has_error(black_box(&out), &[]))
        });
    }
    group.finish();
}

fn bench_early_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier/early_hit");
    for text in EARLY_HITS {
        let short_name = if text.len() > 20 { &text[..20] } else { text };
        group.bench_with_input(BenchmarkId::new("out", short_name), text, |b, text| {
            let out = RawOutput::from(*text);
            b.iter(|| has_error(black_box(&out), &[]))
        });
    }
    group.finish();
}

fn bench_late_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier/late_hit");
    for text in LATE_HITS {
        let short_name = if text.len() > 20 { &text[..20] } else { text };
        group.bench_with_input(BenchmarkId::new("out", short_name), text, |b, text| {
            let out = RawOutput::from(*text);
            b.iter(|| has_error(black_box(&out), &[]))
        });
    }
    group.finish();
}

fn bench_single_signature(c: &mut Criterion) {
    let out = RawOutput::from("Error: cannot find the consistency group cg0");
    c.bench_function("classifier/single_signature", |b| {
        b.iter(|| has_error(black_box(&out), &[FaultSignature::CgNotFound]))
    });
}

fn bench_sp_not_available(c: &mut Criterion) {
    let out = RawOutput::from("A network error occurred while trying to connect: timeout");
    c.bench_function("classifier/sp_not_available", |b| {
        b.iter(|| sp_not_available(black_box(&out)))
    });
}

criterion_group!(
    benches,
    bench_full_catalog_miss,
    bench_early_hit,
    bench_late_hit,
    bench_single_signature,
    bench_sp_not_available,
);

criterion_main!(benches);
