//! Delimiter scanner benchmarks for `transclude_core`.
//!
//! Measures raw scanner throughput over lines of growing content length,
//! for ASCII and multi-byte content, plus the cost of rejecting a candidate
//! that never closes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use transclude_core::{scan_close, scan_open};

/// Build `{{<content>}} trailing text` with `n` repetitions of `unit`.
fn directive_line(unit: &str, n: usize) -> Vec<u8> {
    format!("{{{{{}}}}} trailing text", unit.repeat(n)).into_bytes()
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanners/open");

    for (name, unit) in [("ascii", "path/"), ("multibyte", "\u{e9}\u{20ac}\u{1f600}")] {
        for n in [1, 16, 256, 4096] {
            let line = directive_line(unit, n);
            group.throughput(Throughput::Bytes(line.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, n), &line, |b, line| {
                b.iter(|| black_box(scan_open(black_box(line), 0)));
            });
        }
    }

    group.finish();
}

fn bench_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanners/close");

    for n in [1, 16, 256, 4096] {
        let line = directive_line("fragment/", n);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| black_box(scan_close(black_box(line), 2)));
        });
    }

    group.finish();
}

fn bench_unterminated(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanners/unterminated");

    for n in [16, 256, 4096] {
        let mut line = b"{{".to_vec();
        line.resize(2 + n, b'x');
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| black_box(scan_open(black_box(line), 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_open, bench_close, bench_unterminated);
criterion_main!(benches);
