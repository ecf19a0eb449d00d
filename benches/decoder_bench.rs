//! Performance benchmarks for the AWID decoder.
//!
//! The decoder runs once per tag presentation, so absolute speed hardly
//! matters; these benchmarks exist to catch accidental allocation or
//! quadratic behaviour on long lines.
//!
//! # Run Benchmarks
//!
//! ```sh
//! cargo bench --bench decoder_bench
//!
//! # Compare against a saved baseline
//! cargo bench --bench decoder_bench -- --save-baseline main
//! cargo bench --bench decoder_bench -- --baseline main
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wedge_core::ReadMode;
use wedge_rfid::{awid, process_frame};

/// Benchmark decoding of valid and rejected frames.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("awid_decode");
    group.throughput(Throughput::Elements(1));

    let long_line = format!("0400006001{}", "F".repeat(4096));
    let test_cases = vec![
        ("typical", "0400006001"),
        ("all_ones", "FFFFFFFFFF"),
        ("long_trailer", long_line.as_str()),
        ("too_short", "04000"),
        ("invalid_hex", "04000G6001"),
    ];

    for (name, line) in test_cases {
        group.bench_with_input(BenchmarkId::new("decode", name), &line, |b, &line| {
            b.iter(|| black_box(awid::decode(black_box(line))));
        });
    }

    group.finish();
}

/// Benchmark mode dispatch including the string formatting of the result.
fn bench_process_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_frame");
    group.throughput(Throughput::Elements(1));

    for mode in [ReadMode::Awid, ReadMode::Raw] {
        group.bench_with_input(
            BenchmarkId::new("mode", mode.to_string()),
            &mode,
            |b, &mode| {
                b.iter(|| black_box(process_frame(mode, black_box("1234ABCDEF"))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_process_frame);
criterion_main!(benches);
