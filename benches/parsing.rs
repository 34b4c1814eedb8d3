use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::Path;

use tracemail::parser::eml::{load_message, parse_message};
use tracemail::trace::{delay, route};

fn fixture_bytes() -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("relayed.eml");
    std::fs::read(path).unwrap()
}

fn bench_extract_received(c: &mut Criterion) {
    let data = fixture_bytes();

    c.bench_function("extract_received_relayed", |b| {
        b.iter(|| parse_message(black_box(&data)).received_entries())
    });
}

fn bench_route_and_delays(c: &mut Criterion) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("relayed.eml");
    let entries = load_message(&path).unwrap().received_entries();

    c.bench_function("reconstruct_route_relayed", |b| {
        b.iter(|| route::reconstruct_route(black_box(&entries)))
    });
    c.bench_function("compute_delays_relayed", |b| {
        b.iter(|| delay::compute_delays(black_box(&entries)))
    });
}

criterion_group!(benches, bench_extract_received, bench_route_and_delays);
criterion_main!(benches);
