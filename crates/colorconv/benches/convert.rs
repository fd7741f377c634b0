use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorconv::{hsl_to_rgb, parse_hex_string, rgb_to_hsl, BasicColor, Hex};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("parse-hex", |b| {
        b.iter(|| parse_hex_string(black_box("#bada55")))
    });

    group.bench_function("rgb-to-hsl", |b| {
        b.iter(|| rgb_to_hsl(black_box(186.0), black_box(218.0), black_box(85.0)))
    });

    group.bench_function("hsl-to-rgb", |b| {
        b.iter(|| hsl_to_rgb(black_box(74.0), black_box(64.0), black_box(59.0)))
    });

    group.bench_function("hex-round-trip", |b| {
        b.iter(|| {
            black_box("#bada55")
                .parse::<Hex>()
                .map(|hex| hex.to_hsl().to_hex())
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
