use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use galsim_angle::{angles_from_values, parse_angle, parse_unit, wrap_all, DEGREES, RADIANS};

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    group.bench_function("in_range", |b| {
        let theta = 1.0 * RADIANS;
        b.iter(|| black_box(black_box(theta).wrap()));
    });

    group.bench_function("large", |b| {
        let theta = 12345.6789 * DEGREES;
        b.iter(|| black_box(black_box(theta).wrap()));
    });

    let values: Vec<f64> = (0..1000).map(|i| i as f64 * 7.3).collect();
    group.bench_with_input(BenchmarkId::new("wrap_all", "1000"), &values, |b, values| {
        b.iter(|| {
            let mut angles = angles_from_values(values, DEGREES);
            wrap_all(&mut angles);
            black_box(angles)
        });
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for name in ["rad", "  Degrees ", "arcsec", "furlongs"] {
        group.bench_with_input(BenchmarkId::new("parse_unit", name.trim()), &name, |b, input| {
            b.iter(|| parse_unit(black_box(input)));
        });
    }

    group.bench_function("parse_angle", |b| {
        b.iter(|| parse_angle(black_box("13.4 hours")));
    });

    group.finish();
}

criterion_group!(benches, bench_wrap, bench_parsing);
criterion_main!(benches);
