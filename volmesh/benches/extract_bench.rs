//! Criterion benchmarks for volmesh extraction and sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use volmesh::{
    Calibration, ExtractionOptions, GridDims, ImageStack, IsosurfaceExtractor, Point3,
    ScanSchedule, Volume,
};

/// Gray volume holding a soft ball in the middle third.
fn make_ball_volume(n: u32) -> Volume {
    let c = Point3::splat(n as f32 / 2.0);
    let r = n as f32 / 6.0;
    let stack = ImageStack::gray_from_fn(GridDims::new(n, n, n), |x, y, z| {
        let d = (Point3::new(x as f32, y as f32, z as f32) - c).length();
        (255.0 * (1.0 - (d - r).clamp(0.0, 4.0) / 4.0)) as u8
    })
    .unwrap();
    Volume::new(stack)
}

/// RGB volume read through the composited loader.
fn make_rgb_volume(n: u32) -> Volume {
    let stack = ImageStack::rgb_from_fn(GridDims::new(n, n, n), |x, y, z| {
        [(x * 7) as u8, (y * 5) as u8, (z * 3) as u8]
    })
    .unwrap();
    Volume::new(stack)
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for n in [32u32, 64] {
        let volume = make_ball_volume(n);
        let cells = ((n + 2) * (n + 2) * (n + 2)) as u64;
        group.throughput(Throughput::Elements(cells));

        group.bench_with_input(BenchmarkId::new("sequential", n), &volume, |b, volume| {
            let mut extractor = IsosurfaceExtractor::with_options(ExtractionOptions {
                parallel: false,
                ..Default::default()
            });
            b.iter(|| black_box(extractor.extract_volume(volume, 127.0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &volume, |b, volume| {
            let mut extractor = IsosurfaceExtractor::new();
            b.iter(|| black_box(extractor.extract_volume(volume, 127.0).unwrap()))
        });

        let schedule = ScanSchedule::from_occupancy(&volume, 127.0);
        group.bench_with_input(BenchmarkId::new("scheduled", n), &volume, |b, volume| {
            let mut extractor = IsosurfaceExtractor::new();
            b.iter(|| {
                black_box(
                    extractor
                        .extract_scheduled(volume, &Calibration::unit(), 127.0, &schedule)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let volume = make_ball_volume(64);
    c.bench_function("schedule_from_occupancy_64", |b| {
        b.iter(|| black_box(ScanSchedule::from_occupancy(&volume, black_box(127.0))))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let n = 32;
    group.throughput(Throughput::Elements((n * n * n) as u64));

    let gray = make_ball_volume(n);
    group.bench_function("gray_plain", |b| b.iter(|| black_box(sum_intensity(&gray, n))));

    let rgb = make_rgb_volume(n);
    group.bench_function("rgb_composited", |b| b.iter(|| black_box(sum_color(&rgb, n))));

    let mut saturated = make_rgb_volume(n);
    saturated.set_saturated_rendering(true);
    group.bench_function("rgb_saturated", |b| b.iter(|| black_box(sum_color(&saturated, n))));

    group.finish();
}

fn sum_intensity(volume: &Volume, n: u32) -> i64 {
    let n = n as i32;
    let mut sum = 0i64;
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                sum += i64::from(volume.intensity(x, y, z));
            }
        }
    }
    sum
}

fn sum_color(volume: &Volume, n: u32) -> u64 {
    let n = n as i32;
    let mut sum = 0u64;
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                sum = sum.wrapping_add(u64::from(volume.color(x, y, z)));
            }
        }
    }
    sum
}

criterion_group!(benches, bench_extraction, bench_schedule, bench_sampling);
criterion_main!(benches);
