use criterion::{black_box, criterion_group, criterion_main, Criterion};

use georef::{Batch, Config, Georef, Point};

fn make_batch(size: usize) -> Point<Batch> {
    Point::from_batches(
        Batch::linspace(-180.0, 180.0, size),
        Batch::linspace(-90.0, 90.0, size),
        Batch::zeros(size),
    )
    .unwrap()
}

fn make_scalars(size: usize) -> Vec<Point<f64>> {
    let batch = make_batch(size);
    (0..size).map(|i| batch.get(i)).collect()
}

/// Full four-transform pipeline over one vectorized batch call per stage.
fn bench_pipeline_batch(c: &mut Criterion) {
    let georef = Georef::new(&Config::new(0.0, 0.0, 0.0, 0.75)).unwrap();
    let sizes = [10_000, 100_000, 1_000_000];
    for &size in &sizes {
        let points = make_batch(size);

        c.bench_function(&format!("pipeline_batch_{size}"), |b| {
            b.iter(|| {
                let mut points = points.clone();
                georef.geod2ecef(&mut points).ecef2topo(&mut points);
                georef.topo2ecef(&mut points).ecef2geod(&mut points);
                black_box(points)
            });
        });
    }
}

/// The same workload as a sequential loop of scalar transform calls.
fn bench_pipeline_scalar_loop(c: &mut Criterion) {
    let georef = Georef::new(&Config::new(0.0, 0.0, 0.0, 0.75)).unwrap();
    let sizes = [10_000, 100_000, 1_000_000];
    for &size in &sizes {
        let points = make_scalars(size);

        c.bench_function(&format!("pipeline_scalar_{size}"), |b| {
            b.iter(|| {
                let mut points = points.clone();
                for point in &mut points {
                    georef.geod2ecef(point).ecef2topo(point);
                    georef.topo2ecef(point).ecef2geod(point);
                }
                black_box(points)
            });
        });
    }
}

criterion_group!(benches, bench_pipeline_batch, bench_pipeline_scalar_loop);
criterion_main!(benches);
