use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{
    hex::{intersection, line_into, range, range_into, ring},
    CubeCoord, Layout, LayoutConfig, Point2,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions");
    let center = CubeCoord::new_xy(12, -30);
    let far = CubeCoord::new_xy(-80, 35);

    group.bench_function("range r=50", |b| {
        b.iter(|| range(black_box(center), black_box(50)))
    });
    group.bench_function("range_into r=50 (reused buffer)", |b| {
        let mut store = Vec::new();
        b.iter(|| {
            store.clear();
            range_into(black_box(center), black_box(50), &mut store).len()
        })
    });
    group.bench_function("intersection r=40", |b| {
        b.iter(|| {
            intersection(
                black_box(center),
                40,
                black_box(CubeCoord::new_xy(40, -50)),
                40,
            )
        })
    });
    group.bench_function("ring r=100", |b| {
        b.iter(|| ring(black_box(center), black_box(100)))
    });
    group.bench_function("line", |b| {
        let mut store = Vec::new();
        b.iter(|| {
            store.clear();
            line_into(black_box(center), black_box(far), &mut store).len()
        })
    });
    group.finish();

    let mut group = c.benchmark_group("pixels");
    let layout = Layout::new(LayoutConfig::default()).unwrap();
    group.bench_function("pixel_to_hex", |b| {
        b.iter(|| layout.pixel_to_hex(black_box(Point2::new(123.4, -56.7))))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
