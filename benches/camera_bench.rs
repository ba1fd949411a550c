use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbit_camera::{MatrixStack, OrbitCamera, ViewUniform};

fn placed_camera() -> OrbitCamera {
    let mut cam = OrbitCamera::new();
    cam.reset_view(200.0, 50.0, 80.0, 25.0, 0.0);
    cam
}

fn rotation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");
    let mut cam = placed_camera();
    group.bench_function("rotate_up", |b| {
        b.iter(|| cam.rotate_up(black_box(0.5)));
    });
    let mut cam = placed_camera();
    group.bench_function("rotate_right", |b| {
        b.iter(|| cam.rotate_right(black_box(0.5)));
    });
    let mut cam = placed_camera();
    group.bench_function("rotate_right_flat", |b| {
        b.iter(|| cam.rotate_right_flat(black_box(0.5)));
    });
    group.finish();
}

fn export_benchmark(c: &mut Criterion) {
    let mut cam = placed_camera();
    cam.pan(12.0, -4.0);

    c.bench_function("export_view_transform", |b| {
        b.iter(|| black_box(cam.export_view_transform()));
    });
    c.bench_function("apply_view_matrix_stack", |b| {
        b.iter(|| {
            let mut stack = MatrixStack::new();
            cam.apply_view(&mut stack);
            black_box(stack.current())
        });
    });
    c.bench_function("view_uniform", |b| {
        b.iter(|| black_box(ViewUniform::from(&cam)));
    });
}

criterion_group!(benches, rotation_benchmark, export_benchmark);
criterion_main!(benches);
