use core::f32::consts::PI;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trigon::{
    atan2, cos, div_fix, mul_fix, rotate_vector, sin, vector_length, Vector,
};

fn atan2_bench(c: &mut Criterion) {
    let xi = 10 << 16;
    let xf = xi as f32;

    let yi = -26_328 << 16;
    let yf = yi as f32;

    c.bench_function("atan2(x, y)", |b| {
        b.iter(|| atan2(black_box(xi), black_box(yi)))
    });
    c.bench_function("y.atan2(x)", |b| {
        b.iter(|| black_box(yf).atan2(black_box(xf)))
    });
}

fn cos_sin_bench(c: &mut Criterion) {
    let zi = -(137 << 16) - 0x2531;
    let zf = zi as f32 / (1 << 16) as f32 * PI / 180.;
    c.bench_function("cos(zi)", |b| b.iter(|| cos(black_box(zi))));
    c.bench_function("sin(zi)", |b| b.iter(|| sin(black_box(zi))));
    c.bench_function("zf.sin_cos()", |b| b.iter(|| black_box(zf).sin_cos()));
}

fn vector_bench(c: &mut Criterion) {
    let v = Vector::new(3 << 16, -(4 << 16));
    c.bench_function("vector_length(v)", |b| {
        b.iter(|| vector_length(black_box(v)))
    });
    c.bench_function("rotate_vector(v, 33)", |b| {
        b.iter(|| rotate_vector(black_box(v), black_box(33 << 16)))
    });
}

fn fixed_bench(c: &mut Criterion) {
    c.bench_function("mul_fix(a, b)", |b| {
        b.iter(|| mul_fix(black_box(-0x12_3456), black_box(0x1_8000)))
    });
    c.bench_function("div_fix(a, b)", |b| {
        b.iter(|| div_fix(black_box(-0x12_3456), black_box(0x1_8000)))
    });
}

criterion_group!(trig, atan2_bench, cos_sin_bench);
criterion_group!(vector, vector_bench, fixed_bench);
criterion_main!(trig, vector);
