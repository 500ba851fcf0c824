//! Benchmarks for gradient rendering.
//!
//! Run with: cargo bench --bench render

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use luminance_gradient::{BlueMode, BorderMode, ChannelOrder, GradientField, GradientParams};
use ndarray::Array3;

const WIDTH: usize = 1280;
const HEIGHT: usize = 720;

/// BGR test image with gradients in both directions.
fn test_image() -> Array3<u8> {
    let mut img = Array3::<u8>::zeros((HEIGHT, WIDTH, 3));
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let v = ((x * 7 + y * 13) % 256) as u8;
            img[[y, x, 0]] = v;
            img[[y, x, 1]] = v.wrapping_mul(3);
            img[[y, x, 2]] = 255 - v;
        }
    }
    img
}

fn bench_field(c: &mut Criterion) {
    let image = test_image();

    c.bench_function("gradient_field_720p", |b| {
        b.iter(|| {
            black_box(GradientField::from_image(
                black_box(image.view()),
                ChannelOrder::Bgr,
                BorderMode::Reflect101,
            ))
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let image = test_image();
    let field = GradientField::from_image(image.view(), ChannelOrder::Bgr, BorderMode::Reflect101)
        .expect("3-channel image");

    for mode in BlueMode::ALL {
        let params = GradientParams::default().with_blue_mode(mode);
        c.bench_function(&format!("render_720p_{mode}"), |b| {
            b.iter(|| black_box(field.render(black_box(&params))));
        });
    }

    let params = GradientParams::default().with_equalize(true);
    c.bench_function("render_720p_equalize", |b| {
        b.iter(|| black_box(field.render(black_box(&params))));
    });
}

criterion_group!(benches, bench_field, bench_render);
criterion_main!(benches);
