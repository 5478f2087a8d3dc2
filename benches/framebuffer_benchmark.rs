#![allow(clippy::unwrap_used, missing_docs)]
//! Benchmark for pixel buffer operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::color::Color;
use softraster::framebuffer::PixelBuffer;
use softraster::output::PngEncoder;

fn buffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_clear");

    for (width, height) in [(800, 600), (1920, 1080), (3840, 2160)] {
        let mut buffer = PixelBuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    buffer.clear(black_box(Color::RED));
                });
            },
        );
    }

    group.finish();
}

fn buffer_set_pixel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_set_pixel");

    let mut buffer = PixelBuffer::new(800, 600).unwrap();

    group.bench_function("set_pixel_800x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..800 {
                    buffer.set_pixel(black_box(x), black_box(y), Color::CYAN).unwrap();
                }
            }
        });
    });

    group.finish();
}

fn png_encode_benchmark(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new(800, 600).unwrap();
    buffer.clear(Color::MAGENTA);

    c.bench_function("png_encode_800x600", |b| {
        b.iter(|| PngEncoder::to_bytes(black_box(&buffer)).unwrap());
    });
}

criterion_group!(
    benches,
    buffer_clear_benchmark,
    buffer_set_pixel_benchmark,
    png_encode_benchmark
);
criterion_main!(benches);
