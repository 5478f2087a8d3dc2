#![allow(clippy::unwrap_used, missing_docs)]
//! Benchmark for line and circle rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use softraster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut canvas = Canvas::new(800, 600).unwrap();

    // Full-width fan through the origin, all octants.
    let segments: Vec<LineSegment> = (-299..300)
        .step_by(13)
        .flat_map(|t| {
            [
                LineSegment::new(-399, t, 399, -t),
                LineSegment::new(t, -299, -t, 299),
            ]
        })
        .collect();

    for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Midpoint] {
        canvas.set_line_algorithm(algorithm);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &segments,
            |b, segments| {
                b.iter(|| {
                    for &segment in segments {
                        canvas.draw_line(black_box(segment), Color::WHITE).unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    let mut canvas = Canvas::new(800, 600).unwrap();

    for radius in [10, 100, 290] {
        for algorithm in [CircleAlgorithm::Midpoint, CircleAlgorithm::SecondOrder] {
            canvas.set_circle_algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), radius),
                &radius,
                |b, &radius| {
                    b.iter(|| {
                        canvas
                            .draw_circle(black_box(Circle::new(0, 0, radius)), Color::YELLOW)
                            .unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

fn span_fill_benchmark(c: &mut Criterion) {
    let mut canvas = Canvas::new(800, 600).unwrap();
    for row in -299..=300 {
        canvas.set_span(row, -400, 400);
    }

    c.bench_function("span_fill_800x600", |b| {
        b.iter(|| canvas.fill_spans(black_box(-299), black_box(300), Color::GREEN).unwrap());
    });
}

criterion_group!(benches, line_benchmark, circle_benchmark, span_fill_benchmark);
criterion_main!(benches);
