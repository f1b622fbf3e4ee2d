//! Performance measurement for complete synthesis runs at varying output sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use chainfill::algorithm::rng::SeededSelector;
use chainfill::algorithm::walker::{PointRange, RandomWalk};
use chainfill::analysis::adjacency::TransitionModel;
use chainfill::spatial::{Canvas, Color, Point};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Small three-color source in horizontal bands
fn banded_source() -> Canvas {
    let mut canvas = Canvas::transparent(16, 16);
    for y in 0..16 {
        for x in 0..16 {
            let color = match y % 3 {
                0 => Color::opaque(200, 40, 40),
                1 => Color::opaque(40, 200, 40),
                _ => Color::opaque(40, 40, 200),
            };
            canvas.set(Point::new(x, y), color);
        }
    }
    canvas
}

/// Measures a full walk from seeding to frontier exhaustion
fn bench_full_synthesis(c: &mut Criterion) {
    let Ok(model) = TransitionModel::from_canvas(&banded_source()) else {
        return;
    };
    let Ok(range) = PointRange::new(1, 8) else {
        return;
    };

    let mut group = c.benchmark_group("full_synthesis");

    for size in &[32_usize, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let selector = SeededSelector::new(12345);
                let Ok(mut walk) = RandomWalk::new(&model, size, size, range, selector) else {
                    return;
                };
                if walk.run().is_err() {
                    return;
                }
                black_box(walk.painted());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_synthesis);
criterion_main!(benches);
