//! Validates random walk synthesis: determinism, termination, and coverage

use chainfill::SynthesisError;
use chainfill::algorithm::rng::{SeededSelector, UniformSource};
use chainfill::algorithm::walker::{PointRange, RandomWalk};
use chainfill::analysis::adjacency::TransitionModel;
use chainfill::spatial::{Canvas, Color, Point};
use std::collections::HashSet;

const RED: Color = Color::opaque(255, 0, 0);
const GREEN: Color = Color::opaque(0, 255, 0);
const BLUE: Color = Color::opaque(0, 0, 255);

/// Deterministic source that always picks the middle of the range
struct MidpointSource;

impl UniformSource for MidpointSource {
    fn sample_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        lo + (hi - lo) / 2
    }
}

fn striped_source() -> Canvas {
    let mut canvas = Canvas::transparent(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            let color = match y {
                0 | 2 => RED,
                1 => GREEN,
                _ => BLUE,
            };
            canvas.set(Point::new(x, y), color);
        }
    }
    canvas
}

#[test]
fn test_same_seed_gives_byte_identical_output() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(1, 4).unwrap();

    let mut first = RandomWalk::new(&model, 16, 16, range, SeededSelector::new(2024)).unwrap();
    first.run().unwrap();
    let mut second = RandomWalk::new(&model, 16, 16, range, SeededSelector::new(2024)).unwrap();
    second.run().unwrap();

    assert_eq!(first.into_canvas(), second.into_canvas());
}

#[test]
fn test_zero_starting_points_leave_the_canvas_transparent() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(0, 0).unwrap();

    let mut walk = RandomWalk::new(&model, 8, 8, range, SeededSelector::new(1)).unwrap();
    walk.run().unwrap();

    assert_eq!(walk.painted(), 0);
    assert!(
        walk.canvas()
            .pixels()
            .all(|(_, color)| color == Color::TRANSPARENT)
    );
}

#[test]
fn test_full_run_covers_the_canvas_within_the_painted_bound() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(2, 5).unwrap();

    let mut walk = RandomWalk::new(&model, 12, 9, range, SeededSelector::new(77)).unwrap();
    walk.run().unwrap();

    // Flood fill from any seed reaches every pixel of a connected grid,
    // and the counter can never pass the area
    assert_eq!(walk.painted(), 12 * 9);
    assert_eq!(walk.frontier_len(), 0);
    assert!(
        walk.canvas()
            .pixels()
            .all(|(_, color)| color != Color::TRANSPARENT)
    );
}

#[test]
fn test_no_pixel_is_painted_twice() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(3, 3).unwrap();

    let mut walk = RandomWalk::new(&model, 10, 10, range, SeededSelector::new(5)).unwrap();
    walk.enable_capture();
    walk.run().unwrap();

    let capture = walk.take_capture().unwrap();
    let mut seen = HashSet::new();
    for event in capture.events() {
        assert!(seen.insert(event.point), "painted {:?} twice", event.point);
    }
    assert_eq!(seen.len(), walk.painted());
}

#[test]
fn test_sampled_colors_come_from_the_model() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(1, 2).unwrap();

    let mut walk = RandomWalk::new(&model, 6, 6, range, SeededSelector::new(11)).unwrap();
    walk.run().unwrap();

    for (_, color) in walk.canvas().pixels() {
        assert!(model.adjacency(color).is_some());
    }
}

#[test]
fn test_single_pixel_model_aborts_with_sampling_error() {
    let source = Canvas::filled(1, 1, BLUE);
    let model = TransitionModel::from_canvas(&source).unwrap();
    let range = PointRange::new(1, 1).unwrap();

    let mut walk = RandomWalk::new(&model, 4, 4, range, SeededSelector::new(3)).unwrap();
    let err = walk.run().unwrap_err();

    assert!(matches!(
        err,
        SynthesisError::NoTransitions { color } if color == BLUE
    ));
    // The failing pixel was claimed but never painted
    assert_eq!(walk.painted(), 1);
    assert!(
        walk.canvas()
            .pixels()
            .all(|(_, color)| color == Color::TRANSPARENT)
    );
}

#[test]
fn test_midpoint_walk_floods_a_uniform_source() {
    // A 3x3 all-red source builds a model whose only key transitions to
    // itself; the midpoint rule then seeds the exact center and the walk
    // must paint all nine pixels red
    let source = Canvas::filled(3, 3, RED);
    let model = TransitionModel::from_canvas(&source).unwrap();
    let range = PointRange::new(1, 1).unwrap();

    let mut walk = RandomWalk::new(&model, 3, 3, range, MidpointSource).unwrap();
    assert_eq!(walk.frontier_len(), 1);
    walk.run().unwrap();

    assert_eq!(walk.painted(), 9);
    assert_eq!(walk.into_canvas(), Canvas::filled(3, 3, RED));
}

#[test]
fn test_one_model_serves_several_runs() {
    let model = TransitionModel::from_canvas(&striped_source()).unwrap();
    let range = PointRange::new(1, 1).unwrap();

    for seed in 0..4 {
        let mut walk = RandomWalk::new(&model, 5, 5, range, SeededSelector::new(seed)).unwrap();
        walk.run().unwrap();
        assert_eq!(walk.painted(), 25);
    }
}
