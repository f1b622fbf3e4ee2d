//! Randomized multi-seed flood fill driven by the transition model
//!
//! A run scatters starting points over a transparent canvas, then repeatedly
//! extracts a random frontier entry and paints it with a color sampled from
//! its predecessor's adjacency sequence. Growth stops when the frontier
//! drains; pixels never reached stay transparent, which is an expected
//! outcome and not a failure.

use crate::algorithm::frontier::Frontier;
use crate::algorithm::rng::UniformSource;
use crate::algorithm::visited::VisitedMask;
use crate::analysis::adjacency::TransitionModel;
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::io::visualization::GrowthCapture;
use crate::spatial::{Canvas, Color, Point};

/// Inclusive bounds on how many starting points a run scatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRange {
    min: usize,
    max: usize,
}

impl PointRange {
    /// Create a starting-point range
    ///
    /// A collapsed range (`min == max`) is valid, including `(0, 0)`: a run
    /// with zero starting points completes immediately and leaves the whole
    /// canvas transparent.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidPointRange`] when `min > max`.
    pub const fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(SynthesisError::InvalidPointRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Draw a starting-point count from the range
    pub fn sample<R: UniformSource>(&self, source: &mut R) -> usize {
        source.sample_inclusive(self.min, self.max)
    }

    /// Lower bound
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Upper bound
    pub const fn max(&self) -> usize {
        self.max
    }
}

/// One synthesis run over an output canvas
///
/// Borrows the model immutably so several runs can share one build; the
/// canvas, frontier, visited mask, and painted counter are created fresh
/// here and owned exclusively by this run. With a fixed model and a fixed
/// selector seed the output is byte-identical across runs.
#[derive(Debug)]
pub struct RandomWalk<'model, R: UniformSource> {
    model: &'model TransitionModel,
    canvas: Canvas,
    visited: VisitedMask,
    frontier: Frontier,
    selector: R,
    painted: usize,
    capture: Option<GrowthCapture>,
}

impl<'model, R: UniformSource> RandomWalk<'model, R> {
    /// Set up a run and scatter its starting points
    ///
    /// Draws the starting-point count from `range`, then for each point
    /// draws x, y, and a model key index, in that order. The selector is
    /// consumed in exactly this sequence, which is what makes a seed fully
    /// determine the output.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptyModel`] for a keyless model and
    /// [`SynthesisError::InvalidParameter`] when either output dimension is
    /// zero.
    pub fn new(
        model: &'model TransitionModel,
        width: usize,
        height: usize,
        range: PointRange,
        mut selector: R,
    ) -> Result<Self> {
        if model.is_empty() {
            return Err(SynthesisError::EmptyModel);
        }
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"output width and height must be nonzero",
            ));
        }

        let keys = model.keys();
        let mut frontier = Frontier::new();
        let starting_points = range.sample(&mut selector);
        for _ in 0..starting_points {
            let x = selector.sample_inclusive(0, width - 1);
            let y = selector.sample_inclusive(0, height - 1);
            let key_index = selector.sample_inclusive(0, keys.len() - 1);
            if let Some(&color) = keys.get(key_index) {
                frontier.push(Point::new(x, y), color);
            }
        }

        Ok(Self {
            model,
            canvas: Canvas::transparent(width, height),
            visited: VisitedMask::new(width, height),
            frontier,
            selector,
            painted: 0,
            capture: None,
        })
    }

    /// Advance the walk by one frontier extraction
    ///
    /// Returns `Ok(true)` while the run should continue and `Ok(false)` once
    /// it has terminated, either because the frontier drained or because the
    /// painted-pixel bound tripped. Stale entries for already painted or
    /// out-of-bounds points are discarded without painting.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::NoTransitions`] when the extracted entry's
    /// predecessor has no observed adjacencies to sample from. The walk
    /// aborts rather than skipping the pixel.
    pub fn step(&mut self) -> Result<bool> {
        let Some(entry) = self.frontier.take_random(&mut self.selector) else {
            return Ok(false);
        };

        if !self.canvas.contains(entry.point) {
            return Ok(true);
        }
        if !self.visited.mark(entry.point) {
            return Ok(true);
        }

        self.painted += 1;
        // Unreachable while enqueueing stays gated on the visited mask;
        // kept as a hard stop against frontier runaway
        if self.painted > self.canvas.area() {
            return Ok(false);
        }

        let color = self.sample_transition(entry.predecessor)?;
        self.canvas.set(entry.point, color);
        if let Some(capture) = self.capture.as_mut() {
            capture.record(entry.point, color);
        }

        let (width, height) = (self.canvas.width(), self.canvas.height());
        for neighbor in entry.point.cardinal_neighbors(width, height) {
            if !self.visited.contains(neighbor) {
                self.frontier.push(neighbor, color);
            }
        }

        Ok(true)
    }

    /// Drive the walk until it terminates
    ///
    /// # Errors
    ///
    /// Propagates the first [`SynthesisError::NoTransitions`] from
    /// [`Self::step`].
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    /// Start recording paint events for animated replay
    pub fn enable_capture(&mut self) {
        self.capture = Some(GrowthCapture::new(
            self.canvas.width(),
            self.canvas.height(),
            self.model.keys(),
        ));
    }

    /// Take the recorded paint events, if capture was enabled
    pub fn take_capture(&mut self) -> Option<GrowthCapture> {
        self.capture.take()
    }

    /// Pixels painted so far
    pub const fn painted(&self) -> usize {
        self.painted
    }

    /// Entries currently queued in the frontier
    pub const fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The output canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Finish and yield the output canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    fn sample_transition(&mut self, predecessor: Color) -> Result<Color> {
        let sequence = self
            .model
            .adjacency(predecessor)
            .filter(|sequence| !sequence.is_empty())
            .ok_or(SynthesisError::NoTransitions { color: predecessor })?;
        let index = self.selector.sample_inclusive(0, sequence.len() - 1);
        sequence
            .get(index)
            .copied()
            .ok_or(SynthesisError::NoTransitions { color: predecessor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::rng::SeededSelector;

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = PointRange::new(5, 2).unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::InvalidPointRange { min: 5, max: 2 }
        ));
    }

    #[test]
    fn test_collapsed_range_samples_its_only_value() {
        let range = PointRange::new(3, 3).unwrap();
        let mut selector = SeededSelector::new(1);
        assert_eq!(range.sample(&mut selector), 3);
    }

    #[test]
    fn test_keyless_model_is_rejected() {
        let model = TransitionModel::default();
        let range = PointRange::new(1, 1).unwrap();
        let err = RandomWalk::new(&model, 4, 4, range, SeededSelector::new(0)).unwrap_err();
        assert!(matches!(err, SynthesisError::EmptyModel));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let canvas = Canvas::filled(2, 2, Color::opaque(1, 1, 1));
        let model = TransitionModel::from_canvas(&canvas).unwrap();
        let range = PointRange::new(1, 1).unwrap();
        let err = RandomWalk::new(&model, 0, 4, range, SeededSelector::new(0)).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_fresh_run_reports_empty_progress() {
        let canvas = Canvas::filled(2, 2, Color::opaque(1, 1, 1));
        let model = TransitionModel::from_canvas(&canvas).unwrap();
        let range = PointRange::new(2, 2).unwrap();
        let walk = RandomWalk::new(&model, 4, 4, range, SeededSelector::new(0)).unwrap();
        assert_eq!(walk.painted(), 0);
        assert_eq!(walk.frontier_len(), 2);
    }
}
