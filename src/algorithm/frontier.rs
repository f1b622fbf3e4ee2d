//! Unordered pool of pending paint candidates
//!
//! Entries leave the pool in uniform random order via swap-removal. The
//! random extraction is what turns plain flood fill into organic growth:
//! each step expands at an arbitrary frontier pixel instead of sweeping
//! outward in breadth-first rings.

use crate::algorithm::rng::UniformSource;
use crate::spatial::{Color, Point};

/// A queued paint candidate
///
/// Records where to paint and the color of the already painted pixel that
/// enqueued it. The predecessor decides which adjacency sequence the color
/// for this pixel is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Target position on the output canvas
    pub point: Point,
    /// Color of the neighbor that enqueued this entry
    pub predecessor: Color,
}

/// Pool of frontier entries awaiting expansion
///
/// Duplicate points are allowed; the walker discards stale entries against
/// its visited mask at extraction time rather than deduplicating here.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Queue a paint candidate
    pub fn push(&mut self, point: Point, predecessor: Color) {
        self.entries.push(FrontierEntry { point, predecessor });
    }

    /// Remove and return a uniformly random entry
    ///
    /// Swap-removal keeps extraction O(1); insertion order carries no
    /// meaning. Returns `None` once the pool is empty.
    pub fn take_random<R: UniformSource>(&mut self, source: &mut R) -> Option<FrontierEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let index = source.sample_inclusive(0, self.entries.len() - 1);
        (index < self.entries.len()).then(|| self.entries.swap_remove(index))
    }

    /// Number of queued entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries remain
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
