//! Visited-pixel tracking for the random walk

use crate::spatial::Point;
use bitvec::prelude::*;

/// Fixed-size bitmask recording which output pixels have been claimed
///
/// A pixel is marked when it is taken off the frontier for painting, never
/// when it is merely enqueued, so the same point can sit in the frontier
/// several times with different predecessors. Marks are permanent; the mask
/// only grows until synthesis ends.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl VisitedMask {
    /// Create a mask with no pixels visited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Mark a point as visited
    ///
    /// Returns `true` if the point was unvisited and is now marked, `false`
    /// if it was already visited or lies outside the mask.
    pub fn mark(&mut self, point: Point) -> bool {
        let Some(index) = self.index_of(point) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test whether a point has been visited
    ///
    /// Points outside the mask report unvisited.
    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count visited pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        (point.x < self.width && point.y < self.height).then(|| point.y * self.width + point.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marking_is_idempotent() {
        let mut mask = VisitedMask::new(4, 4);
        assert!(mask.mark(Point::new(2, 1)));
        assert!(!mask.mark(Point::new(2, 1)));
        assert!(mask.contains(Point::new(2, 1)));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_unmarked_points_report_unvisited() {
        let mask = VisitedMask::new(3, 3);
        assert!(!mask.contains(Point::new(0, 0)));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_points_outside_the_mask_are_rejected() {
        let mut mask = VisitedMask::new(2, 2);
        assert!(!mask.mark(Point::new(2, 0)));
        assert!(!mask.mark(Point::new(0, 2)));
        assert!(!mask.contains(Point::new(5, 5)));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_marks_never_clear() {
        let mut mask = VisitedMask::new(2, 1);
        mask.mark(Point::new(0, 0));
        mask.mark(Point::new(1, 0));
        assert_eq!(mask.count(), 2);
        assert!(mask.contains(Point::new(0, 0)));
        assert!(mask.contains(Point::new(1, 0)));
    }
}
