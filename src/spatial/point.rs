//! Grid coordinates and cardinal adjacency

/// A pixel coordinate on a width×height grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column index, 0-based from the left edge
    pub x: usize,
    /// Row index, 0-based from the top edge
    pub y: usize,
}

impl Point {
    /// Create a point from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Iterate the cardinal neighbors that fall inside a width×height grid
    ///
    /// Yields left, right, up, then down. Neighbors that would leave the
    /// grid are omitted, so border points yield 2 or 3 entries and interior
    /// points all 4. Diagonals are never considered.
    pub fn cardinal_neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Self> {
        let Self { x, y } = self;
        [
            (x > 0).then(|| Self::new(x - 1, y)),
            (x + 1 < width).then(|| Self::new(x + 1, y)),
            (y > 0).then(|| Self::new(x, y - 1)),
            (y + 1 < height).then(|| Self::new(x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }
}
