//! Pixel canvas storage with bounds-checked access
//!
//! The canvas is the buffer both halves of the system speak to: the model
//! builder reads it as an immutable source view, the synthesizer writes it
//! as the output surface. Storage is row-major (`[row, col]` = `[y, x]`),
//! matching the scan order of the importers and exporters.

use crate::spatial::{Color, Point};
use ndarray::Array2;

/// A width×height grid of RGBA colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Color>,
    /// Current canvas dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl Canvas {
    /// Create a canvas with every pixel set to the given color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
            dimensions: (height, width),
        }
    }

    /// Create a canvas initialized to fully transparent pixels
    pub fn transparent(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.1
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.0
    }

    /// Total pixel count
    pub const fn area(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Whether a point lies inside the canvas bounds
    pub const fn contains(&self, point: Point) -> bool {
        point.x < self.width() && point.y < self.height()
    }

    /// Read the color at a point, or `None` outside the bounds
    pub fn get(&self, point: Point) -> Option<Color> {
        self.pixels.get([point.y, point.x]).copied()
    }

    /// Write a color at a point, returning whether the point was in bounds
    pub fn set(&mut self, point: Point, color: Color) -> bool {
        if let Some(pixel) = self.pixels.get_mut([point.y, point.x]) {
            *pixel = color;
            true
        } else {
            false
        }
    }

    /// Iterate every pixel with its coordinate, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &color)| (Point::new(x, y), color))
    }
}
