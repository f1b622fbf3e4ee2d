//! Spatial data structures for pixel grids
//!
//! This module contains the grid-level vocabulary shared by the model
//! builder and the synthesizer:
//! - Color keys with exact channel equality
//! - Grid coordinates and cardinal adjacency
//! - The canvas buffer both phases read and write

/// Pixel canvas storage and bounds-checked access
pub mod canvas;
/// RGBA color keys
pub mod color;
/// Grid coordinates and cardinal adjacency
pub mod point;

pub use canvas::Canvas;
pub use color::Color;
pub use point::Point;
