//! Markov chain flood-fill image synthesis
//!
//! The system learns which colors sit next to which in a source image,
//! then regrows a new image outward from random starting points, sampling
//! each pixel's color from the adjacency statistics of the color that
//! reached it.

#![forbid(unsafe_code)]

/// The random walk synthesizer: frontier, visited tracking, and randomness
pub mod algorithm;
/// Source image analysis producing the transition model
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Canvas, color, and coordinate primitives
pub mod spatial;

pub use io::error::{Result, SynthesisError};
