/// Unordered frontier pool with random extraction
pub mod frontier;
/// Randomness seam and the seeded selector
pub mod rng;
/// Visited-pixel bitmask
pub mod visited;
/// The multi-seed random walk synthesizer
pub mod walker;
