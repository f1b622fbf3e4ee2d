//! Analysis modules for color adjacency extraction and model measurement

/// Color adjacency extraction and the transition model
pub mod adjacency;
/// Summary statistics over a built transition model
pub mod statistics;
