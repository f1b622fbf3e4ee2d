/// Command-line interface and batch file processing
pub mod cli;
/// Synthesis constants and configuration defaults
pub mod configuration;
/// Error types for synthesis operations
pub mod error;
/// PNG loading and export
pub mod image;
/// Progress bar management for batch runs
pub mod progress;
/// Growth capture and GIF export
pub mod visualization;
