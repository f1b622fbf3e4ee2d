//! Synthesis constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_OUTPUT_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible synthesis
pub const DEFAULT_SEED: u64 = 42;

/// Default minimum number of starting points per run
pub const DEFAULT_MIN_POINTS: usize = 1;

/// Default maximum number of starting points per run
pub const DEFAULT_MAX_POINTS: usize = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Steps between progress bar refreshes during synthesis
pub const PROGRESS_UPDATE_INTERVAL: usize = 1024;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_synth";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on replay frames in an exported GIF
pub const GIF_FRAME_BUDGET: usize = 400;
