//! Error types for model building, synthesis, and file handling

use crate::spatial::Color;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Model building was given a source with no pixels
    EmptySource {
        /// Source width in pixels
        width: usize,
        /// Source height in pixels
        height: usize,
    },

    /// Synthesis was configured with a model holding no colors
    EmptyModel,

    /// Starting-point bounds are inverted
    InvalidPointRange {
        /// Requested lower bound
        min: usize,
        /// Requested upper bound
        max: usize,
    },

    /// A reached color has no observed adjacencies to sample from
    ///
    /// Only a 1×1 source can build such a model; hitting this mid-walk
    /// aborts the run instead of skipping the pixel.
    NoTransitions {
        /// The color with an empty adjacency sequence
        color: Color,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::EmptySource { width, height } => {
                write!(f, "Source image has no pixels ({width}x{height})")
            }
            Self::EmptyModel => {
                write!(f, "Transition model holds no colors to sample from")
            }
            Self::InvalidPointRange { min, max } => {
                write!(
                    f,
                    "Invalid starting point range: minimum {min} exceeds maximum {max}"
                )
            }
            Self::NoTransitions { color } => {
                write!(f, "No observed transitions for color {color}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
