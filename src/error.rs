//! Error types for gradient rendering.

use thiserror::Error;

/// Input that cannot be turned into a gradient visualization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The horizontal and vertical derivatives have different shapes.
    #[error("gradient shape mismatch: dx is {dx:?}, dy is {dy:?}")]
    ShapeMismatch {
        /// (height, width) of dx.
        dx: (usize, usize),
        /// (height, width) of dy.
        dy: (usize, usize),
    },

    /// The image has a channel count other than 1, 3 or 4.
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    /// A flat pixel buffer does not match its declared dimensions.
    #[error("buffer of {len} bytes does not match {height}x{width}x{channels}")]
    BufferLength {
        len: usize,
        height: usize,
        width: usize,
        channels: usize,
    },

    /// Blue channel mode given by name or index is not recognized.
    #[error("unknown blue channel mode: {0}")]
    UnknownBlueMode(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = InvalidInputError> = std::result::Result<T, E>;
