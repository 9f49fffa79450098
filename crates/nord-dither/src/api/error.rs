//! Unified error type for the nord-dither public API.

use thiserror::Error;

/// Unified error type for the nord-dither public API.
///
/// The diffusion engine itself cannot fail; errors only arise when
/// constructing inputs or configuring a ditherer.
///
/// # Example
///
/// ```
/// use nord_dither::{DitherError, RgbaImage};
///
/// let err = RgbaImage::from_rgba8(2, 2, &[0; 15]).unwrap_err();
/// assert!(matches!(err, DitherError::InvalidInput { expected: 16, actual: 15 }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// Channel buffer length does not equal `width * height * 4`.
    #[error("invalid input: expected {expected} channel values, got {actual}")]
    InvalidInput {
        /// Required number of channel values
        expected: usize,
        /// Number of channel values supplied
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`.
    #[error("image dimensions overflow: {width}x{height}")]
    DimensionOverflow {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },
    /// Noise amount is NaN or infinite.
    #[error("noise amount must be finite, got {0}")]
    InvalidNoiseAmount(f64),
}
