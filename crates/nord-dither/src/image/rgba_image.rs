//! Real-valued RGBA image buffer.
//!
//! [`RgbaImage`] stores `width * height` pixels as a flat, row-major
//! sequence of four channels each. Channel values are `f64` so callers can
//! hand in fractional or out-of-range values; the engine tolerates both.

use crate::api::DitherError;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A row-major RGBA image with real-valued channels.
///
/// # Example
///
/// ```
/// use nord_dither::RgbaImage;
///
/// let image = RgbaImage::from_rgba8(2, 1, &[10, 20, 30, 255, 40, 50, 60, 128]).unwrap();
/// assert_eq!(image.pixel(1, 0), [40.0, 50.0, 60.0, 128.0]);
/// assert_eq!(image.to_rgba8(), vec![10, 20, 30, 255, 40, 50, 60, 128]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Number of channel values required for `width x height`.
fn channel_len(width: usize, height: usize) -> Result<usize, DitherError> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(DitherError::DimensionOverflow { width, height })
}

impl RgbaImage {
    /// Wrap a flat channel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidInput`] if `data.len()` differs from
    /// `width * height * 4`, or [`DitherError::DimensionOverflow`] if that
    /// product does not fit in `usize`.
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Result<Self, DitherError> {
        let expected = channel_len(width, height)?;
        if data.len() != expected {
            return Err(DitherError::InvalidInput {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image from 8-bit RGBA bytes.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, DitherError> {
        Self::new(width, height, bytes.iter().map(|&v| v as f64).collect())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat channel values, `[r, g, b, a, r, g, b, a, ...]`.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the image and return its channel buffer.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Channel values of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [f64; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y * self.width + x) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Convert to 8-bit RGBA bytes, rounding and clamping each channel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| to_byte(v)).collect()
    }
}

#[inline]
fn to_byte(value: f64) -> u8 {
    // NaN maps to 0
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
