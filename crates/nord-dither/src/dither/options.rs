//! Dithering options and configuration.
//!
//! This module provides the [`DitherOptions`] struct for configuring
//! the diffusion engine.

/// Default noise amount, as a fraction of full channel range.
pub const DEFAULT_NOISE_AMOUNT: f64 = 0.1;

/// Storage model for the working buffer that receives diffused error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulator {
    /// Real-valued accumulation. Diffused error may push a channel outside
    /// `0..=255` until that pixel is visited and its value is clamped.
    #[default]
    Float,

    /// 8-bit clamped accumulation.
    ///
    /// Every write is clamped to `0..=255` and rounded half-to-even, the way
    /// a browser canvas stores pixel data. Use this to reproduce
    /// canvas-based output bit for bit.
    Byte,
}

impl Accumulator {
    /// Value as it is stored in the working buffer.
    #[inline]
    pub fn store(self, value: f64) -> f64 {
        match self {
            Accumulator::Float => value,
            Accumulator::Byte => {
                if value.is_nan() {
                    0.0
                } else {
                    value.clamp(0.0, 255.0).round_ties_even()
                }
            }
        }
    }
}

/// Configuration options for the diffusion engine.
///
/// # Defaults
///
/// - Noise amount: `0.1` (noise spans 10% of the channel range)
/// - Accumulator: [`Accumulator::Float`]
///
/// # Example
///
/// ```
/// use nord_dither::dither::{Accumulator, DitherOptions};
///
/// let options = DitherOptions::new()
///     .noise_amount(0.0)
///     .accumulator(Accumulator::Byte);
/// assert_eq!(options.noise_amount, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DitherOptions {
    /// Scale of the per-channel noise injected before quantization.
    ///
    /// Each channel receives a uniform offset in
    /// `[-0.5, 0.5] * 255 * noise_amount`. Intended for `0.0..=1.0`, but
    /// not restricted.
    ///
    /// Default: `0.1`
    pub noise_amount: f64,

    /// Working buffer storage model.
    ///
    /// Default: [`Accumulator::Float`]
    pub accumulator: Accumulator,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            noise_amount: DEFAULT_NOISE_AMOUNT,
            accumulator: Accumulator::Float,
        }
    }
}

impl DitherOptions {
    /// Create new dither options with default values.
    ///
    /// This is equivalent to `DitherOptions::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise amount.
    #[inline]
    pub fn noise_amount(mut self, amount: f64) -> Self {
        self.noise_amount = amount;
        self
    }

    /// Set the working buffer storage model.
    #[inline]
    pub fn accumulator(mut self, accumulator: Accumulator) -> Self {
        self.accumulator = accumulator;
        self
    }
}
