//! NordDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`NordDitherer`] wraps the diffusion engine with fluent configuration
//! and a choice between seeded and thread-local randomness.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::DitherError;
use crate::dither::{
    dither_with_stats, Accumulator, DitherOptions, DitherStats, NoiseSource, RngNoise,
};
use crate::image::RgbaImage;

/// High-level dithering builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`dither()`](Self::dither) takes `&self` so the builder is **reusable**
///   across multiple images
/// - With a [`seed()`](Self::seed), every call restarts the same random
///   stream, so equal inputs give equal outputs
///
/// # Example
///
/// ```
/// use nord_dither::{NordDitherer, RgbaImage};
///
/// let ditherer = NordDitherer::new().noise_amount(0.2).seed(42);
///
/// let image = RgbaImage::from_rgba8(2, 2, &[128; 16]).unwrap();
/// let first = ditherer.dither(&image);
/// let second = ditherer.dither(&image);
///
/// assert_eq!(first, second);
/// assert_eq!(first.width(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NordDitherer {
    options: DitherOptions,
    seed: Option<u64>,
}

impl NordDitherer {
    /// Create a ditherer with default options (noise 0.1, float accumulator,
    /// unseeded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the noise amount without validation.
    #[inline]
    pub fn noise_amount(mut self, amount: f64) -> Self {
        self.options = self.options.noise_amount(amount);
        self
    }

    /// Set the noise amount, rejecting NaN and infinities.
    pub fn try_noise_amount(self, amount: f64) -> Result<Self, DitherError> {
        if !amount.is_finite() {
            return Err(DitherError::InvalidNoiseAmount(amount));
        }
        Ok(self.noise_amount(amount))
    }

    /// Set the working buffer storage model.
    #[inline]
    pub fn accumulator(mut self, accumulator: Accumulator) -> Self {
        self.options = self.options.accumulator(accumulator);
        self
    }

    /// Seed the noise stream for reproducible output.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Current dither options.
    pub fn options(&self) -> &DitherOptions {
        &self.options
    }

    /// Configured seed, if any.
    pub fn seed_value(&self) -> Option<u64> {
        self.seed
    }

    /// Dither an image.
    pub fn dither(&self, image: &RgbaImage) -> RgbaImage {
        self.dither_with_stats(image).0
    }

    /// Dither an image and report palette usage.
    pub fn dither_with_stats(&self, image: &RgbaImage) -> (RgbaImage, DitherStats) {
        match self.seed {
            Some(seed) => {
                let mut noise = RngNoise::new(StdRng::seed_from_u64(seed));
                dither_with_stats(image, &self.options, &mut noise)
            }
            None => {
                let mut noise = RngNoise::new(rand::thread_rng());
                dither_with_stats(image, &self.options, &mut noise)
            }
        }
    }

    /// Dither an image with a caller-supplied noise stream.
    ///
    /// The configured seed is ignored.
    pub fn dither_with<N: NoiseSource + ?Sized>(
        &self,
        image: &RgbaImage,
        noise: &mut N,
    ) -> RgbaImage {
        dither_with_stats(image, &self.options, noise).0
    }
}
