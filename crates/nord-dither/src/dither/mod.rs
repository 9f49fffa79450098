//! Error diffusion dithering against the Nord palette.
//!
//! The engine scans the image in row-major order. For every pixel it:
//!
//! 1. draws three noise samples and perturbs R, G and B
//! 2. clamps the perturbed value to `0..=255`
//! 3. writes the nearest palette color (alpha is copied from the source)
//! 4. diffuses `old - new` into later neighbors with Floyd-Steinberg weights
//!
//! Each pixel depends on error from pixels before it, so the scan is
//! strictly sequential.
//!
//! # Example
//!
//! ```
//! use nord_dither::dither::{dither, DitherOptions, RngNoise};
//! use nord_dither::RgbaImage;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let image = RgbaImage::from_rgba8(2, 2, &[128; 16]).unwrap();
//! let mut noise = RngNoise::new(StdRng::seed_from_u64(3));
//! let out = dither(&image, &DitherOptions::new(), &mut noise);
//! assert_eq!(out.width(), 2);
//! ```

mod floyd_steinberg;
mod noise;
mod options;
mod stats;

pub use floyd_steinberg::{dither, dither_with_stats, FLOYD_STEINBERG, FLOYD_STEINBERG_DIVISOR};
pub use noise::{NoNoise, NoiseSource, RngNoise, SequenceNoise};
pub use options::{Accumulator, DitherOptions, DEFAULT_NOISE_AMOUNT};
pub use stats::DitherStats;

use crate::image::RgbaImage;

/// Dither with thread-local randomness and the default accumulator.
///
/// Output differs between calls unless `noise_amount` is zero.
pub fn dither_with_rng(image: &RgbaImage, noise_amount: f64) -> RgbaImage {
    let options = DitherOptions::new().noise_amount(noise_amount);
    dither(image, &options, &mut RngNoise::new(rand::thread_rng()))
}
