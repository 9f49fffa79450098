//! nord-dither: Floyd-Steinberg dithering to the Nord palette
//!
//! This library converts full-color RGBA images into images whose R, G and
//! B channels only take the 16 colors of the Nord palette, using error
//! diffusion with optional noise injection to break up banding and
//! repeating patterns.
//!
//! # Quick Start
//!
//! The [`NordDitherer`] builder is the primary entry point:
//!
//! ```
//! use nord_dither::{NordDitherer, RgbaImage};
//!
//! let image = RgbaImage::from_rgba8(2, 2, &[200u8, 120, 90, 255].repeat(4)).unwrap();
//! let result = NordDitherer::new().noise_amount(0.1).dither(&image);
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! # Direct Engine API
//!
//! For full control over the noise stream, call [`dither::dither()`] with
//! any [`NoiseSource`]:
//!
//! ```
//! use nord_dither::dither::{dither, DitherOptions, SequenceNoise};
//! use nord_dither::RgbaImage;
//!
//! let image = RgbaImage::from_rgba8(1, 1, &[0, 0, 0, 255]).unwrap();
//! let mut noise = SequenceNoise::new(vec![0.5]);
//! let out = dither(&image, &DitherOptions::new(), &mut noise);
//! assert_eq!(out.to_rgba8(), vec![46, 52, 64, 255]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source RGBA ──copy──> working buffer
//!                           |
//!        for each pixel in row-major order:
//!                           |
//!          value + noise, clamped to 0..=255    (old)
//!                           |
//!          nearest palette color                 (new)
//!                           |
//!          write new RGB, copy source alpha
//!                           |
//!          old - new  ──7/16, 3/16, 5/16, 1/16──> later neighbors
//! ```
//!
//! Error is computed from the *clamped* old value, so diffused error that
//! pushed a channel out of range is truncated rather than carried on.

pub mod api;
pub mod dither;
pub mod image;
pub mod palette;


pub use api::{DitherError, NordDitherer};
pub use dither::{Accumulator, DitherOptions, DitherStats, NoiseSource};
pub use image::RgbaImage;
pub use palette::{closest_color, PaletteEntry, Rgb, NORD};
