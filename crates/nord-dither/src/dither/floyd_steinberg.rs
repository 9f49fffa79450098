//! Floyd-Steinberg error diffusion with pre-quantization noise.
//!
//! Pixels are visited in row-major order. Each pixel is perturbed with
//! noise, clamped, matched to the nearest palette color, and the residual
//! is pushed into the working buffer for neighbors not yet visited:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```
//!
//! The working buffer is also the output buffer. A pixel's "old" value is
//! whatever the buffer holds when the scan reaches it, including all error
//! diffused into it so far. Every kernel target lies after the current
//! pixel in scan order, so finalized pixels are never written again.
//!
//! Targets outside the image are dropped, so error leaks out at the
//! right, left and bottom borders.

use super::noise::{channel_offset, NoiseSource};
use super::options::{Accumulator, DitherOptions};
use super::stats::DitherStats;
use crate::image::{RgbaImage, CHANNELS};
use crate::palette::{closest_index, NORD};

/// Floyd-Steinberg kernel entries: `(dx, dy, weight)`, weights in sixteenths.
pub const FLOYD_STEINBERG: [(isize, usize, f64); 4] = [
    (1, 0, 7.0),
    (-1, 1, 3.0),
    (0, 1, 5.0),
    (1, 1, 1.0),
];

/// Kernel weight denominator.
pub const FLOYD_STEINBERG_DIVISOR: f64 = 16.0;

/// Dither `image` to the Nord palette.
///
/// Returns a newly allocated image of the same dimensions; `image` is not
/// modified. R, G and B of every output pixel are a palette color, alpha is
/// copied from the source.
///
/// Three samples are drawn from `noise` per pixel, even when
/// `options.noise_amount` is zero, so a given stream always lines up with
/// the same pixels.
///
/// # Example
///
/// ```
/// use nord_dither::dither::{dither, DitherOptions, NoNoise};
/// use nord_dither::RgbaImage;
///
/// let image = RgbaImage::from_rgba8(1, 1, &[0, 0, 0, 200]).unwrap();
/// let out = dither(&image, &DitherOptions::new().noise_amount(0.0), &mut NoNoise);
/// assert_eq!(out.to_rgba8(), vec![46, 52, 64, 200]);
/// ```
pub fn dither<N: NoiseSource + ?Sized>(
    image: &RgbaImage,
    options: &DitherOptions,
    noise: &mut N,
) -> RgbaImage {
    dither_with_stats(image, options, noise).0
}

/// Like [`dither`], additionally counting how often each palette entry was
/// chosen.
pub fn dither_with_stats<N: NoiseSource + ?Sized>(
    image: &RgbaImage,
    options: &DitherOptions,
    noise: &mut N,
) -> (RgbaImage, DitherStats) {
    let width = image.width();
    let height = image.height();
    let accumulator = options.accumulator;
    let source = image.data();

    let mut output = image.clone();
    let mut stats = DitherStats::new();
    let buffer = output.data_mut();

    if accumulator != Accumulator::Float {
        for pixel in buffer.chunks_exact_mut(CHANNELS) {
            for channel in &mut pixel[..3] {
                *channel = accumulator.store(*channel);
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * CHANNELS;

            let offsets = [
                channel_offset(noise, options.noise_amount),
                channel_offset(noise, options.noise_amount),
                channel_offset(noise, options.noise_amount),
            ];

            // Current value, including diffused error, perturbed and clamped
            let old = [
                (buffer[idx] + offsets[0]).clamp(0.0, 255.0),
                (buffer[idx + 1] + offsets[1]).clamp(0.0, 255.0),
                (buffer[idx + 2] + offsets[2]).clamp(0.0, 255.0),
            ];

            let nearest = closest_index(old[0], old[1], old[2]);
            stats.record(nearest);
            let new = NORD[nearest].color.to_f64();

            buffer[idx] = new[0];
            buffer[idx + 1] = new[1];
            buffer[idx + 2] = new[2];
            buffer[idx + 3] = source[idx + 3];

            // Error uses the clamped old value; out-of-range excess is dropped
            let error = [old[0] - new[0], old[1] - new[1], old[2] - new[2]];

            diffuse(buffer, width, height, x, y, &error, accumulator);
        }
    }

    (output, stats)
}

/// Add weighted `error` to every in-bounds kernel target of `(x, y)`.
#[inline]
fn diffuse(
    buffer: &mut [f64],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    error: &[f64; 3],
    accumulator: Accumulator,
) {
    for (dx, dy, weight) in FLOYD_STEINBERG {
        let ny = y + dy;
        if ny >= height {
            continue;
        }
        let nx = match x.checked_add_signed(dx) {
            Some(nx) if nx < width => nx,
            _ => continue,
        };

        let nidx = (ny * width + nx) * CHANNELS;
        for c in 0..3 {
            let value = buffer[nidx + c] + error[c] * weight / FLOYD_STEINBERG_DIVISOR;
            buffer[nidx + c] = accumulator.store(value);
        }
    }
}
