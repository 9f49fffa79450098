//! Injectable noise streams for pre-quantization perturbation.
//!
//! The engine draws three samples per pixel (R, G, B in that order) from a
//! [`NoiseSource`] and maps each sample `u` in `[0, 1)` to a channel offset
//! of `(u - 0.5) * 255 * noise_amount`. Supplying a deterministic source
//! makes the whole transform reproducible.

use rand::Rng;

/// A stream of uniformly distributed samples in `[0, 1)`.
pub trait NoiseSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Noise drawn from any [`rand::Rng`].
///
/// ```
/// use nord_dither::dither::{NoiseSource, RngNoise};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut a = RngNoise::new(StdRng::seed_from_u64(7));
/// let mut b = RngNoise::new(StdRng::seed_from_u64(7));
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    /// Wrap a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always yields `0.5`, i.e. zero perturbation at any noise amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        0.5
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
///
/// An empty list behaves like [`NoNoise`].
#[derive(Debug, Clone, Default)]
pub struct SequenceNoise {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceNoise {
    /// Create a stream that cycles through `values`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl NoiseSource for SequenceNoise {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}

/// Channel offset for one noise sample.
#[inline]
pub(crate) fn channel_offset<N: NoiseSource + ?Sized>(noise: &mut N, noise_amount: f64) -> f64 {
    (noise.next_unit() - 0.5) * 255.0 * noise_amount
}
