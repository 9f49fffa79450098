//! RGBA pixel buffers consumed and produced by the diffusion engine.

mod rgba_image;

pub use rgba_image::{RgbaImage, CHANNELS};
