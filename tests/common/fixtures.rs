//! Test fixtures: synthetic images and config files.

use std::path::{Path, PathBuf};

use nord_dither::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Config file with noise disabled and a fixed seed
pub const QUIET_CONFIG: &str = "noise_amount: 0.0\nseed: 7\n";

/// Single-color opaque image
pub fn solid(width: usize, height: usize, rgb: [u8; 3]) -> RgbaImage {
    let bytes = [rgb[0], rgb[1], rgb[2], 255].repeat(width * height);
    RgbaImage::from_rgba8(width, height, &bytes).expect("valid solid image")
}

/// Horizontal black-to-white gradient
pub fn gradient(width: usize, height: usize) -> RgbaImage {
    let mut bytes = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
            bytes.extend_from_slice(&[v, v, v, 255]);
        }
    }
    RgbaImage::from_rgba8(width, height, &bytes).expect("valid gradient")
}

/// Random RGBA noise, reproducible per seed
pub fn random_image(width: usize, height: usize, seed: u64) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let bytes: Vec<u8> = (0..width * height * 4).map(|_| rng.gen()).collect();
    RgbaImage::from_rgba8(width, height, &bytes).expect("valid random image")
}

/// Write an image as PNG into `dir`
pub fn write_fixture(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    nordify::rendering::write_png(&path, image).expect("Failed to write fixture");
    path
}

/// Write a YAML config file into `dir`
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("nordify.yaml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}
