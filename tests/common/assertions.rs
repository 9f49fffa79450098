//! Assertion helpers for tests.

use nord_dither::palette::{contains, Rgb};
use nord_dither::RgbaImage;
use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel's RGB is a Nord palette color
pub fn assert_palette_only(image: &RgbaImage) {
    for (i, px) in image.to_rgba8().chunks_exact(4).enumerate() {
        let color = Rgb::new(px[0], px[1], px[2]);
        assert!(
            contains(color),
            "Pixel {} ({}, {}) is {} which is not a Nord color",
            i,
            i % image.width(),
            i / image.width(),
            color
        );
    }
}

/// Assert two images carry the same alpha channel
pub fn assert_same_alpha(actual: &RgbaImage, expected: &RgbaImage) {
    let alpha = |image: &RgbaImage| -> Vec<u8> {
        image.to_rgba8().chunks_exact(4).map(|px| px[3]).collect()
    };
    assert_eq!(alpha(actual), alpha(expected), "Alpha channel changed");
}

/// Assert PNG bytes declare the given color type
pub fn assert_color_type(bytes: &[u8], expected: png::ColorType) {
    let reader = png::Decoder::new(std::io::Cursor::new(bytes))
        .read_info()
        .expect("Failed to read PNG header");
    assert_eq!(reader.info().color_type, expected);
}
