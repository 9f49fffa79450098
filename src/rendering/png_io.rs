//! PNG decoding and encoding for Nord-dithered images.
//!
//! Decoding normalizes every 8-bit-or-less PNG to RGBA. Encoding picks the
//! smallest lossless representation:
//! - Opaque image with palette-only colors → indexed color type 3, 4-bit, Nord PLTE
//! - Anything else → RGBA 8-bit

use std::io::Cursor;
use std::path::Path;

use nord_dither::palette::{closest_index, contains, Rgb};
use nord_dither::{RgbaImage, NORD};

use crate::error::ImageIoError;

/// Decode PNG bytes into an RGBA image.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageIoError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageIoError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageIoError::Decode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageIoError::UnsupportedFormat {
            color_type: info.color_type,
            bit_depth: info.bit_depth,
        });
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        color_type => {
            return Err(ImageIoError::UnsupportedFormat {
                color_type,
                bit_depth: info.bit_depth,
            })
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage::from_rgba8(
        info.width as usize,
        info.height as usize,
        &rgba,
    )?)
}

/// Encode an image as PNG.
///
/// Fully opaque images whose colors all belong to the Nord palette are
/// written as 4-bit indexed PNGs; everything else as 8-bit RGBA.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageIoError> {
    if image.is_empty() {
        return Err(ImageIoError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    let too_large = || ImageIoError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let rgba = image.to_rgba8();

    if let Some(indices) = palette_indices(&rgba) {
        let plte: Vec<u8> = NORD
            .iter()
            .flat_map(|e| [e.color.r, e.color.g, e.color.b])
            .collect();
        let packed = pack_nbits(&indices, width, 4);
        tracing::debug!(width, height, "Encoding indexed PNG");
        encode_packed(
            width,
            height,
            png::ColorType::Indexed,
            png::BitDepth::Four,
            Some(plte.as_slice()),
            &packed,
        )
    } else {
        tracing::debug!(width, height, "Encoding RGBA PNG");
        encode_packed(
            width,
            height,
            png::ColorType::Rgba,
            png::BitDepth::Eight,
            None,
            &rgba,
        )
    }
}

/// Palette index per pixel, or `None` if any pixel is translucent or off-palette.
fn palette_indices(rgba: &[u8]) -> Option<Vec<u8>> {
    rgba.chunks_exact(4)
        .map(|p| {
            let color = Rgb::new(p[0], p[1], p[2]);
            if p[3] != 255 || !contains(color) {
                return None;
            }
            Some(closest_index(p[0] as f64, p[1] as f64, p[2] as f64) as u8)
        })
        .collect()
}

/// Encode packed pixel data as a PNG.
fn encode_packed(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    packed: &[u8],
) -> Result<Vec<u8>, ImageIoError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageIoError::Encode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| ImageIoError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

/// Re-compress PNG bytes with oxipng, falling back to the input on failure.
pub fn optimize_png(bytes: Vec<u8>) -> Vec<u8> {
    let before = bytes.len();
    match oxipng::optimize_from_memory(
        &bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(error = %e, "PNG optimization failed, keeping original");
            bytes
        }
    }
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, ImageIoError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), ImageIoError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        encode_packed(width, height, color, png::BitDepth::Eight, None, data).unwrap()
    }

    #[test]
    fn test_pack_nbits_four_bit_odd_width() {
        let packed = pack_nbits(&[1, 2, 3, 4, 5, 6], 3, 4);
        assert_eq!(packed, vec![0x12, 0x30, 0x45, 0x60]);
    }

    #[test]
    fn test_decode_rgb_adds_opaque_alpha() {
        let png = encode_raw(2, 1, png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let image = decode_png(&png).unwrap();
        assert_eq!(image.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_decode_grayscale_variants() {
        let png = encode_raw(2, 1, png::ColorType::Grayscale, &[10, 200]);
        assert_eq!(
            decode_png(&png).unwrap().to_rgba8(),
            vec![10, 10, 10, 255, 200, 200, 200, 255]
        );

        let png = encode_raw(1, 1, png::ColorType::GrayscaleAlpha, &[77, 128]);
        assert_eq!(decode_png(&png).unwrap().to_rgba8(), vec![77, 77, 77, 128]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_png(b"not a png"),
            Err(ImageIoError::Decode(_))
        ));
    }

    #[test]
    fn test_encode_palette_image_as_indexed() {
        let bytes: Vec<u8> = NORD
            .iter()
            .flat_map(|e| [e.color.r, e.color.g, e.color.b, 255])
            .collect();
        let image = RgbaImage::from_rgba8(4, 4, &bytes).unwrap();
        let png = encode_png(&image).unwrap();

        let decoder = png::Decoder::new(Cursor::new(&png));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().color_type, png::ColorType::Indexed);
        assert_eq!(reader.info().bit_depth, png::BitDepth::Four);

        assert_eq!(decode_png(&png).unwrap(), image);
    }

    #[test]
    fn test_encode_translucent_image_as_rgba() {
        let image = RgbaImage::from_rgba8(1, 1, &[46, 52, 64, 100]).unwrap();
        let png = encode_png(&image).unwrap();

        let decoder = png::Decoder::new(Cursor::new(&png));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
        assert_eq!(decode_png(&png).unwrap(), image);
    }

    #[test]
    fn test_encode_off_palette_image_as_rgba() {
        let image = RgbaImage::from_rgba8(1, 1, &[1, 2, 3, 255]).unwrap();
        let png = encode_png(&image).unwrap();
        let reader = png::Decoder::new(Cursor::new(&png)).read_info().unwrap();
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    }

    #[test]
    fn test_encode_empty_image_is_error() {
        let image = RgbaImage::from_rgba8(0, 0, &[]).unwrap();
        assert!(matches!(
            encode_png(&image),
            Err(ImageIoError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_optimize_keeps_pixels() {
        let image = RgbaImage::from_rgba8(2, 1, &[46, 52, 64, 255, 236, 239, 244, 255]).unwrap();
        let png = encode_png(&image).unwrap();
        let optimized = optimize_png(png);
        assert_eq!(decode_png(&optimized).unwrap(), image);
    }
}
