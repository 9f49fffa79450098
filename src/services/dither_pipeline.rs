use std::path::Path;
use std::time::Instant;

use nord_dither::{DitherStats, NordDitherer};

use crate::error::ImageIoError;
use crate::models::DitherConfig;
use crate::rendering::{decode_png, encode_png, optimize_png};

/// Result from running the dither pipeline
pub struct DitherResult {
    /// Encoded PNG bytes
    pub png_bytes: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Palette usage counters
    pub stats: DitherStats,
}

/// Pipeline that orchestrates decode → dither → encode
pub struct DitherPipeline {
    ditherer: NordDitherer,
    optimize: bool,
}

impl DitherPipeline {
    pub fn new(ditherer: NordDitherer, optimize: bool) -> Self {
        Self {
            ditherer,
            optimize,
        }
    }

    /// Build a pipeline from resolved configuration
    pub fn from_config(config: &DitherConfig) -> Result<Self, crate::error::ConfigError> {
        Ok(Self::new(config.ditherer()?, config.optimize))
    }

    /// Dither PNG bytes into Nord-palette PNG bytes
    pub fn process(&self, png_bytes: &[u8]) -> Result<DitherResult, ImageIoError> {
        let image = decode_png(png_bytes)?;
        let (width, height) = (image.width(), image.height());

        let start = Instant::now();
        let (dithered, stats) = self.ditherer.dither_with_stats(&image);
        tracing::debug!(
            width,
            height,
            noise_amount = self.ditherer.options().noise_amount,
            seed = ?self.ditherer.seed_value(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dithered image"
        );

        let mut png_bytes = encode_png(&dithered)?;
        if self.optimize {
            png_bytes = optimize_png(png_bytes);
        }

        Ok(DitherResult {
            png_bytes,
            width,
            height,
            stats,
        })
    }

    /// Dither a PNG file into another PNG file
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<DitherResult, ImageIoError> {
        let bytes = std::fs::read(input)?;
        let result = self.process(&bytes)?;
        std::fs::write(output, &result.png_bytes)?;
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = result.width,
            height = result.height,
            bytes = result.png_bytes.len(),
            "Wrote dithered image"
        );
        Ok(result)
    }
}
