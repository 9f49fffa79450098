use std::path::PathBuf;

use nord_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported PNG format: {color_type:?} at {bit_depth:?}")]
    UnsupportedFormat {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Cannot encode an empty image ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("Image too large for PNG: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid noise amount: {0}")]
    NoiseAmount(#[from] DitherError),
}
