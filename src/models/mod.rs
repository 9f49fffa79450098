pub mod config;

pub use config::{AccumulatorSetting, DitherConfig, DitherOverrides, CONFIG_ENV};
