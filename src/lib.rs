//! Nordify - dither images to the Nord palette
//!
//! PNG I/O, configuration and the decode → dither → encode pipeline around
//! the `nord-dither` engine. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
