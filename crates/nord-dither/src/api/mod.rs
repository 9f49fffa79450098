//! Public API for the nord-dither crate.
//!
//! This module provides the high-level API: [`NordDitherer`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::NordDitherer;
pub use error::DitherError;
