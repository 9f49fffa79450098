//! The fixed Nord palette and nearest-color matching.
//!
//! The palette is a compile-time constant of 16 entries. Entry order is
//! significant: when two entries are equally close to a color, the one
//! listed first wins.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::{
    closest_color, closest_index, color_distance, contains, PaletteEntry, PaletteGroup, Rgb, NORD,
};
