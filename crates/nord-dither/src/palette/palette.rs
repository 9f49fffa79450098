//! Nord palette constant and nearest-color matching.
//!
//! This module provides the [`NORD`] palette table and the matcher used by
//! the diffusion engine to quantize every pixel.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as real values, in `[r, g, b]` order.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// ```
    /// use nord_dither::palette::Rgb;
    ///
    /// let frost: Rgb = "#88C0D0".parse().unwrap();
    /// assert_eq!(frost, Rgb::new(136, 192, 208));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit expands to a repeated pair (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// The four named groups of the Nord palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteGroup {
    /// Dark base colors (nord0..nord3).
    PolarNight,
    /// Bright base colors (nord4..nord6).
    SnowStorm,
    /// Bluish accent colors (nord7..nord10).
    Frost,
    /// Colorful accent colors (nord11..nord15).
    Aurora,
}

impl PaletteGroup {
    /// Human readable group name.
    pub fn name(self) -> &'static str {
        match self {
            PaletteGroup::PolarNight => "Polar Night",
            PaletteGroup::SnowStorm => "Snow Storm",
            PaletteGroup::Frost => "Frost",
            PaletteGroup::Aurora => "Aurora",
        }
    }
}

impl fmt::Display for PaletteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Nord name, `nord0` through `nord15`.
    pub name: &'static str,
    /// Group the entry belongs to.
    pub group: PaletteGroup,
    /// The color itself.
    pub color: Rgb,
}

const fn entry(name: &'static str, group: PaletteGroup, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry {
        name,
        group,
        color: Rgb::new(r, g, b),
    }
}

/// The fixed 16-entry output palette.
///
/// Order matters: [`closest_index`] keeps the first of several equally
/// distant entries.
pub const NORD: [PaletteEntry; 16] = [
    entry("nord0", PaletteGroup::PolarNight, 46, 52, 64),
    entry("nord1", PaletteGroup::PolarNight, 59, 66, 82),
    entry("nord2", PaletteGroup::PolarNight, 67, 76, 94),
    entry("nord3", PaletteGroup::PolarNight, 76, 86, 106),
    entry("nord4", PaletteGroup::SnowStorm, 216, 222, 233),
    entry("nord5", PaletteGroup::SnowStorm, 229, 233, 240),
    entry("nord6", PaletteGroup::SnowStorm, 236, 239, 244),
    entry("nord7", PaletteGroup::Frost, 143, 188, 187),
    entry("nord8", PaletteGroup::Frost, 136, 192, 208),
    entry("nord9", PaletteGroup::Frost, 129, 161, 193),
    entry("nord10", PaletteGroup::Frost, 94, 129, 172),
    entry("nord11", PaletteGroup::Aurora, 191, 97, 106),
    entry("nord12", PaletteGroup::Aurora, 208, 135, 112),
    entry("nord13", PaletteGroup::Aurora, 235, 203, 139),
    entry("nord14", PaletteGroup::Aurora, 163, 190, 140),
    entry("nord15", PaletteGroup::Aurora, 180, 142, 173),
];

/// Euclidean distance in RGB space between a real-valued color and a
/// palette color.
#[inline]
pub fn color_distance(color: [f64; 3], target: Rgb) -> f64 {
    let [r, g, b] = color;
    let dr = r - target.r as f64;
    let dg = g - target.g as f64;
    let db = b - target.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Index of the palette entry closest to `(r, g, b)`.
///
/// Inputs need not be integral or within `0..=255`. Only a strictly
/// smaller distance replaces the current best, so ties go to the earlier
/// entry. If no distance compares below infinity (a NaN channel), entry 0
/// is returned.
pub fn closest_index(r: f64, g: f64, b: f64) -> usize {
    // Linear scan; 16 entries do not warrant an acceleration structure
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (i, entry) in NORD.iter().enumerate() {
        let dist = color_distance([r, g, b], entry.color);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

/// The palette color closest to `(r, g, b)`.
///
/// ```
/// use nord_dither::palette::{closest_color, Rgb};
///
/// assert_eq!(closest_color(0.0, 0.0, 0.0), Rgb::new(46, 52, 64));
/// assert_eq!(closest_color(255.0, 255.0, 255.0), Rgb::new(236, 239, 244));
/// ```
#[inline]
pub fn closest_color(r: f64, g: f64, b: f64) -> Rgb {
    NORD[closest_index(r, g, b)].color
}

/// Whether `color` is one of the palette entries.
pub fn contains(color: Rgb) -> bool {
    NORD.iter().any(|entry| entry.color == color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_sixteen_unique_entries() {
        let unique: HashSet<Rgb> = NORD.iter().map(|e| e.color).collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_palette_order_and_names() {
        for (i, entry) in NORD.iter().enumerate() {
            assert_eq!(entry.name, format!("nord{}", i));
        }
        assert_eq!(NORD[0].color, Rgb::new(46, 52, 64));
        assert_eq!(NORD[15].color, Rgb::new(180, 142, 173));
    }

    #[test]
    fn test_palette_groups() {
        let groups: Vec<PaletteGroup> = NORD.iter().map(|e| e.group).collect();
        assert_eq!(groups[..4], [PaletteGroup::PolarNight; 4]);
        assert_eq!(groups[4..7], [PaletteGroup::SnowStorm; 3]);
        assert_eq!(groups[7..11], [PaletteGroup::Frost; 4]);
        assert_eq!(groups[11..], [PaletteGroup::Aurora; 5]);
    }

    #[test]
    fn test_exact_palette_colors_match_themselves() {
        for (i, entry) in NORD.iter().enumerate() {
            let [r, g, b] = entry.color.to_f64();
            assert_eq!(closest_index(r, g, b), i, "{} should match itself", entry.name);
        }
    }

    #[test]
    fn test_black_maps_to_nord0() {
        assert_eq!(closest_color(0.0, 0.0, 0.0), NORD[0].color);
    }

    #[test]
    fn test_white_maps_to_nord6() {
        assert_eq!(closest_color(255.0, 255.0, 255.0), NORD[6].color);
    }

    #[test]
    fn test_fractional_and_out_of_range_inputs() {
        assert_eq!(closest_color(-500.0, -1.5, -0.25), NORD[0].color);
        assert_eq!(closest_color(1000.0, 1000.0, 1000.0), NORD[6].color);
        assert_eq!(closest_color(136.4, 191.6, 208.2), NORD[8].color);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // Midpoint between nord0 and nord1 on every channel is equidistant
        let mid = [
            (46.0 + 59.0) / 2.0,
            (52.0 + 66.0) / 2.0,
            (64.0 + 82.0) / 2.0,
        ];
        let d0 = color_distance(mid, NORD[0].color);
        let d1 = color_distance(mid, NORD[1].color);
        assert_eq!(d0, d1);
        assert_eq!(closest_index(mid[0], mid[1], mid[2]), 0);
    }

    #[test]
    fn test_nan_falls_back_to_first_entry() {
        assert_eq!(closest_index(f64::NAN, 0.0, 0.0), 0);
    }

    #[test]
    fn test_color_distance() {
        let d = color_distance([46.0, 52.0, 64.0], Rgb::new(49, 56, 64));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains() {
        assert!(contains(Rgb::new(94, 129, 172)));
        assert!(!contains(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_hex_round_trip_for_palette() {
        for entry in NORD.iter() {
            let parsed: Rgb = entry.color.to_hex().parse().unwrap();
            assert_eq!(parsed, entry.color);
        }
        assert_eq!(NORD[8].color.to_string(), "#88c0d0");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("#12345".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("ééé".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert!(matches!(
            "#gg0000".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_group_names() {
        assert_eq!(PaletteGroup::PolarNight.to_string(), "Polar Night");
        assert_eq!(PaletteGroup::Aurora.name(), "Aurora");
    }
}
