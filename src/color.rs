//! Hex color interpolation for route gradients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn channels(&self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parses `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The two colors a single leg is shaded between.
///
/// In [`blend`] the fraction weights `first`; `second` gets the remainder,
/// so a fraction of 0 yields `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub first: Rgb,
    pub second: Rgb,
}

impl ColorPair {
    pub const fn new(first: Rgb, second: Rgb) -> Self {
        Self { first, second }
    }

    pub fn from_hex(first: &str, second: &str) -> Result<Self, ColorError> {
        Ok(Self {
            first: first.parse()?,
            second: second.parse()?,
        })
    }
}

/// Linear interpolation between the pair, rounding each channel up.
pub fn blend(fraction: f64, colors: &ColorPair) -> String {
    blend_rgb(fraction, colors).to_string()
}

fn blend_rgb(fraction: f64, colors: &ColorPair) -> Rgb {
    let first = colors.first.channels();
    let second = colors.second.channels();

    let channel = |i: usize| {
        (first[i] * fraction + second[i] * (1.0 - fraction))
            .ceil()
            .clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(0), channel(1), channel(2))
}

/// Blend tuned for routes drawn in five steps (fractions 0, 0.2 .. 0.8).
///
/// The middle step (exactly 0.4) is the midpoint of the 0.2 and 0.8 colors,
/// and the back half is shifted by 0.2 toward `first` for more contrast.
pub fn blend_steps(fraction: f64, colors: &ColorPair) -> String {
    if fraction == 0.4 {
        let stretched = ColorPair::new(blend_rgb(0.2, colors), blend_rgb(0.8, colors));
        return blend(0.5, &stretched);
    }

    if fraction > 0.5 {
        return blend(fraction + 0.2, colors);
    }

    blend(fraction, colors)
}
