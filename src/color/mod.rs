//! Color handling for node styling
//!
//! Provides an RGB color type, a continuous gradient for numeric values and
//! a discrete palette for categorical values, plus the min-max
//! normalization used to map numeric columns into gradient positions.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGB color. Serializes as a `#rrggbb` hex string, the form the
/// visualization widget expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
            g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
            b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
        }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| format!("invalid color: {}", s))?;
        // Exactly six ASCII hex digits; the byte-range slices below are
        // only char-boundary-safe for ASCII input
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid color: {}", s));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid color: {}", s))
        };
        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

struct ColorVisitor;

impl Visitor<'_> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a #rrggbb hex color string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
        Color::from_str(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Continuous gradient sampled at positions in [0, 1]
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Build a gradient from evenly spaced stops. Needs at least two.
    pub fn new(stops: Vec<Color>) -> Self {
        assert!(stops.len() >= 2, "gradient needs at least two stops");
        Self { stops }
    }

    /// Perceptually uniform dark-purple to yellow gradient (default for
    /// numeric colorings)
    pub fn viridis() -> Self {
        Self::new(vec![
            Color::rgb(68, 1, 84),    // Deep purple
            Color::rgb(59, 82, 139),  // Indigo
            Color::rgb(33, 145, 140), // Teal
            Color::rgb(94, 201, 98),  // Green
            Color::rgb(253, 231, 37), // Yellow
        ])
    }

    /// Sample the gradient at position `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let i = (scaled.floor() as usize).min(segments - 1);
        self.stops[i].lerp(self.stops[i + 1], scaled - i as f64)
    }
}

/// Discrete palette for categorical values, cycling when the number of
/// groups exceeds the palette size
#[derive(Clone, Debug)]
pub struct DiscretePalette {
    colors: Vec<Color>,
}

impl DiscretePalette {
    /// Build a palette from explicit colors. Needs at least one.
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one color");
        Self { colors }
    }

    /// Muted ten-hue qualitative palette (default for categorical
    /// colorings)
    pub fn qualitative() -> Self {
        Self {
            colors: vec![
                Color::rgb(76, 114, 176),  // Blue
                Color::rgb(221, 132, 82),  // Orange
                Color::rgb(85, 168, 104),  // Green
                Color::rgb(196, 78, 82),   // Red
                Color::rgb(129, 114, 179), // Purple
                Color::rgb(147, 120, 96),  // Brown
                Color::rgb(218, 139, 195), // Pink
                Color::rgb(140, 140, 140), // Gray
                Color::rgb(204, 185, 116), // Olive
                Color::rgb(100, 181, 205), // Cyan
            ],
        }
    }

    /// Color for group index `i`
    pub fn color(&self, i: usize) -> Color {
        self.colors[i % self.colors.len()]
    }
}

/// Palette selection for the base graph builder
#[derive(Clone, Debug)]
pub enum Palette {
    Continuous(Gradient),
    Discrete(DiscretePalette),
}

/// Min-max normalize values into [0, 1].
///
/// When all values are (near) identical the range collapses; every value
/// maps to the midpoint 0.5 instead of dividing by zero.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if (max - min).abs() < 1e-10 {
        return vec![0.5; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}
