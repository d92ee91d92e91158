// File: crates/chart-core/src/color.rs
// Summary: RGBA color, hex parsing, HSB conversion and the per-series color cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `opacity` (clamped to [0, 1]).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// HSB/HSV to RGB; all inputs in [0, 1].
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let h = (h.rem_euclid(1.0)) * 6.0;
        let s = s.clamp(0.0, 1.0);
        let v = b.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        let to = |f: f64| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to(r), to(g), to(b))
    }

    /// Per-channel linear interpolation.
    pub fn lerp(&self, other: Rgba, t: f64) -> Rgba {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
        match hex.len() {
            3 => Ok(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgba::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

const HUE_STEP: f64 = 0.075;
const SATURATION_STEP: f64 = 0.2;

/// Deterministic palette walking the hue wheel, then lowering saturation.
///
/// Each call to [`ColorCycle::next_color`] yields the current HSB color and
/// steps hue by 0.075; once hue passes 1 it wraps to 0 and saturation drops by
/// 0.2, restarting at full saturation when it is used up.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl ColorCycle {
    pub fn new(brightness: f64) -> Self {
        Self { hue: 0.0, saturation: 1.0, brightness: brightness.clamp(0.0, 1.0) }
    }

    pub fn next_color(&mut self) -> Rgba {
        let color = Rgba::from_hsb(self.hue, self.saturation, self.brightness);
        self.hue += HUE_STEP;
        if self.hue > 1.0 {
            self.hue = 0.0;
            self.saturation -= SATURATION_STEP;
            if self.saturation <= 0.0 {
                self.saturation = 1.0;
            }
        }
        color
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(0.75)
    }
}

impl Iterator for ColorCycle {
    type Item = Rgba;
    fn next(&mut self) -> Option<Rgba> {
        Some(self.next_color())
    }
}
