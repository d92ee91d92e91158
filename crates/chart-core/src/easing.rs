// File: crates/chart-core/src/easing.rs
// Summary: Named easing curves used by transitions.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    BackIn,
    BackOut,
    Elastic,
    Bounce,
}

impl Easing {
    pub const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::Elastic,
        Easing::Bounce,
    ];

    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "<",
            Self::EaseOut => ">",
            Self::EaseInOut => "<>",
            Self::BackIn => "backIn",
            Self::BackOut => "backOut",
            Self::Elastic => "elastic",
            Self::Bounce => "bounce",
        }
    }

    /// Map linear progress to eased progress. Input is clamped to [0, 1] and
    /// both endpoints are returned exactly.
    pub fn apply(&self, n: f64) -> f64 {
        if !(n > 0.0) {
            return 0.0;
        }
        if n >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => n,
            Self::EaseIn => n.powf(1.7),
            Self::EaseOut => n.powf(0.48),
            Self::EaseInOut => ease_in_out(n),
            Self::BackIn => n * n * ((BACK_OVERSHOOT + 1.0) * n - BACK_OVERSHOOT),
            Self::BackOut => {
                let m = n - 1.0;
                m * m * ((BACK_OVERSHOOT + 1.0) * m + BACK_OVERSHOOT) + 1.0
            }
            Self::Elastic => 2f64.powf(-10.0 * n) * ((n - 0.075) * (2.0 * PI) / 0.3).sin() + 1.0,
            Self::Bounce => bounce(n),
        }
    }
}

/// Symmetric cubic: solves the cubic bezier (0,0)-(.42,0)-(.58,1)-(1,1) for x = n.
fn ease_in_out(n: f64) -> f64 {
    let q = 0.48 - n / 1.04;
    let big_q = (0.1734 + q * q).sqrt();
    let x = big_q - q;
    let y = -big_q - q;
    let t = x.cbrt() + y.cbrt() + 0.5;
    (1.0 - t) * 3.0 * t * t + t * t * t
}

fn bounce(n: f64) -> f64 {
    let s = 7.5625;
    let p = 2.75;
    if n < 1.0 / p {
        s * n * n
    } else if n < 2.0 / p {
        let m = n - 1.5 / p;
        s * m * m + 0.75
    } else if n < 2.5 / p {
        let m = n - 2.25 / p;
        s * m * m + 0.9375
    } else {
        let m = n - 2.625 / p;
        s * m * m + 0.984375
    }
}

impl FromStr for Easing {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let easing = match key.as_str() {
            "" | "linear" => Self::Linear,
            "<" | "easein" => Self::EaseIn,
            ">" | "easeout" => Self::EaseOut,
            "<>" | "easeinout" => Self::EaseInOut,
            "backin" => Self::BackIn,
            "backout" => Self::BackOut,
            "elastic" => Self::Elastic,
            "bounce" => Self::Bounce,
            _ => return Err(ChartError::UnknownEasing(s.to_string())),
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        e.name().to_string()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
