// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for the chart chrome (background, label pill, controls).

use crate::color::Rgba;
use crate::types::AREA_OPACITY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub pill: Rgba,
    pub label: Rgba,
    pub control: Rgba,
    pub arrow: Rgba,
    /// Opacity of the filled area under the curve.
    pub area_opacity: f64,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            pill: Rgba::rgb(0x66, 0x66, 0x66),
            label: Rgba::rgb(0xff, 0xff, 0xff),
            control: Rgba::rgb(0xff, 0xff, 0xff),
            arrow: Rgba::rgb(0x00, 0x00, 0x00),
            area_opacity: AREA_OPACITY,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            pill: Rgba::rgb(0x66, 0x66, 0x66),
            label: Rgba::rgb(0xff, 0xff, 0xff),
            control: Rgba::rgb(0x33, 0x33, 0x33),
            arrow: Rgba::rgb(0xff, 0xff, 0xff),
            area_opacity: 0.25,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
