// File: crates/chart-core/src/svg.rs
// Summary: Surface implementation that writes a standalone SVG document.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Circle, Point, Rect};
use crate::path::Path;
use crate::surface::Surface;

pub struct SvgSurface {
    width: i32,
    height: i32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    pub fn write_to(self, path: impl AsRef<std::path::Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.finish())?;
        Ok(())
    }
}

/// `fill="#rrggbb"` plus an opacity attribute when alpha is below 255.
fn paint_attrs(kind: &str, c: Rgba) -> String {
    let hex = Rgba { a: 255, ..c }.to_hex();
    if c.a == 255 {
        format!("{kind}=\"{hex}\"")
    } else {
        format!("{kind}=\"{hex}\" {kind}-opacity=\"{:.3}\"", c.a as f64 / 255.0)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        let _ = writeln!(
            self.body,
            "  <rect width=\"{}\" height=\"{}\" {}/>",
            self.width,
            self.height,
            paint_attrs("fill", color)
        );
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{radius}\" {}/>",
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            paint_attrs("fill", color)
        );
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            paint_attrs("fill", color)
        );
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        let _ = writeln!(self.body, "  <path d=\"{}\" {} stroke=\"none\"/>", path.to_svg(), paint_attrs("fill", color));
    }

    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64) {
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"none\" {} stroke-width=\"{width}\"/>",
            path.to_svg(),
            paint_attrs("stroke", color)
        );
    }

    fn draw_text(&mut self, center: Point, text: &str, size: f64, color: Rgba) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-size=\"{size}\" font-family=\"Helvetica Neue, Helvetica, Arial, sans-serif\" text-anchor=\"middle\" dominant-baseline=\"central\" {}>{}</text>",
            center.x,
            center.y,
            paint_attrs("fill", color),
            escape(text)
        );
    }
}
