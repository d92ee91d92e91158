// File: crates/chart-core/src/surface.rs
// Summary: Host drawing primitives the animator renders onto, plus a recording
//          implementation for inspecting what was drawn.

use crate::color::Rgba;
use crate::geometry::{Circle, Point, Rect};
use crate::path::Path;

/// Drawing primitives a host must provide. Coordinates are canvas units with
/// y pointing down.
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba);
    fn fill_circle(&mut self, circle: Circle, color: Rgba);
    fn fill_path(&mut self, path: &Path, color: Rgba);
    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64);
    /// Text centered horizontally and vertically on `center`.
    fn draw_text(&mut self, center: Point, text: &str, size: f64, color: Rgba);
}

/// One recorded call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    RoundRect { rect: Rect, radius: f64, color: Rgba },
    Circle { circle: Circle, color: Rgba },
    FillPath { path: Path, color: Rgba },
    StrokePath { path: Path, color: Rgba, width: f64 },
    Text { center: Point, text: String, size: f64, color: Rgba },
}

/// Surface that keeps every call; useful in tests and for replaying a frame.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    pub calls: Vec<DrawCall>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay onto another surface.
    pub fn replay(&self, target: &mut impl Surface) {
        for call in &self.calls {
            match call {
                DrawCall::Clear(c) => target.clear(*c),
                DrawCall::RoundRect { rect, radius, color } => target.fill_round_rect(*rect, *radius, *color),
                DrawCall::Circle { circle, color } => target.fill_circle(*circle, *color),
                DrawCall::FillPath { path, color } => target.fill_path(path, *color),
                DrawCall::StrokePath { path, color, width } => target.stroke_path(path, *color, *width),
                DrawCall::Text { center, text, size, color } => target.draw_text(*center, text, *size, *color),
            }
        }
    }
}

impl Surface for Recording {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::RoundRect { rect, radius, color });
    }
    fn fill_circle(&mut self, circle: Circle, color: Rgba) {
        self.calls.push(DrawCall::Circle { circle, color });
    }
    fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.calls.push(DrawCall::FillPath { path: path.clone(), color });
    }
    fn stroke_path(&mut self, path: &Path, color: Rgba, width: f64) {
        self.calls.push(DrawCall::StrokePath { path: path.clone(), color, width });
    }
    fn draw_text(&mut self, center: Point, text: &str, size: f64, color: Rgba) {
        self.calls.push(DrawCall::Text { center, text: text.to_string(), size, color });
    }
}
