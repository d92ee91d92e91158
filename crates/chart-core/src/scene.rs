// File: crates/chart-core/src/scene.rs
// Summary: Fixed chrome layout (label pill, navigation controls), click hit testing,
//          and chrome drawing.

use crate::geometry::{Circle, Point, Rect};
use crate::path::{Op, Path, Segment};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{HEIGHT, LABEL_SIZE, WIDTH};

/// A decoded click on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Previous,
    Next,
    Perturb,
}

/// A round button with an arrow glyph.
#[derive(Clone, Debug)]
pub struct Control {
    pub circle: Circle,
    pub arrow: Path,
}

impl Control {
    /// Arrow pointing right (`dir` = 1) or left (`dir` = -1), tip 10 units from `tail_x`.
    fn new(cx: f64, cy: f64, tail_x: f64, dir: f64) -> Self {
        let mut arrow = Path::new();
        arrow
            .move_to((tail_x, cy - 5.0))
            .push(Segment::rel(Op::Line(Point::new(10.0 * dir, 5.0))))
            .push(Segment::rel(Op::Line(Point::new(-10.0 * dir, 5.0))))
            .push(Segment::rel(Op::Close));
        Self { circle: Circle::new(cx, cy, 10.0), arrow }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.circle.contains(p) || self.arrow.bounds().is_some_and(|b| b.contains(p))
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub canvas: Rect,
    pub pill: Rect,
    pub pill_radius: f64,
    pub label_center: Point,
    pub previous: Control,
    pub next: Control,
}

impl Layout {
    pub fn hit_test(&self, p: Point) -> Option<Gesture> {
        if !self.canvas.contains(p) {
            return None;
        }
        if self.previous.contains(p) {
            Some(Gesture::Previous)
        } else if self.next.contains(p) {
            Some(Gesture::Next)
        } else {
            Some(Gesture::Perturb)
        }
    }

    /// Label pill, month label and both controls.
    pub fn draw_chrome(&self, surface: &mut impl Surface, theme: &Theme, label: &str) {
        surface.fill_round_rect(self.pill, self.pill_radius, theme.pill);
        surface.draw_text(self.label_center, label, LABEL_SIZE, theme.label);
        for control in [&self.previous, &self.next] {
            surface.fill_circle(control.circle, theme.control);
            surface.fill_path(&control.arrow, theme.arrow);
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas: Rect::from_ltwh(0.0, 0.0, WIDTH as f64, HEIGHT as f64),
            pill: Rect::from_ltwh(243.0, 14.0, 134.0, 26.0),
            pill_radius: 13.0,
            label_center: Point::new(310.0, 27.0),
            previous: Control::new(256.0, 27.0, 260.0, -1.0),
            next: Control::new(364.0, 27.0, 360.0, 1.0),
        }
    }
}
