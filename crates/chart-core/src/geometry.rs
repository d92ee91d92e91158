// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for canvas math and hit testing.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Inclusive on all edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Filled circle, used for the navigation controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { center: Point::new(cx, cy), radius }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_contains_edge() {
        let c = Circle::new(10.0, 10.0, 5.0);
        assert!(c.contains(Point::new(15.0, 10.0)));
        assert!(!c.contains(Point::new(15.1, 10.0)));
    }

    #[test]
    fn rect_dims() {
        let r = Rect::from_ltwh(243.0, 14.0, 134.0, 26.0);
        assert_eq!(r.right, 377.0);
        assert_eq!(r.height(), 26.0);
        assert!(r.contains(Point::new(300.0, 27.0)));
    }
}
