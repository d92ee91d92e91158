// File: crates/chart-core/src/path.rs
// Summary: SVG-style path model: building smooth curves, parsing/formatting `d` strings,
//          absolute/relative conversion, cubic normalization and interpolation.
// Notes:
// - Segments keep the command kind and its relative flag so a parsed path formats
//   back to the same command sequence.
// - `draw_ops` is what renderers consume: absolute move/line/quad/cubic/close only.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::transition::Interpolate;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Move(Point),
    Line(Point),
    Horizontal(f64),
    Vertical(f64),
    /// control 1, control 2, end
    Cubic(Point, Point, Point),
    /// control 2, end; control 1 mirrors the previous cubic
    SmoothCubic(Point, Point),
    /// control, end
    Quad(Point, Point),
    Close,
}

impl Op {
    fn letter(&self) -> char {
        match self {
            Op::Move(_) => 'M',
            Op::Line(_) => 'L',
            Op::Horizontal(_) => 'H',
            Op::Vertical(_) => 'V',
            Op::Cubic(..) => 'C',
            Op::SmoothCubic(..) => 'S',
            Op::Quad(..) => 'Q',
            Op::Close => 'Z',
        }
    }

    fn coords(&self) -> Vec<f64> {
        match *self {
            Op::Move(p) | Op::Line(p) => vec![p.x, p.y],
            Op::Horizontal(v) | Op::Vertical(v) => vec![v],
            Op::Cubic(a, b, c) => vec![a.x, a.y, b.x, b.y, c.x, c.y],
            Op::SmoothCubic(a, b) | Op::Quad(a, b) => vec![a.x, a.y, b.x, b.y],
            Op::Close => Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub op: Op,
    pub relative: bool,
}

impl Segment {
    pub const fn abs(op: Op) -> Self {
        Self { op, relative: false }
    }
    pub const fn rel(op: Op) -> Self {
        Self { op, relative: true }
    }
}

/// Absolute drawing primitive produced by [`Path::draw_ops`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push(Segment::abs(Op::Move(p.into())))
    }

    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.push(Segment::abs(Op::Line(p.into())))
    }

    pub fn cubic_to(&mut self, c1: impl Into<Point>, c2: impl Into<Point>, to: impl Into<Point>) -> &mut Self {
        self.push(Segment::abs(Op::Cubic(c1.into(), c2.into(), to.into())))
    }

    pub fn rel_cubic_to(&mut self, c1: impl Into<Point>, c2: impl Into<Point>, to: impl Into<Point>) -> &mut Self {
        self.push(Segment::rel(Op::Cubic(c1.into(), c2.into(), to.into())))
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(Segment::abs(Op::Close))
    }

    /// Smooth curve through `points`: each span is a cubic whose control points sit
    /// halfway across the span at the heights of its two ends, giving horizontal
    /// tangents at every point.
    pub fn smooth_through(points: &[Point]) -> Path {
        let mut path = Path::new();
        let mut iter = points.iter().copied();
        let Some(first) = iter.next() else { return path };
        path.move_to(first);
        let mut prev = first;
        for p in iter {
            let half = (p.x - prev.x) / 2.0;
            path.cubic_to((prev.x + half, prev.y), (p.x - half, p.y), p);
            prev = p;
        }
        path
    }

    /// This path closed down to `floor_y` along its first and last x positions.
    pub fn close_to_floor(&self, floor_y: f64) -> Path {
        let (Some(start), Some(end)) = (self.start_point(), self.end_point()) else {
            return self.clone();
        };
        let mut area = self.clone();
        area.line_to((end.x, floor_y)).line_to((start.x, floor_y)).close();
        area
    }

    /// Drop the first span (the start point moves vertically to where it ended,
    /// so every later span shifts one step left) and append a relative span of
    /// width `step` rising by `delta`.
    pub fn shift_with_tail(&self, delta: f64, step: f64) -> Path {
        let mut rel = self.to_relative();
        if let Some(seg) = rel.segments.get_mut(1) {
            if let Op::Cubic(_, _, end) = seg.op {
                *seg = Segment::rel(Op::Move(Point::new(0.0, end.y)));
            }
        }
        let half = step / 2.0;
        rel.rel_cubic_to((half, 0.0), (half, delta), (step, delta));
        rel
    }

    pub fn start_point(&self) -> Option<Point> {
        self.draw_ops().into_iter().find_map(|op| match op {
            DrawOp::MoveTo(p) => Some(p),
            _ => None,
        })
    }

    pub fn end_point(&self) -> Option<Point> {
        let mut tracker = Tracker::default();
        let mut last = None;
        for seg in &self.segments {
            tracker.step(seg, |_| {});
            last = Some(tracker.current);
        }
        last
    }

    /// Same commands with absolute coordinates.
    pub fn to_absolute(&self) -> Path {
        let mut tracker = Tracker::default();
        let segments = self
            .segments
            .iter()
            .map(|seg| {
                let op = tracker.absolute_op(seg);
                tracker.step(seg, |_| {});
                Segment::abs(op)
            })
            .collect();
        Path { segments }
    }

    /// Same commands relative to the previous point; a leading move stays absolute.
    pub fn to_relative(&self) -> Path {
        let mut tracker = Tracker::default();
        let mut segments = Vec::with_capacity(self.segments.len());
        for (i, seg) in self.segments.iter().enumerate() {
            let abs = tracker.absolute_op(seg);
            let origin = tracker.current;
            let shift = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);
            let out = match abs {
                Op::Move(p) if i == 0 => Segment::abs(Op::Move(p)),
                Op::Move(p) => Segment::rel(Op::Move(shift(p))),
                Op::Line(p) => Segment::rel(Op::Line(shift(p))),
                Op::Horizontal(x) => Segment::rel(Op::Horizontal(x - origin.x)),
                Op::Vertical(y) => Segment::rel(Op::Vertical(y - origin.y)),
                Op::Cubic(a, b, c) => Segment::rel(Op::Cubic(shift(a), shift(b), shift(c))),
                Op::SmoothCubic(b, c) => Segment::rel(Op::SmoothCubic(shift(b), shift(c))),
                Op::Quad(a, c) => Segment::rel(Op::Quad(shift(a), shift(c))),
                Op::Close => Segment::rel(Op::Close),
            };
            tracker.step(seg, |_| {});
            segments.push(out);
        }
        Path { segments }
    }

    /// Absolute primitives for renderers: H/V become lines, S becomes a cubic with
    /// its mirrored control point.
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let mut tracker = Tracker::default();
        let mut ops = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            tracker.step(seg, |op| ops.push(op));
        }
        ops
    }

    /// Move and cubic segments only: lines, quads and closes become cubics so
    /// paths of different structure can be blended.
    pub fn to_cubics(&self) -> Path {
        let mut out = Path::new();
        let mut current = Point::default();
        let mut start = Point::default();
        for op in self.draw_ops() {
            match op {
                DrawOp::MoveTo(p) => {
                    out.move_to(p);
                    current = p;
                    start = p;
                }
                DrawOp::LineTo(p) => {
                    out.cubic_to(current, p, p);
                    current = p;
                }
                DrawOp::QuadTo(c, p) => {
                    let c1 = current.lerp(c, 2.0 / 3.0);
                    let c2 = p.lerp(c, 2.0 / 3.0);
                    out.cubic_to(c1, c2, p);
                    current = p;
                }
                DrawOp::CubicTo(a, b, p) => {
                    out.cubic_to(a, b, p);
                    current = p;
                }
                DrawOp::Close => {
                    if current != start {
                        out.cubic_to(current, start, start);
                    }
                    current = start;
                }
            }
        }
        out
    }

    /// Bounding box of all endpoints and control points.
    pub fn bounds(&self) -> Option<Rect> {
        let mut pts = Vec::new();
        for op in self.draw_ops() {
            match op {
                DrawOp::MoveTo(p) | DrawOp::LineTo(p) => pts.push(p),
                DrawOp::QuadTo(a, p) => pts.extend([a, p]),
                DrawOp::CubicTo(a, b, p) => pts.extend([a, b, p]),
                DrawOp::Close => {}
            }
        }
        let first = *pts.first()?;
        let init = Rect::from_ltrb(first.x, first.y, first.x, first.y);
        Some(pts.iter().fold(init, |r, p| {
            Rect::from_ltrb(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y))
        }))
    }

    /// SVG `d` attribute text, e.g. `M10,40C20,40,20,100,30,100`.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            let letter = seg.op.letter();
            out.push(if seg.relative { letter.to_ascii_lowercase() } else { letter });
            let coords: Vec<String> = seg.op.coords().into_iter().map(fmt_num).collect();
            out.push_str(&coords.join(","));
        }
        out
    }

    pub fn parse(src: &str) -> Result<Path> {
        Parser::new(src).parse()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

impl FromStr for Path {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl Interpolate for Path {
    /// Blends the cubic forms coordinate by coordinate. Moves are aligned first,
    /// then the shorter path is padded with zero-length cubics at its end point.
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        let (a, b) = align_moves(&self.to_cubics(), &to.to_cubics());
        let n = a.len().max(b.len());
        let pad_a = a.last().map_or_else(Point::default, |op| op.end());
        let pad_b = b.last().map_or_else(Point::default, |op| op.end());
        let mut out = Path::new();
        for i in 0..n {
            let sa = a.get(i).copied().unwrap_or(Op::Cubic(pad_a, pad_a, pad_a));
            let sb = b.get(i).copied().unwrap_or(Op::Cubic(pad_b, pad_b, pad_b));
            let op = match (sa, sb) {
                (Op::Move(p), Op::Move(q)) => Op::Move(p.lerp(q, t)),
                (Op::Cubic(a1, a2, a3), Op::Cubic(b1, b2, b3)) => {
                    Op::Cubic(a1.lerp(b1, t), a2.lerp(b2, t), a3.lerp(b3, t))
                }
                _ => sb,
            };
            out.push(Segment::abs(op));
        }
        out
    }
}

/// Absolute ops of two cubic forms with their moves lined up: wherever one side
/// moves and the other draws (or has ended), a zero-length move at that side's
/// current point is inserted so both lists advance together.
fn align_moves(a: &Path, b: &Path) -> (Vec<Op>, Vec<Op>) {
    let mut a: Vec<Op> = a.segments.iter().map(|s| s.op).collect();
    let mut b: Vec<Op> = b.segments.iter().map(|s| s.op).collect();
    let (mut cur_a, mut cur_b) = (Point::default(), Point::default());
    let mut i = 0;
    while i < a.len().max(b.len()) {
        match (a.get(i), b.get(i)) {
            (Some(Op::Move(_)), Some(Op::Cubic(..)) | None) => b.insert(i, Op::Move(cur_b)),
            (Some(Op::Cubic(..)) | None, Some(Op::Move(_))) => a.insert(i, Op::Move(cur_a)),
            _ => {}
        }
        if let Some(op) = a.get(i) {
            cur_a = op.end();
        }
        if let Some(op) = b.get(i) {
            cur_b = op.end();
        }
        i += 1;
    }
    (a, b)
}

impl Op {
    /// End point of an absolute move or cubic.
    fn end(&self) -> Point {
        match *self {
            Op::Move(p) | Op::Line(p) | Op::Cubic(_, _, p) | Op::SmoothCubic(_, p) | Op::Quad(_, p) => p,
            Op::Horizontal(_) | Op::Vertical(_) | Op::Close => Point::default(),
        }
    }
}

/// Tracks current point, subpath start and last cubic control while walking segments.
#[derive(Default)]
struct Tracker {
    current: Point,
    start: Point,
    last_c2: Option<Point>,
}

impl Tracker {
    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative { Point::new(self.current.x + p.x, self.current.y + p.y) } else { p }
    }

    fn absolute_op(&self, seg: &Segment) -> Op {
        let r = seg.relative;
        match seg.op {
            Op::Move(p) => Op::Move(self.resolve(p, r)),
            Op::Line(p) => Op::Line(self.resolve(p, r)),
            Op::Horizontal(x) => Op::Horizontal(if r { self.current.x + x } else { x }),
            Op::Vertical(y) => Op::Vertical(if r { self.current.y + y } else { y }),
            Op::Cubic(a, b, c) => Op::Cubic(self.resolve(a, r), self.resolve(b, r), self.resolve(c, r)),
            Op::SmoothCubic(b, c) => Op::SmoothCubic(self.resolve(b, r), self.resolve(c, r)),
            Op::Quad(a, c) => Op::Quad(self.resolve(a, r), self.resolve(c, r)),
            Op::Close => Op::Close,
        }
    }

    /// Advance past `seg`, emitting its absolute drawing primitive.
    fn step(&mut self, seg: &Segment, mut emit: impl FnMut(DrawOp)) {
        let mut c2 = None;
        match self.absolute_op(seg) {
            Op::Move(p) => {
                emit(DrawOp::MoveTo(p));
                self.current = p;
                self.start = p;
            }
            Op::Line(p) => {
                emit(DrawOp::LineTo(p));
                self.current = p;
            }
            Op::Horizontal(x) => {
                let p = Point::new(x, self.current.y);
                emit(DrawOp::LineTo(p));
                self.current = p;
            }
            Op::Vertical(y) => {
                let p = Point::new(self.current.x, y);
                emit(DrawOp::LineTo(p));
                self.current = p;
            }
            Op::Cubic(a, b, p) => {
                emit(DrawOp::CubicTo(a, b, p));
                self.current = p;
                c2 = Some(b);
            }
            Op::SmoothCubic(b, p) => {
                let a = match self.last_c2 {
                    Some(prev) => Point::new(2.0 * self.current.x - prev.x, 2.0 * self.current.y - prev.y),
                    None => self.current,
                };
                emit(DrawOp::CubicTo(a, b, p));
                self.current = p;
                c2 = Some(b);
            }
            Op::Quad(a, p) => {
                emit(DrawOp::QuadTo(a, p));
                self.current = p;
            }
            Op::Close => {
                emit(DrawOp::Close);
                self.current = self.start;
            }
        }
        self.last_c2 = c2;
    }
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, bytes: src.as_bytes(), pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut end = start;
        if matches!(self.bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let mut seen_dot = false;
        let mut seen_digit = false;
        while let Some(&b) = self.bytes.get(end) {
            match b {
                b'0'..=b'9' => seen_digit = true,
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            end += 1;
        }
        if seen_digit && matches!(self.bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(self.bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if matches!(self.bytes.get(exp), Some(b'0'..=b'9')) {
                while matches!(self.bytes.get(exp), Some(b'0'..=b'9')) {
                    exp += 1;
                }
                end = exp;
            }
        }
        if !seen_digit {
            return Err(ChartError::syntax(start, "expected number"));
        }
        self.pos = end;
        self.src[start..end]
            .parse::<f64>()
            .map_err(|e| ChartError::syntax(start, e.to_string()))
    }

    fn point(&mut self) -> Result<Point> {
        Ok(Point::new(self.number()?, self.number()?))
    }

    fn parse(mut self) -> Result<Path> {
        let mut path = Path::new();
        let mut previous: Option<u8> = None;
        loop {
            self.skip_separators();
            let Some(&b) = self.bytes.get(self.pos) else { break };
            let at = self.pos;
            let cmd = if b.is_ascii_alphabetic() {
                self.pos += 1;
                b
            } else {
                // implicit repetition; extra pairs after a move are lines
                match previous {
                    Some(b'M') => b'L',
                    Some(b'm') => b'l',
                    Some(b'Z' | b'z') | None => return Err(ChartError::syntax(at, "expected command")),
                    Some(c) => c,
                }
            };
            if path.is_empty() && !matches!(cmd, b'M' | b'm') {
                return Err(ChartError::syntax(at, "path must start with a moveto"));
            }
            let op = match cmd.to_ascii_uppercase() {
                b'M' => Op::Move(self.point()?),
                b'L' => Op::Line(self.point()?),
                b'H' => Op::Horizontal(self.number()?),
                b'V' => Op::Vertical(self.number()?),
                b'C' => Op::Cubic(self.point()?, self.point()?, self.point()?),
                b'S' => Op::SmoothCubic(self.point()?, self.point()?),
                b'Q' => Op::Quad(self.point()?, self.point()?),
                b'Z' => Op::Close,
                other => {
                    return Err(ChartError::syntax(at, format!("unknown command '{}'", other as char)));
                }
            };
            path.push(Segment { op, relative: cmd.is_ascii_lowercase() });
            previous = Some(cmd);
        }
        Ok(path)
    }
}
