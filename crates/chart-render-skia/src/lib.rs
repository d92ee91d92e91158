// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the chart `Surface`; renders animator frames
//          to PNG bytes/files or RGBA8 buffers.

pub mod text;

use chart_core::path::DrawOp;
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{ChartAnimator, Circle, Path, Point, Rect, Rgba, Surface};
use rand::Rng;
use skia_safe as skia;
use thiserror::Error;
use tracing::trace;

pub use text::TextShaper;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("encode PNG failed")]
    Encode,
    #[error("reading pixels back from the surface failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Output size in pixels; the 620x250 canvas is scaled to fit.
    pub width: i32,
    pub height: i32,
    /// Skip text; labels depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}

/// RGBA8 pixels with width, height and row stride in bytes.
pub type RgbaFrame = (Vec<u8>, u32, u32, usize);

pub struct SkiaSurface {
    surface: skia::Surface,
    text: Option<TextShaper>,
    width: i32,
    height: i32,
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for op in path.draw_ops() {
        match op {
            DrawOp::MoveTo(p) => { out.move_to(pt(p)); }
            DrawOp::LineTo(p) => { out.line_to(pt(p)); }
            DrawOp::QuadTo(c, p) => { out.quad_to(pt(c), pt(p)); }
            DrawOp::CubicTo(a, b, p) => { out.cubic_to(pt(a), pt(b), pt(p)); }
            DrawOp::Close => { out.close(); }
        }
    }
    out
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

impl SkiaSurface {
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface(opts.width, opts.height))?;
        let sx = opts.width as f32 / WIDTH as f32;
        let sy = opts.height as f32 / HEIGHT as f32;
        surface.canvas().scale((sx, sy));
        Ok(Self {
            surface,
            text: opts.draw_labels.then(TextShaper::new),
            width: opts.width,
            height: opts.height,
        })
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn rgba8(&mut self) -> Result<RgbaFrame> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, c: Rgba) {
        self.surface.canvas().clear(color(c));
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, c: Rgba) {
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.surface.canvas().draw_round_rect(r, radius as f32, radius as f32, &fill_paint(c));
    }

    fn fill_circle(&mut self, circle: Circle, c: Rgba) {
        self.surface.canvas().draw_circle(pt(circle.center), circle.radius as f32, &fill_paint(c));
    }

    fn fill_path(&mut self, path: &Path, c: Rgba) {
        self.surface.canvas().draw_path(&to_skia_path(path), &fill_paint(c));
    }

    fn stroke_path(&mut self, path: &Path, c: Rgba, width: f64) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width as f32);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(color(c));
        self.surface.canvas().draw_path(&to_skia_path(path), &stroke);
    }

    fn draw_text(&mut self, center: Point, text: &str, size: f64, c: Rgba) {
        let Some(shaper) = &self.text else { return };
        let canvas = self.surface.canvas();
        shaper.draw_centered(canvas, text, center.x as f32, center.y as f32, size as f32, color(c));
    }
}

/// Render the animator's frame at `now_ms` to PNG bytes.
pub fn render_png_bytes<R: Rng>(animator: &ChartAnimator<R>, now_ms: f64, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = SkiaSurface::new(opts)?;
    animator.render(&mut surface, now_ms);
    trace!(now_ms, label = animator.label(), "rendered frame");
    surface.png_bytes()
}

/// Render the animator's frame at `now_ms` to a PNG file, creating parent directories.
pub fn render_to_png<R: Rng>(
    animator: &ChartAnimator<R>,
    now_ms: f64,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_png_bytes(animator, now_ms, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render the animator's frame at `now_ms` to an RGBA8 buffer.
pub fn render_rgba8<R: Rng>(animator: &ChartAnimator<R>, now_ms: f64, opts: &RenderOptions) -> Result<RgbaFrame> {
    let mut surface = SkiaSurface::new(opts)?;
    animator.render(&mut surface, now_ms);
    surface.rgba8()
}
