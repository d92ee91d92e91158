// File: crates/chart-render-skia/src/text.rs
// Summary: Month label shaping with Skia textlayout; thin sans face, centered on a point.

use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const LABEL_FAMILIES: &[&str] = &["Helvetica Neue", "Helvetica", "Arial Unicode MS", "Arial", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
    paragraph: ParagraphStyle,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        let mut paragraph = ParagraphStyle::new();
        paragraph.set_text_align(TextAlign::Left);
        paragraph.set_max_lines(1);
        Self { fonts, paragraph }
    }

    fn shape(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_style(skia::FontStyle::new(Weight::THIN, Width::NORMAL, Slant::Upright));
        style.set_font_families(LABEL_FAMILIES);

        let mut builder = ParagraphBuilder::new(&self.paragraph, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut shaped = builder.build();
        shaped.layout(10_000.0);
        shaped
    }

    /// Paint `text` centered on (`cx`, `cy`).
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let shaped = self.shape(text, size, color);
        let (w, h) = (shaped.longest_line(), shaped.height());
        shaped.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
