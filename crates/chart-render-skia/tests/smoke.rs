// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG file and bytes, RGBA buffer shape and a few pixels.

use chart_core::{ChartAnimator, Direction};
use chart_render_skia::{render_png_bytes, render_rgba8, render_to_png, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut a = ChartAnimator::with_seed(11);
    a.advance(Direction::Forward, 0.0);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/month_smoke.png");
    render_to_png(&a, 250.0, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_png_bytes(&a, 250.0, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let a = ChartAnimator::with_seed(5);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = render_rgba8(&a, 0.0, &opts).expect("rgba render");
    assert_eq!((w, h), (620, 250));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left is opaque dark background
    assert_eq!(&px[0..4], &[0, 0, 0, 255]);

    // Inside the label pill, clear of the controls and the curve
    let at = 20 * stride + 290 * 4;
    assert_eq!(&px[at..at + 4], &[0x66, 0x66, 0x66, 255]);

    // Next control, above its arrow glyph
    let at = 19 * stride + 364 * 4;
    assert_eq!(&px[at..at + 4], &[255, 255, 255, 255]);
}

#[test]
fn scaled_output_keeps_requested_size() {
    let a = ChartAnimator::with_seed(5);
    let opts = RenderOptions { width: 1240, height: 500, draw_labels: false };
    let (px, w, h, stride) = render_rgba8(&a, 0.0, &opts).expect("rgba render");
    assert_eq!((w, h, stride), (1240, 500, 1240 * 4));
    assert_eq!(px.len(), stride * h as usize);
    // Pill interior at twice the logical coordinates
    let at = 40 * stride + 580 * 4;
    assert_eq!(&px[at..at + 4], &[0x66, 0x66, 0x66, 255]);
}
