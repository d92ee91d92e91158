// File: crates/window-demo/src/main.rs
// Summary: Windowed month chart using winit + softbuffer. Clicks go through the animator's
//          hit test; Left/Right step months, Space perturbs, T switches theme. Frames are
//          rendered on the CPU with Skia and blitted as 0RGB pixels.

use anyhow::{anyhow, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{AnimatorConfig, ChartAnimator, Direction, Point, Theme};
use chart_render_skia::{render_rgba8, RenderOptions};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Debug, Parser)]
#[command(name = "month-chart-window-demo", about = "Interactive month chart window")]
struct Args {
    /// JSON animator config; unset fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Series seed, overrides the config's seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Theme preset name (dark, light).
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AnimatorConfig::load(path)?,
        None => AnimatorConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    let mut animator = ChartAnimator::from_config(config)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Month Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let start = Instant::now();
    let now_ms = move || start.elapsed().as_secs_f64() * 1000.0;
    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;

    let mut draw = move |animator: &ChartAnimator, size: winit::dpi::PhysicalSize<u32>, now: f64| -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface.resize(w, h).map_err(|e| anyhow!("resize: {e:?}"))?;
        let opts = RenderOptions { width: w.get() as i32, height: h.get() as i32, draw_labels: true };
        let (rgba, _, _, _) = render_rgba8(animator, now, &opts)?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e:?}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("present: {e:?}"))
    };

    event_loop.run(move |event, _, cf| {
        let now = now_ms();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => cursor = Some((position.x, position.y)),
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        // Window pixels back to canvas units
                        let at = Point::new(
                            x * WIDTH as f64 / size.width.max(1) as f64,
                            y * HEIGHT as f64 / size.height.max(1) as f64,
                        );
                        let gesture = animator.click(at, now);
                        debug!(?gesture, x = at.x, y = at.y, "click");
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    match key {
                        VirtualKeyCode::Right => animator.advance(Direction::Forward, now),
                        VirtualKeyCode::Left => animator.advance(Direction::Backward, now),
                        VirtualKeyCode::Space => {
                            animator.perturb(now);
                        }
                        VirtualKeyCode::T => {
                            let next = if animator.theme().name == "dark" { Theme::light() } else { Theme::dark() };
                            animator.set_theme(next);
                        }
                        VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                        _ => {}
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if animator.is_animating(now) {
                    window.request_redraw();
                } else {
                    animator.settle(now);
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&animator, size, now) {
                    warn!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
        if *cf != ControlFlow::Exit {
            *cf = if animator.is_animating(now) { ControlFlow::Poll } else { ControlFlow::Wait };
        }
    });
}
