// File: crates/demo/src/main.rs
// Summary: Demo plays a gesture script (next/prev/perturb) through the month chart animator
//          and writes each sampled frame to PNG, plus an SVG of every settled state.

use anyhow::{Context, Result};
use chart_core::{AnimatorConfig, ChartAnimator, Gesture, SvgSurface};
use chart_core::types::{HEIGHT, WIDTH};
use chart_render_skia::{render_to_png, RenderOptions};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Step {
    Next,
    Prev,
    Perturb,
}

impl From<Step> for Gesture {
    fn from(step: Step) -> Self {
        match step {
            Step::Next => Gesture::Next,
            Step::Prev => Gesture::Previous,
            Step::Perturb => Gesture::Perturb,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "month-chart-demo", about = "Render month chart transitions to PNG/SVG frames")]
struct Args {
    /// JSON animator config; unset fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Series seed, overrides the config's seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Theme preset name (dark, light), overrides the config's theme.
    #[arg(long)]
    theme: Option<String>,

    /// Output directory for frames.
    #[arg(long, default_value = "target/month_chart_frames")]
    out: PathBuf,

    /// Frames sampled per second of animation.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output scale relative to the 620x250 canvas.
    #[arg(long, default_value_t = 1)]
    scale: i32,

    /// Skip month labels (useful where system fonts differ).
    #[arg(long)]
    no_labels: bool,

    /// Gestures to play in order.
    #[arg(value_enum, default_values_t = [Step::Next, Step::Next, Step::Perturb, Step::Prev])]
    script: Vec<Step>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AnimatorConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => AnimatorConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    anyhow::ensure!(args.fps > 0, "fps must be positive");
    anyhow::ensure!(args.scale > 0, "scale must be positive");

    let mut animator = ChartAnimator::from_config(config)?;
    let opts = RenderOptions {
        width: WIDTH * args.scale,
        height: HEIGHT * args.scale,
        draw_labels: !args.no_labels,
    };
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create '{}'", args.out.display()))?;

    let frame_ms = 1000.0 / args.fps as f64;
    let mut now = 0.0;
    let mut frame = 0usize;

    write_svg(&animator, now, &args.out, 0)?;
    for (i, step) in args.script.iter().enumerate() {
        animator.handle((*step).into(), now);
        info!(step = ?step, label = animator.label(), "gesture");
        loop {
            let path = args.out.join(format!("frame_{frame:04}.png"));
            render_to_png(&animator, now, &opts, &path)
                .with_context(|| format!("failed to render '{}'", path.display()))?;
            frame += 1;
            if !animator.is_animating(now) {
                break;
            }
            now += frame_ms;
        }
        animator.settle(now);
        write_svg(&animator, now, &args.out, i + 1)?;
    }

    println!("Wrote {frame} frames to {}", args.out.display());
    Ok(())
}

fn write_svg(animator: &ChartAnimator, now_ms: f64, dir: &std::path::Path, index: usize) -> Result<()> {
    let path = dir.join(format!("state_{index:02}_{}.svg", animator.label().to_lowercase()));
    let mut svg = SvgSurface::new(WIDTH, HEIGHT);
    animator.render(&mut svg, now_ms);
    svg.write_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
