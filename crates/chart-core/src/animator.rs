// File: crates/chart-core/src/animator.rs
// Summary: ChartAnimator: month cursor, next/previous transitions, perturb gesture,
//          frame sampling and rendering onto a host surface.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::color::Rgba;
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::path::Path;
use crate::scene::{Gesture, Layout};
use crate::series::{month_name, Dataset};
use crate::surface::Surface;
use crate::theme::{self, Theme};
use crate::transition::Animated;
use crate::types::{CURVE_STROKE_WIDTH, MONTHS, SAMPLE_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 or -1.
    pub const fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub curve: Path,
    pub stroke: Rgba,
    pub area: Path,
    pub fill: Rgba,
    pub label: &'static str,
}

pub struct ChartAnimator<R = StdRng> {
    config: AnimatorConfig,
    dataset: Dataset,
    cursor: usize,
    curve: Animated<Path>,
    stroke: Animated<Rgba>,
    area: Animated<Path>,
    fill: Animated<Rgba>,
    layout: Layout,
    theme: Theme,
    rng: R,
}

impl ChartAnimator<StdRng> {
    /// Default configuration with a seeded RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(StdRng::seed_from_u64(seed), AnimatorConfig::default())
    }

    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: AnimatorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, config)
    }
}

impl<R: Rng> ChartAnimator<R> {
    /// Generate the twelve series from `rng` and show January at rest.
    pub fn new(rng: R, config: AnimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(rng, config))
    }

    fn build(mut rng: R, config: AnimatorConfig) -> Self {
        let dataset = Dataset::generate(&mut rng, config.samples, config.sample_max, config.palette_brightness);
        let theme = theme::find(&config.theme);
        let cursor = 0;
        debug!(samples = config.samples, theme = theme.name, "chart animator initialized");
        Self {
            curve: Animated::new(dataset.curve(cursor).clone()),
            stroke: Animated::new(dataset.color(cursor)),
            area: Animated::new(dataset.area(cursor).clone()),
            fill: Animated::new(dataset.color(cursor)),
            config,
            dataset,
            cursor,
            layout: Layout::default(),
            theme,
            rng,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Month name shown for the current cursor.
    pub fn label(&self) -> &'static str {
        month_name(self.cursor)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Step the cursor with wraparound and animate curve, area and colors to the
    /// new month. The label switches immediately.
    pub fn advance(&mut self, direction: Direction, now_ms: f64) {
        self.cursor = (self.cursor as isize + direction.step()).rem_euclid(MONTHS as isize) as usize;
        let (ms, easing) = (self.config.transition_ms, self.config.transition_easing);
        let color = self.dataset.color(self.cursor);
        self.curve.animate(self.dataset.curve(self.cursor).clone(), now_ms, ms, easing);
        self.stroke.animate(color, now_ms, ms, easing);
        self.area.animate(self.dataset.area(self.cursor).clone(), now_ms, ms, easing);
        self.fill.animate(color, now_ms, ms, easing);
        debug!(cursor = self.cursor, label = self.label(), ?direction, "advance");
    }

    /// Animate the curve into the current month's path scrolled one step left
    /// with a new random tail span. Stored series are untouched. Returns the
    /// drawn delta.
    pub fn perturb(&mut self, now_ms: f64) -> i32 {
        let bound = self.config.perturb_delta;
        let delta = self.rng.gen_range(-bound..=bound);
        let target = self.dataset.curve(self.cursor).shift_with_tail(delta as f64, SAMPLE_STEP);
        self.curve.animate(target, now_ms, self.config.perturb_ms, self.config.perturb_easing);
        debug!(cursor = self.cursor, delta, "perturb");
        delta
    }

    pub fn handle(&mut self, gesture: Gesture, now_ms: f64) {
        match gesture {
            Gesture::Previous => self.advance(Direction::Backward, now_ms),
            Gesture::Next => self.advance(Direction::Forward, now_ms),
            Gesture::Perturb => {
                self.perturb(now_ms);
            }
        }
    }

    /// Hit-test a click and dispatch it. Clicks off the canvas are ignored.
    pub fn click(&mut self, at: Point, now_ms: f64) -> Option<Gesture> {
        let gesture = self.layout.hit_test(at)?;
        self.handle(gesture, now_ms);
        Some(gesture)
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.curve.is_animating(now_ms)
            || self.stroke.is_animating(now_ms)
            || self.area.is_animating(now_ms)
            || self.fill.is_animating(now_ms)
    }

    /// Drop finished transitions so later frames skip interpolation.
    pub fn settle(&mut self, now_ms: f64) {
        self.curve.settle(now_ms);
        self.stroke.settle(now_ms);
        self.area.settle(now_ms);
        self.fill.settle(now_ms);
    }

    pub fn frame(&self, now_ms: f64) -> Frame {
        Frame {
            curve: self.curve.sample(now_ms),
            stroke: self.stroke.sample(now_ms),
            area: self.area.sample(now_ms),
            fill: self.fill.sample(now_ms),
            label: self.label(),
        }
    }

    /// Background, filled area, curve, then chrome and label on top.
    pub fn render(&self, surface: &mut impl Surface, now_ms: f64) {
        let frame = self.frame(now_ms);
        surface.clear(self.theme.background);
        surface.fill_path(&frame.area, frame.fill.with_opacity(self.theme.area_opacity));
        surface.stroke_path(&frame.curve, frame.stroke, CURVE_STROKE_WIDTH);
        self.layout.draw_chrome(surface, &self.theme, frame.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_steps() {
        assert_eq!(Direction::Forward.step(), 1);
        assert_eq!(Direction::Backward.step(), -1);
    }

    #[test]
    fn starts_on_january_at_rest() {
        let a = ChartAnimator::with_seed(3);
        assert_eq!(a.cursor(), 0);
        assert_eq!(a.label(), "January");
        assert!(!a.is_animating(0.0));
        let f = a.frame(0.0);
        assert_eq!(&f.curve, a.dataset().curve(0));
        assert_eq!(f.stroke, a.dataset().color(0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = AnimatorConfig { samples: 0, ..AnimatorConfig::default() };
        assert!(ChartAnimator::new(StdRng::seed_from_u64(1), cfg).is_err());
    }
}
