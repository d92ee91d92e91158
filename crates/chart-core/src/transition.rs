// File: crates/chart-core/src/transition.rs
// Summary: Timed interpolation between two values, and animated attributes that
//          replace an in-flight transition when retargeted.

use tracing::trace;

use crate::color::Rgba;
use crate::easing::Easing;
use crate::geometry::lerp;

/// Values that can be blended; `t` is eased progress (may leave [0, 1] for
/// overshooting curves).
pub trait Interpolate: Clone {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        lerp(*self, *to, t)
    }
}

impl Interpolate for Rgba {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(*to, t)
    }
}

/// A single transition from `from` to `to` starting at `start_ms`.
#[derive(Clone, Debug)]
pub struct Transition<T> {
    pub from: T,
    pub to: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { from, to, start_ms, duration_ms: duration_ms.max(0.0), easing }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// `from` until the start, exactly `to` once complete, blended in between.
    pub fn sample(&self, now_ms: f64) -> T {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            self.to.clone()
        } else if p <= 0.0 {
            self.from.clone()
        } else {
            self.from.interpolate(&self.to, self.easing.apply(p))
        }
    }
}

/// A displayed attribute: a resting value plus at most one in-flight transition.
#[derive(Clone, Debug)]
pub struct Animated<T> {
    value: T,
    transition: Option<Transition<T>>,
}

impl<T: Interpolate> Animated<T> {
    pub fn new(value: T) -> Self {
        Self { value, transition: None }
    }

    /// Jump to `value`, cancelling any transition.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.transition = None;
    }

    /// Start animating towards `target` from whatever is displayed at `now_ms`.
    /// An in-flight transition is superseded.
    pub fn animate(&mut self, target: T, now_ms: f64, duration_ms: f64, easing: Easing) {
        if self.transition.is_some() {
            trace!(now_ms, "superseding in-flight transition");
        }
        let from = self.sample(now_ms);
        self.value = target.clone();
        self.transition = Some(Transition::new(from, target, now_ms, duration_ms, easing));
    }

    /// Displayed value at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> T {
        match &self.transition {
            Some(tr) => tr.sample(now_ms),
            None => self.value.clone(),
        }
    }

    /// Value this attribute is resting at or heading to.
    pub fn target(&self) -> &T {
        &self.value
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.transition.as_ref().is_some_and(|tr| !tr.is_complete(now_ms))
    }

    /// Drop a finished transition. Returns true if one was dropped.
    pub fn settle(&mut self, now_ms: f64) -> bool {
        if self.transition.as_ref().is_some_and(|tr| tr.is_complete(now_ms)) {
            self.transition = None;
            true
        } else {
            false
        }
    }
}
