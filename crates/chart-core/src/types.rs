// File: crates/chart-core/src/types.rs
// Summary: Shared constants (canvas size, series shape, timings, layout).

/// Canvas width in logical units.
pub const WIDTH: i32 = 620;
/// Canvas height in logical units.
pub const HEIGHT: i32 = 250;

/// One series per calendar month.
pub const MONTHS: usize = 12;
/// Default number of samples per series.
pub const SAMPLES: usize = 30;
/// Default inclusive upper bound of a sample value.
pub const SAMPLE_MAX: u32 = 200;

/// Month-to-month transition length (ms).
pub const TRANSITION_MS: f64 = 500.0;
/// Perturb transition length (ms).
pub const PERTURB_MS: f64 = 2000.0;
/// Perturb delta bound; deltas are drawn from `[-PERTURB_DELTA, PERTURB_DELTA]`.
pub const PERTURB_DELTA: i32 = 100;

/// Horizontal position of the first sample.
pub const PLOT_LEFT: f64 = 10.0;
/// Horizontal distance between consecutive samples.
pub const SAMPLE_STEP: f64 = 20.0;
/// Y coordinate of a zero sample (canvas y grows downward).
pub const BASELINE_Y: f64 = 240.0;
/// Y coordinate the filled area closes along.
pub const AREA_FLOOR_Y: f64 = 250.0;

/// Curve stroke width.
pub const CURVE_STROKE_WIDTH: f64 = 3.0;
/// Opacity applied to the filled area.
pub const AREA_OPACITY: f64 = 0.3;
/// Month label font size.
pub const LABEL_SIZE: f64 = 18.0;
