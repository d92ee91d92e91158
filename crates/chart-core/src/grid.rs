// File: crates/chart-core/src/grid.rs
// Summary: Sample placement helpers.

use crate::types::{PLOT_LEFT, SAMPLE_STEP};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// X positions for `n` samples laid out from the left edge at the fixed step.
pub fn sample_columns(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![PLOT_LEFT],
        _ => linspace(PLOT_LEFT, PLOT_LEFT + SAMPLE_STEP * (n - 1) as f64, n),
    }
}
