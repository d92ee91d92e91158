// File: crates/chart-core/src/series.rs
// Summary: Monthly sample series, their derived curve/area paths and colors.
// Notes:
// - Everything here is generated once from an injected RNG and never mutated;
//   accessors hand out shared references only.

use chrono::Month;
use rand::Rng;

use crate::color::{ColorCycle, Rgba};
use crate::geometry::Point;
use crate::grid::sample_columns;
use crate::path::Path;
use crate::types::{AREA_FLOOR_Y, BASELINE_Y, MONTHS};

/// Fixed sample sequence for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    samples: Vec<u32>,
}

impl Series {
    pub fn new(samples: Vec<u32>) -> Self {
        Self { samples }
    }

    /// `len` samples drawn uniformly from `0..=max`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u32) -> Self {
        Self { samples: (0..len).map(|_| rng.gen_range(0..=max)).collect() }
    }

    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Canvas positions: fixed columns, sample value measured up from the baseline.
    pub fn points(&self) -> Vec<Point> {
        sample_columns(self.samples.len())
            .into_iter()
            .zip(&self.samples)
            .map(|(x, &s)| Point::new(x, BASELINE_Y - s as f64))
            .collect()
    }

    pub fn to_path(&self) -> Path {
        Path::smooth_through(&self.points())
    }
}

/// The twelve series with their cached paths and colors.
#[derive(Clone, Debug)]
pub struct Dataset {
    series: Vec<Series>,
    curves: Vec<Path>,
    areas: Vec<Path>,
    colors: Vec<Rgba>,
}

impl Dataset {
    /// One series per month, `samples` long, values in `0..=sample_max`; colors
    /// come from a fresh color cycle at `brightness`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, samples: usize, sample_max: u32, brightness: f64) -> Self {
        let series: Vec<Series> = (0..MONTHS).map(|_| Series::random(rng, samples, sample_max)).collect();
        let mut palette = ColorCycle::new(brightness);
        let colors = (0..MONTHS).map(|_| palette.next_color()).collect();
        Self::from_parts(series, colors)
    }

    fn from_parts(series: Vec<Series>, colors: Vec<Rgba>) -> Self {
        let curves: Vec<Path> = series.iter().map(Series::to_path).collect();
        let areas = curves.iter().map(|c| c.close_to_floor(AREA_FLOOR_Y)).collect();
        Self { series, curves, areas, colors }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series(&self, index: usize) -> &Series {
        &self.series[index % self.series.len()]
    }

    pub fn curve(&self, index: usize) -> &Path {
        &self.curves[index % self.curves.len()]
    }

    pub fn area(&self, index: usize) -> &Path {
        &self.areas[index % self.areas.len()]
    }

    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }
}

/// English month name for a zero-based month index (wraps past December).
pub fn month_name(index: usize) -> &'static str {
    u8::try_from(index % MONTHS + 1)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::January)
        .name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn points_sit_on_columns_above_baseline() {
        let s = Series::new(vec![0, 200, 40]);
        let pts = s.points();
        assert_eq!(pts[0], Point::new(10.0, 240.0));
        assert_eq!(pts[1], Point::new(30.0, 40.0));
        assert_eq!(pts[2], Point::new(50.0, 200.0));
        assert_eq!(s.to_path().to_svg(), "M10,240C20,240,20,40,30,40C40,40,40,200,50,200");
    }

    #[test]
    fn random_series_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = Series::random(&mut rng, 30, 200);
        assert_eq!(s.len(), 30);
        assert!(s.samples().iter().all(|&v| v <= 200));
    }

    #[test]
    fn dataset_is_reproducible_per_seed() {
        let a = Dataset::generate(&mut StdRng::seed_from_u64(42), 30, 200, 1.0);
        let b = Dataset::generate(&mut StdRng::seed_from_u64(42), 30, 200, 1.0);
        let c = Dataset::generate(&mut StdRng::seed_from_u64(43), 30, 200, 1.0);
        assert_eq!(a.len(), MONTHS);
        for i in 0..MONTHS {
            assert_eq!(a.series(i), b.series(i));
            assert_eq!(a.curve(i), b.curve(i));
            assert_eq!(a.color(i), b.color(i));
        }
        assert!((0..MONTHS).any(|i| a.series(i) != c.series(i)));
    }

    #[test]
    fn area_extends_curve() {
        let d = Dataset::generate(&mut StdRng::seed_from_u64(1), 30, 200, 1.0);
        let curve = d.curve(3).to_svg();
        let area = d.area(3).to_svg();
        assert!(area.starts_with(&curve));
        assert!(area.ends_with("L590,250L10,250Z"));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(1), "February");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "January");
    }
}
