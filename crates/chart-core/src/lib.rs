// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the month chart model, animator and surfaces.

pub mod animator;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod scene;
pub mod series;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod transition;
pub mod types;

pub use animator::{ChartAnimator, Direction, Frame};
pub use color::{ColorCycle, Rgba};
pub use config::AnimatorConfig;
pub use easing::Easing;
pub use error::{ChartError, Result};
pub use geometry::{Circle, Point, Rect};
pub use path::{DrawOp, Path};
pub use scene::{Gesture, Layout};
pub use series::{month_name, Dataset, Series};
pub use surface::{Recording, Surface};
pub use svg::SvgSurface;
pub use theme::Theme;
pub use transition::{Animated, Interpolate, Transition};
