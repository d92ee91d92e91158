// File: crates/chart-core/src/config.rs
// Summary: Animator configuration with defaults, JSON loading and validation.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{ChartError, Result};
use crate::types::{BASELINE_Y, PERTURB_DELTA, PERTURB_MS, SAMPLES, SAMPLE_MAX, TRANSITION_MS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Samples per month.
    pub samples: usize,
    /// Inclusive upper bound for a sample value.
    pub sample_max: u32,
    pub transition_ms: f64,
    pub transition_easing: Easing,
    pub perturb_ms: f64,
    pub perturb_easing: Easing,
    /// Perturb deltas are drawn from `[-perturb_delta, perturb_delta]`.
    pub perturb_delta: i32,
    pub palette_brightness: f64,
    /// Seed for the series RNG; hosts pick an entropy seed when unset.
    pub seed: Option<u64>,
    pub theme: String,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            samples: SAMPLES,
            sample_max: SAMPLE_MAX,
            transition_ms: TRANSITION_MS,
            transition_easing: Easing::EaseInOut,
            perturb_ms: PERTURB_MS,
            perturb_easing: Easing::Linear,
            perturb_delta: PERTURB_DELTA,
            palette_brightness: 1.0,
            seed: None,
            theme: "dark".to_string(),
        }
    }
}

impl AnimatorConfig {
    pub fn from_json_str(src: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ChartError::InvalidConfig(msg));
        if self.samples < 2 {
            return invalid(format!("samples must be at least 2, got {}", self.samples));
        }
        if self.sample_max as f64 > BASELINE_Y {
            return invalid(format!("sample_max must be at most {BASELINE_Y}, got {}", self.sample_max));
        }
        for (name, ms) in [("transition_ms", self.transition_ms), ("perturb_ms", self.perturb_ms)] {
            if !ms.is_finite() || ms < 0.0 {
                return invalid(format!("{name} must be a finite, non-negative duration, got {ms}"));
            }
        }
        if self.perturb_delta < 0 {
            return invalid(format!("perturb_delta must be non-negative, got {}", self.perturb_delta));
        }
        if !(0.0..=1.0).contains(&self.palette_brightness) {
            return invalid(format!("palette_brightness must be in [0, 1], got {}", self.palette_brightness));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AnimatorConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.samples, 30);
        assert_eq!(cfg.transition_easing, Easing::EaseInOut);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = AnimatorConfig::from_json_str(r#"{ "seed": 9, "perturb_easing": "bounce" }"#).unwrap();
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.perturb_easing, Easing::Bounce);
        assert_eq!(cfg.transition_ms, 500.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AnimatorConfig::from_json_str(r#"{ "samples": 1 }"#),
            Err(ChartError::InvalidConfig(_))
        ));
        assert!(matches!(
            AnimatorConfig::from_json_str(r#"{ "transition_ms": -5 }"#),
            Err(ChartError::InvalidConfig(_))
        ));
        for bad in [
            r#"{ "sample_max": 241 }"#,
            r#"{ "perturb_delta": -1 }"#,
            r#"{ "palette_brightness": 1.5 }"#,
            r#"{ "palette_brightness": -0.1 }"#,
            r#"{ "perturb_ms": -1 }"#,
        ] {
            assert!(matches!(AnimatorConfig::from_json_str(bad), Err(ChartError::InvalidConfig(_))), "{bad}");
        }
        assert!(AnimatorConfig::from_json_str(r#"{ "sample_max": 240, "perturb_delta": 0, "palette_brightness": 0 }"#).is_ok());
        assert!(matches!(
            AnimatorConfig::from_json_str(r#"{ "transition_easing": "wobble" }"#),
            Err(ChartError::Json(_))
        ));
        assert!(matches!(
            AnimatorConfig::from_json_str(r#"{ "colour": "red" }"#),
            Err(ChartError::Json(_))
        ));
    }
}
