// File: crates/chart-core/tests/config_load.rs
// Purpose: Config file loading and seeded construction.

use anyhow::Result;
use chart_core::{AnimatorConfig, ChartAnimator, ChartError};

#[test]
fn load_from_file_and_seed() -> Result<()> {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("chart_config.json");
    std::fs::write(&path, r#"{ "seed": 314, "theme": "light", "transition_easing": "backOut" }"#)?;

    let cfg = AnimatorConfig::load(&path)?;
    let a = ChartAnimator::from_config(cfg.clone())?;
    let b = ChartAnimator::with_seed(314);
    assert_eq!(a.theme().name, "light");
    for i in 0..12 {
        assert_eq!(a.dataset().series(i), b.dataset().series(i));
    }
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let err = AnimatorConfig::load("target/test_out/does_not_exist.json").unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}
