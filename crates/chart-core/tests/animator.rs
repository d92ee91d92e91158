// File: crates/chart-core/tests/animator.rs
// Purpose: Navigation scenarios, wraparound, transition timing and perturb isolation.

use chart_core::{AnimatorConfig, ChartAnimator, Direction, DrawOp, Easing, Gesture, Point, Series};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "chart_core=debug".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn snapshot_series(a: &ChartAnimator) -> Vec<Series> {
    a.dataset().iter().cloned().collect()
}

#[test]
fn month_navigation_scenario() {
    init_tracing();
    let mut a = ChartAnimator::with_seed(2024);
    assert_eq!((a.cursor(), a.label()), (0, "January"));

    a.advance(Direction::Forward, 0.0);
    assert_eq!((a.cursor(), a.label()), (1, "February"));

    a.advance(Direction::Backward, 1000.0);
    a.advance(Direction::Backward, 2000.0);
    assert_eq!((a.cursor(), a.label()), (11, "December"));

    a.advance(Direction::Forward, 3000.0);
    assert_eq!((a.cursor(), a.label()), (0, "January"));
}

#[test]
fn twelve_steps_return_home() {
    let mut a = ChartAnimator::with_seed(5);
    for start in 0..12 {
        while a.cursor() != start {
            a.advance(Direction::Forward, 0.0);
        }
        for _ in 0..12 {
            a.advance(Direction::Forward, 0.0);
        }
        assert_eq!(a.cursor(), start);
    }
}

#[test]
fn transition_lands_exactly_on_target() {
    let mut a = ChartAnimator::with_seed(11);
    let start_curve = a.dataset().curve(0).clone();
    a.advance(Direction::Forward, 100.0);

    // Mid-flight: neither the old nor the new month.
    let mid = a.frame(350.0);
    assert!(a.is_animating(350.0));
    assert_ne!(&mid.curve, a.dataset().curve(1));
    assert_ne!(mid.curve, start_curve);

    // At and after the 500 ms mark the target is shown verbatim.
    for t in [600.0, 601.0, 5000.0] {
        let f = a.frame(t);
        assert_eq!(&f.curve, a.dataset().curve(1));
        assert_eq!(&f.area, a.dataset().area(1));
        assert_eq!(f.stroke, a.dataset().color(1));
        assert_eq!(f.fill, a.dataset().color(1));
    }
    assert!(!a.is_animating(600.0));
    a.settle(600.0);
    assert_eq!(&a.frame(0.0).curve, a.dataset().curve(1));
}

#[test]
fn new_transition_supersedes_in_flight_one() {
    let mut a = ChartAnimator::with_seed(8);
    a.advance(Direction::Forward, 0.0);
    let shown = a.frame(250.0);
    a.advance(Direction::Forward, 250.0);
    // The replacement starts from what was on screen, not from a stored month.
    assert_eq!(a.frame(250.0).curve.to_cubics(), shown.curve.to_cubics());
    assert_eq!(a.frame(250.0).stroke, shown.stroke);
    assert_eq!(&a.frame(750.0).curve, a.dataset().curve(2));
}

#[test]
fn colors_and_labels_are_stable() {
    let mut a = ChartAnimator::with_seed(19);
    let colors: Vec<_> = (0..12).map(|i| a.dataset().color(i)).collect();
    let mut labels = Vec::new();
    for step in 0..30 {
        let dir = if step % 3 == 0 { Direction::Backward } else { Direction::Forward };
        a.advance(dir, step as f64 * 100.0);
        labels.push((a.cursor(), a.label()));
        a.perturb(step as f64 * 100.0 + 50.0);
    }
    for (i, c) in colors.iter().enumerate() {
        assert_eq!(a.dataset().color(i), *c);
    }
    for (cursor, label) in labels {
        assert_eq!(label, chart_core::month_name(cursor));
    }
}

#[test]
fn perturb_leaves_series_alone() {
    let mut a = ChartAnimator::with_seed(77);
    let before = snapshot_series(&a);
    let curves_before: Vec<_> = (0..12).map(|i| a.dataset().curve(i).clone()).collect();

    let delta = a.perturb(0.0);
    assert!((-100..=100).contains(&delta));
    assert!(a.is_animating(1999.0));
    assert!(!a.is_animating(2000.0));

    let expected = a.dataset().curve(0).shift_with_tail(delta as f64, 20.0);
    assert_eq!(a.frame(2000.0).curve, expected);
    // only the curve moves; the area and colors stay on January
    assert_eq!(&a.frame(2000.0).area, a.dataset().area(0));

    assert_eq!(snapshot_series(&a), before);
    for (i, c) in curves_before.iter().enumerate() {
        assert_eq!(a.dataset().curve(i), c);
    }
}

#[test]
fn repeated_perturbs_start_from_stored_path() {
    let mut a = ChartAnimator::with_seed(3);
    let first = a.perturb(0.0);
    let second = a.perturb(5000.0);
    let expected = a.dataset().curve(0).shift_with_tail(second as f64, 20.0);
    assert_eq!(a.frame(7000.0).curve, expected);
    let accumulated = a
        .dataset()
        .curve(0)
        .shift_with_tail(first as f64, 20.0)
        .shift_with_tail(second as f64, 20.0);
    assert_ne!(a.frame(7000.0).curve, accumulated);
}

fn cubic_ends(path: &chart_core::Path) -> Vec<Point> {
    path.draw_ops()
        .into_iter()
        .filter_map(|op| match op {
            DrawOp::CubicTo(_, _, p) => Some(p),
            _ => None,
        })
        .collect()
}

#[test]
fn perturb_blends_continuously() {
    init_tracing();
    let mut a = ChartAnimator::with_seed(77);
    a.perturb(0.0);
    let spans = cubic_ends(&a.frame(0.0).curve).len();
    assert_eq!(spans, 29);

    let mut prev = cubic_ends(&a.frame(0.0).curve);
    let mut t = 0.0;
    while t < 2000.0 {
        t += 5.0;
        let frame = a.frame(t);
        let ends = cubic_ends(&frame.curve);
        assert_eq!(ends.len(), spans, "span count changed at t={t}");
        assert_eq!(frame.curve.start_point(), Some(Point::new(10.0, 240.0 - a.dataset().series(0).samples()[0] as f64)));
        for (i, (p, q)) in prev.iter().zip(&ends).enumerate() {
            assert!(p.distance(*q) < 1.5, "span {i} jumped {p:?} -> {q:?} at t={t}");
        }
        prev = ends;
    }
}

#[test]
fn clicks_dispatch_gestures() {
    let mut a = ChartAnimator::with_seed(1);
    assert_eq!(a.click(Point::new(364.0, 27.0), 0.0), Some(Gesture::Next));
    assert_eq!(a.cursor(), 1);
    assert_eq!(a.click(Point::new(256.0, 27.0), 10.0), Some(Gesture::Previous));
    assert_eq!(a.click(Point::new(256.0, 27.0), 20.0), Some(Gesture::Previous));
    assert_eq!(a.cursor(), 11);
    assert_eq!(a.click(Point::new(300.0, 150.0), 30.0), Some(Gesture::Perturb));
    assert_eq!(a.cursor(), 11);
    assert_eq!(a.click(Point::new(900.0, 27.0), 40.0), None);
}

#[test]
fn custom_config_drives_timing_and_shape() {
    let cfg = AnimatorConfig {
        samples: 8,
        sample_max: 50,
        transition_ms: 100.0,
        transition_easing: Easing::Linear,
        ..AnimatorConfig::default()
    };
    let mut a = ChartAnimator::new(StdRng::seed_from_u64(4), cfg).expect("valid config");
    assert!(a.dataset().iter().all(|s| s.len() == 8 && s.samples().iter().all(|&v| v <= 50)));
    a.advance(Direction::Backward, 0.0);
    assert_eq!(a.cursor(), 11);
    assert!(!a.is_animating(100.0));
    assert_eq!(&a.frame(100.0).curve, a.dataset().curve(11));
}
