// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks for cursor arithmetic and series bounds.

use chart_core::{ChartAnimator, Direction};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn advance_wraps_modulo_twelve(seed in any::<u64>(), start in 0usize..12, dir in direction()) {
        let mut a = ChartAnimator::with_seed(seed);
        while a.cursor() != start {
            a.advance(Direction::Forward, 0.0);
        }
        a.advance(dir, 0.0);
        let expected = (start as isize + dir.step()).rem_euclid(12) as usize;
        prop_assert_eq!(a.cursor(), expected);
        prop_assert!(a.cursor() < 12);
    }

    #[test]
    fn any_walk_keeps_cursor_in_range(seed in any::<u64>(), walk in proptest::collection::vec(direction(), 0..64)) {
        let mut a = ChartAnimator::with_seed(seed);
        let mut expected: isize = 0;
        for (i, dir) in walk.iter().enumerate() {
            a.advance(*dir, i as f64 * 10.0);
            expected += dir.step();
        }
        prop_assert_eq!(a.cursor(), expected.rem_euclid(12) as usize);
    }

    #[test]
    fn series_are_bounded_and_fixed(seed in any::<u64>(), perturbs in 0usize..5) {
        let mut a = ChartAnimator::with_seed(seed);
        let before: Vec<Vec<u32>> = a.dataset().iter().map(|s| s.samples().to_vec()).collect();
        prop_assert_eq!(before.len(), 12);
        for s in &before {
            prop_assert_eq!(s.len(), 30);
            prop_assert!(s.iter().all(|&v| v <= 200));
        }
        for i in 0..perturbs {
            a.perturb(i as f64);
            a.advance(Direction::Forward, i as f64);
        }
        let after: Vec<Vec<u32>> = a.dataset().iter().map(|s| s.samples().to_vec()).collect();
        prop_assert_eq!(before, after);
    }
}
