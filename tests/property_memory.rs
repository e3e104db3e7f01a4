//! Property tests for the KV cache estimator and chart geometry.

use kvchart::chart::{dash_intervals, token_label};
use kvchart::hardware::StrokePattern;
use kvchart::model::QWEN_4B_FP16;
use kvchart::series::geomspace;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn prop_kv_gb_monotone(a in 0.0f64..1e9, b in 0.0f64..1e9) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(QWEN_4B_FP16.kv_gb(lo) <= QWEN_4B_FP16.kv_gb(hi));
    }

    #[test]
    fn prop_kv_gb_linear(len in 0.0f64..1e9) {
        let single = QWEN_4B_FP16.kv_gb(len);
        let double = QWEN_4B_FP16.kv_gb(2.0 * len);
        prop_assert!((double - 2.0 * single).abs() <= 1e-12 * double.max(1.0));
    }

    #[test]
    fn prop_total_is_weights_plus_kv(len in 0.0f64..1e7) {
        let total = QWEN_4B_FP16.total_gb(len);
        prop_assert!((total - 8.0 - QWEN_4B_FP16.kv_gb(len)).abs() < 1e-12);
    }

    #[test]
    fn prop_max_context_fits(capacity in 8.5f64..200.0) {
        let tokens = QWEN_4B_FP16.max_context_within(capacity) as f64;
        prop_assert!(QWEN_4B_FP16.total_gb(tokens) <= capacity + 1e-9);
        prop_assert!(QWEN_4B_FP16.total_gb(tokens + 1.0) > capacity - 1e-9);
    }

    #[test]
    fn prop_geomspace_sorted_with_exact_ends(
        start in 1.0f64..1e4,
        factor in 1.5f64..1e3,
        count in 2usize..600,
    ) {
        let stop = start * factor;
        let values = geomspace(start, stop, count);
        prop_assert_eq!(values.len(), count);
        prop_assert_eq!(values[0], start);
        prop_assert_eq!(values[count - 1], stop);
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_dash_intervals_stay_in_range(
        start in -100.0f64..100.0,
        span in 0.01f64..100.0,
        unit in 0.001f64..1.0,
    ) {
        let end = start + span;
        for pattern in [StrokePattern::Dashed, StrokePattern::DashDot, StrokePattern::Dotted] {
            let intervals = dash_intervals(start, end, pattern, unit);
            prop_assert!(!intervals.is_empty());
            prop_assert_eq!(intervals[0].0, start);
            for &(a, b) in &intervals {
                prop_assert!(start <= a && a < b && b <= end);
            }
        }
    }

    #[test]
    fn prop_power_of_two_token_labels(exp in 10u32..30) {
        let label = token_label(f64::from(1u32 << exp));
        prop_assert!(label.ends_with('k') || label.ends_with('M'));
    }
}
