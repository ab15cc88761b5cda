//! Property tests for bucketing and quantiles.

use lab_analysis::classify;
use lab_analysis::stats::quantile;
use lab_model::{AnalysisThresholds, PerformanceBucket};
use proptest::prelude::*;

fn rank(bucket: PerformanceBucket) -> u8 {
    match bucket {
        PerformanceBucket::Low => 0,
        PerformanceBucket::Medium => 1,
        PerformanceBucket::High => 2,
    }
}

proptest! {
    #[test]
    fn buckets_are_monotonic(a in -50.0f64..150.0, b in -50.0f64..150.0) {
        let thresholds = AnalysisThresholds::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(low, &thresholds)) <= rank(classify(high, &thresholds)));
    }

    #[test]
    fn quartiles_stay_within_range(values in prop::collection::vec(0.0f64..100.0, 1..50)) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let q1 = quantile(&values, 0.25).expect("non-empty");
        let q3 = quantile(&values, 0.75).expect("non-empty");
        prop_assert!(min - 1e-9 <= q1);
        prop_assert!(q1 <= q3 + 1e-9);
        prop_assert!(q3 <= max + 1e-9);
    }
}
