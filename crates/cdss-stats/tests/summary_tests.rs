//! Box summary integration tests
//!
//! Uses the fold AUC scores reported for the six baseline classifiers.

use cdss_stats::{BoxSummary, StatsError};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(&[0.8545, 0.8545, 0.5, 0.5, 0.5, 0.5], [0.5, 0.5, 0.5, 0.8545, 0.8545])]
#[case(&[0.6545, 0.6909, 0.6727, 0.6727, 0.5, 0.5], [0.5, 0.5, 0.6727, 0.6727, 0.6909])]
#[case(&[0.3909, 0.3909, 0.5, 0.5, 0.4818, 0.4818], [0.3909, 0.3909, 0.4818, 0.5, 0.5])]
#[case(&[0.8545, 0.8545, 0.7272, 0.7272, 0.7272, 0.7272], [0.7272, 0.7272, 0.7272, 0.8545, 0.8545])]
#[case(&[0.7090, 0.7090, 0.3272, 0.3272, 0.3272, 0.3272], [0.3272, 0.3272, 0.3272, 0.7090, 0.7090])]
#[case(&[0.3818, 0.3818, 0.7818, 0.7818, 0.7636, 0.7636], [0.3818, 0.3818, 0.7636, 0.7818, 0.7818])]
fn test_fold_auc_summaries(#[case] folds: &[f64], #[case] expected: [f64; 5]) {
    let summary = BoxSummary::from_values(folds).unwrap();
    assert_eq!(summary.values(), expected);
}

#[rstest]
#[case(1, 0, 0, 0)]
#[case(2, 0, 1, 1)]
#[case(4, 1, 2, 3)]
#[case(6, 1, 3, 4)]
#[case(7, 1, 3, 5)]
fn test_nearest_rank_indices(
    #[case] n: usize,
    #[case] q1_index: usize,
    #[case] median_index: usize,
    #[case] q3_index: usize,
) {
    // Distinct ascending values make the selected index observable
    let data: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let summary = BoxSummary::from_values(&data).unwrap();

    assert_eq!(summary.q1, q1_index as f64);
    assert_eq!(summary.median, median_index as f64);
    assert_eq!(summary.q3, q3_index as f64);
}

#[test]
fn test_empty_series_rejected() {
    assert!(matches!(
        BoxSummary::from_values(&[]),
        Err(StatsError::InvalidInput { .. })
    ));
}

#[test]
fn test_infinite_value_rejected() {
    assert!(BoxSummary::from_values(&[0.5, f64::INFINITY]).is_err());
}

proptest! {
    #[test]
    fn prop_summary_is_ordered(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
        let s = BoxSummary::from_values(&values).unwrap();
        prop_assert!(s.min <= s.q1);
        prop_assert!(s.q1 <= s.median);
        prop_assert!(s.median <= s.q3);
        prop_assert!(s.q3 <= s.max);
    }

    #[test]
    fn prop_summary_ignores_input_order(mut values in prop::collection::vec(-10.0f64..10.0, 1..32)) {
        let forward = BoxSummary::from_values(&values).unwrap();
        values.reverse();
        let reversed = BoxSummary::from_values(&values).unwrap();
        prop_assert_eq!(forward, reversed);
    }
}
