//! Invariant tests for the evaluation metrics.
//!
//! These verify that the geometry and the metric reducers satisfy their
//! mathematical invariants regardless of input, including the documented
//! edge-case policies (unclamped IoU, zero-denominator guards).

use spindle_metrics::{f1, Interval, MatchConfig, MatchCounts, SampleOutput};

#[test]
fn iou_is_symmetric() {
    let pairs = [
        (Interval::new(0.3, 0.2), Interval::new(0.45, 0.3)),
        (Interval::new(0.1, 0.1), Interval::new(0.9, 0.1)),
        (Interval::new(0.5, 0.0), Interval::new(0.5, 0.4)),
    ];
    for (a, b) in pairs {
        assert!(
            (a.iou(b) - b.iou(a)).abs() < 1e-12,
            "iou must be symmetric for {a:?} / {b:?}"
        );
    }
}

#[test]
fn iou_of_interval_with_itself_is_one() {
    let interval = Interval::new(2.5, 1.0);
    assert!((interval.iou(interval) - 1.0).abs() < 1e-12);
}

#[test]
fn disjoint_intervals_have_negative_iou() {
    // Unclamped by choice: the gap between spans [0.05, 0.15] and
    // [0.85, 0.95] makes the overlap term negative.
    let a = Interval::new(0.1, 0.1);
    let b = Interval::new(0.9, 0.1);
    assert!(a.iou(b) < 0.0);
}

#[test]
fn overlap_ratio_is_not_symmetric() {
    let wide = Interval::new(0.5, 0.4);
    let narrow = Interval::new(0.5, 0.1);
    assert!((wide.overlap_ratio(narrow) - 1.0).abs() < 1e-12);
    assert!(narrow.overlap_ratio(wide) < 1.0);
}

#[test]
fn f1_guarded_outputs() {
    assert_eq!(f1(0, 0, 0), 0.0);
    assert_eq!(f1(5, 5, 5), 1.0);
    assert_eq!(f1(0, 3, 2), 0.0);
}

#[test]
fn metrics_bounded_for_consistent_counts() {
    // Any counts with TP <= predicted and TP <= ground_truth must produce
    // precision, recall, and F1 inside [0, 1].
    for tp in 0..4usize {
        for extra_pred in 0..4usize {
            for extra_gt in 0..4usize {
                let counts = MatchCounts::new(tp, tp + extra_pred, tp + extra_gt);
                for value in [counts.precision(), counts.recall(), counts.f1()] {
                    assert!(
                        (0.0..=1.0).contains(&value),
                        "metric out of bounds for {counts:?}: {value}"
                    );
                }
            }
        }
    }
}

#[test]
fn f1_formula_holds() {
    let counts = MatchCounts::new(2, 6, 3);
    let precision = counts.precision();
    let recall = counts.recall();
    if precision + recall > 0.0 {
        let expected = 2.0 * precision * recall / (precision + recall);
        assert!((counts.f1() - expected).abs() < 1e-12);
    }
}

#[test]
fn degenerate_intervals_never_panic() {
    let point = Interval::new(0.5, 0.0);
    let other = Interval::new(0.5, 0.0);
    assert_eq!(point.iou(other), 0.0);
    assert_eq!(point.overlap_ratio(other), 0.0);

    let wide = Interval::new(0.5, 0.3);
    assert!(point.iou(wide).is_finite());
    assert!(wide.overlap_ratio(point).is_finite());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn interval_strategy() -> impl Strategy<Value = Interval> {
        (-100.0f64..100.0, 0.0f64..50.0).prop_map(|(center, width)| Interval::new(center, width))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn iou_symmetric(a in interval_strategy(), b in interval_strategy()) {
            prop_assert!((a.iou(b) - b.iou(a)).abs() < 1e-9);
        }

        #[test]
        fn iou_at_most_one(a in interval_strategy(), b in interval_strategy()) {
            prop_assert!(a.iou(b) <= 1.0 + 1e-9);
        }

        #[test]
        fn iou_finite(a in interval_strategy(), b in interval_strategy()) {
            prop_assert!(a.iou(b).is_finite());
        }

        #[test]
        fn counts_addition_commutes(
            a in (0usize..50, 0usize..50, 0usize..50),
            b in (0usize..50, 0usize..50, 0usize..50),
        ) {
            let x = MatchCounts::new(a.0, a.1, a.2);
            let y = MatchCounts::new(b.0, b.1, b.2);
            prop_assert_eq!(x + y, y + x);
        }

        #[test]
        fn f1_bounded_for_consistent_counts(tp in 0usize..50, fp in 0usize..50, fnc in 0usize..50) {
            let score = f1(tp, tp + fp, tp + fnc);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn top_k_never_panics_and_is_sorted(
            logits in prop::collection::vec(-20.0f64..20.0, 0..40),
            k in 0usize..10,
        ) {
            let intervals: Vec<Interval> =
                (0..logits.len()).map(|i| Interval::new(i as f64, 1.0)).collect();
            let output = SampleOutput::new(logits.clone(), intervals);
            let top = output.top_k(k).unwrap();

            prop_assert_eq!(top.len(), k.min(logits.len()));
            for pair in top.windows(2) {
                prop_assert!(pair[0].confidence.get() >= pair[1].confidence.get());
            }
        }

        #[test]
        fn match_counts_shape(
            centers in prop::collection::vec(-10.0f64..10.0, 0..8),
            targets in prop::collection::vec(-10.0f64..10.0, 0..8),
        ) {
            let output = SampleOutput::new(
                vec![0.0; centers.len()],
                centers.iter().map(|&c| Interval::new(c, 0.5)).collect(),
            );
            let config = MatchConfig::default();
            let candidates = output.top_k(config.top_k).unwrap();
            let target_intervals: Vec<Interval> =
                targets.iter().map(|&c| Interval::new(c, 0.5)).collect();

            let counts = spindle_metrics::eval::match_sample(
                &candidates,
                &target_intervals,
                config.iou_threshold,
            );

            prop_assert_eq!(counts.predicted, candidates.len());
            prop_assert_eq!(counts.ground_truth, target_intervals.len());
            prop_assert!(counts.true_positives <= counts.ground_truth);
        }
    }
}
