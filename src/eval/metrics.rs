//! Match counts and the precision / recall / F1 reducers.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Summed match outcomes: true positives, predictions considered, and
/// ground-truth events.
///
/// The same triple serves as the per-sample match result, the per-batch
/// sum, and the corpus accumulator: merging is plain addition, which is
/// commutative and associative, so partial counts may be produced in any
/// order (or sharded across workers) and reduced at the end.
///
/// F1 is micro-averaged: derive it once from cumulative counts via
/// [`MatchCounts::f1`], never by averaging per-batch scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    /// Ground-truth events matched by a candidate above the threshold.
    pub true_positives: usize,
    /// Candidates considered (K per sample).
    pub predicted: usize,
    /// Ground-truth events.
    pub ground_truth: usize,
}

impl MatchCounts {
    /// Create counts from raw totals.
    #[must_use]
    pub fn new(true_positives: usize, predicted: usize, ground_truth: usize) -> Self {
        Self {
            true_positives,
            predicted,
            ground_truth,
        }
    }

    /// False positives: predictions that matched nothing.
    #[must_use]
    pub fn false_positives(&self) -> usize {
        self.predicted.saturating_sub(self.true_positives)
    }

    /// False negatives: ground-truth events no prediction matched.
    #[must_use]
    pub fn false_negatives(&self) -> usize {
        self.ground_truth.saturating_sub(self.true_positives)
    }

    /// Precision: TP / (TP + FP).
    ///
    /// When there are no predictions the raw TP count is returned instead,
    /// the established fallback for this metric. TP never exceeds the
    /// prediction count, so the fallback evaluates to 0.0 in practice.
    #[must_use]
    pub fn precision(&self) -> f64 {
        if self.predicted == 0 {
            self.true_positives as f64
        } else {
            self.true_positives as f64 / self.predicted as f64
        }
    }

    /// Recall: TP / (TP + FN).
    ///
    /// Returns 0.0 when there are no ground-truth events, so a corpus (or
    /// shard) without events never divides by zero.
    #[must_use]
    pub fn recall(&self) -> f64 {
        if self.ground_truth == 0 {
            0.0
        } else {
            self.true_positives as f64 / self.ground_truth as f64
        }
    }

    /// Micro-averaged F1: harmonic mean of precision and recall, 0.0 when
    /// both are zero.
    #[must_use]
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }
}

impl Add for MatchCounts {
    type Output = MatchCounts;

    fn add(self, rhs: MatchCounts) -> MatchCounts {
        MatchCounts {
            true_positives: self.true_positives + rhs.true_positives,
            predicted: self.predicted + rhs.predicted,
            ground_truth: self.ground_truth + rhs.ground_truth,
        }
    }
}

impl AddAssign for MatchCounts {
    fn add_assign(&mut self, rhs: MatchCounts) {
        *self = *self + rhs;
    }
}

impl Sum for MatchCounts {
    fn sum<I: Iterator<Item = MatchCounts>>(iter: I) -> MatchCounts {
        iter.fold(MatchCounts::default(), Add::add)
    }
}

/// Micro-averaged F1 from cumulative counts.
///
/// Pure reducer over the raw totals, usable standalone (testing, or
/// recombining sharded partial sums) without constructing a
/// [`MatchCounts`] first. Same guards as [`MatchCounts::f1`]:
/// `f1(0, 0, 0)` is 0.0, never a division fault.
#[must_use]
pub fn f1(true_positives: usize, predicted: usize, ground_truth: usize) -> f64 {
    MatchCounts::new(true_positives, predicted, ground_truth).f1()
}
