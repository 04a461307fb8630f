//! Greedy single-sample interval matcher.

use super::MatchCounts;
use crate::detect::Candidate;
use crate::Interval;

/// Match one sample's selected candidates against its ground-truth
/// intervals.
///
/// Each ground-truth interval is considered independently: it takes the
/// candidate with the highest IoU, and counts as a true positive when that
/// IoU strictly exceeds `iou_threshold`. Candidates are NOT removed from
/// the pool after matching; several ground truths may credit the same
/// candidate. This is a deliberately greedy matcher, not a one-to-one
/// assignment; with small K the duplicate credit is an accepted
/// simplification for a coarse training-time metric.
///
/// With an empty candidate set every ground truth contributes zero true
/// positives.
#[must_use]
pub fn match_sample(
    candidates: &[Candidate],
    targets: &[Interval],
    iou_threshold: f64,
) -> MatchCounts {
    let mut true_positives = 0;

    for target in targets {
        // Best IoU seen so far; None until a first candidate is compared,
        // then updated only on a strictly better IoU.
        let mut best: Option<f64> = None;
        for candidate in candidates {
            let iou = candidate.interval.iou(*target);
            if best.map_or(true, |current| iou > current) {
                best = Some(iou);
            }
        }

        if let Some(best_iou) = best {
            if best_iou > iou_threshold {
                true_positives += 1;
            }
        }
    }

    MatchCounts {
        true_positives,
        predicted: candidates.len(),
        ground_truth: targets.len(),
    }
}
