//! Batch-level count production and corpus aggregation.
//!
//! Both driving loops (the training loop's periodic metrics pass and the
//! standalone evaluation pass) feed batches of (model outputs, targets) through
//! [`batch_counts`] and reduce with [`evaluate_corpus`]. There is exactly
//! one matching code path; the loops differ only in where the batches come
//! from.

use super::{match_sample, MatchConfig, MatchCounts};
use crate::detect::SampleOutput;
use crate::{Error, Interval, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corpus-level evaluation summary: the final micro-averaged F1 plus the
/// raw counts it was derived from.
///
/// Serializable so the external training loop can emit it as a per-epoch
/// metrics row; `Display` renders the one-line summary an evaluation pass
/// logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Micro-averaged F1 over the whole corpus.
    pub f1: f64,
    /// Cumulative counts the score was derived from.
    pub counts: MatchCounts,
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F1 {:.4} | TP {} | predictions {} | events {}",
            self.f1, self.counts.true_positives, self.counts.predicted, self.counts.ground_truth
        )
    }
}

/// Produce summed match counts for one mini-batch.
///
/// Applies top-K selection then greedy matching to every sample in the
/// batch independently and sums the three counts. The batch's mean
/// top-candidate confidence is logged at debug level as a training-time
/// diagnostic.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if `outputs` and `targets` have different
/// lengths, or if any sample's logit/interval shapes disagree.
pub fn batch_counts(
    outputs: &[SampleOutput],
    targets: &[Vec<Interval>],
    config: &MatchConfig,
) -> Result<MatchCounts> {
    if outputs.len() != targets.len() {
        return Err(Error::invalid_input(format!(
            "batch mismatch: {} outputs vs {} target sets",
            outputs.len(),
            targets.len()
        )));
    }

    let mut counts = MatchCounts::default();
    let mut confidence_sum = 0.0;
    let mut candidate_total = 0usize;

    for (output, sample_targets) in outputs.iter().zip(targets) {
        let candidates = output.top_k(config.top_k)?;
        for candidate in &candidates {
            confidence_sum += candidate.confidence.get();
        }
        candidate_total += candidates.len();
        counts += match_sample(&candidates, sample_targets, config.iou_threshold);
    }

    if candidate_total > 0 {
        log::debug!(
            "batch mean top-{} confidence: {:.4}",
            config.top_k,
            confidence_sum / candidate_total as f64
        );
    }

    Ok(counts)
}

/// Evaluate an entire corpus from an iterable of (outputs, targets)
/// batches.
///
/// Accumulates [`MatchCounts`] across every batch and derives F1 once from
/// the cumulative totals (micro-averaged, never an average of per-batch
/// scores). The accumulator lives only for this pass; aborting iteration
/// early is safe at any point, since it only ever holds fully-committed
/// sums.
///
/// # Errors
///
/// Propagates the first shape error encountered in any batch.
pub fn evaluate_corpus<I>(batches: I, config: &MatchConfig) -> Result<CorpusSummary>
where
    I: IntoIterator<Item = (Vec<SampleOutput>, Vec<Vec<Interval>>)>,
{
    let mut counts = MatchCounts::default();
    for (outputs, targets) in batches {
        counts += batch_counts(&outputs, &targets, config)?;
    }

    Ok(CorpusSummary {
        f1: counts.f1(),
        counts,
    })
}
