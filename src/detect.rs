//! Model output structures and top-K candidate selection.
//!
//! A detection model emits a fixed-size, unordered set of candidate slots
//! per sample (one raw score and one predicted interval each, typically
//! ~100 slots). Matching only ever looks at the few most confident slots;
//! [`SampleOutput::top_k`] imposes that order.

use crate::types::Confidence;
use crate::{Error, Interval, Result};
use serde::{Deserialize, Serialize};

/// One sample's raw model output.
///
/// Slot `i` pairs `logits[i]` with `intervals[i]`. The two vectors must be
/// the same length; [`SampleOutput::top_k`] rejects mismatched shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleOutput {
    /// Raw (pre-sigmoid) confidence score per slot.
    pub logits: Vec<f64>,
    /// Predicted interval per slot.
    pub intervals: Vec<Interval>,
}

/// A selected candidate: a predicted interval plus its squashed confidence
/// and the slot it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the slot this candidate was selected from.
    pub slot: usize,
    /// Sigmoid-squashed confidence of the slot.
    pub confidence: Confidence,
    /// The slot's predicted interval.
    pub interval: Interval,
}

impl SampleOutput {
    /// Create a sample output from per-slot logits and intervals.
    #[must_use]
    pub fn new(logits: Vec<f64>, intervals: Vec<Interval>) -> Self {
        Self { logits, intervals }
    }

    /// Number of candidate slots in this output.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.logits.len()
    }

    /// Select the `k` highest-confidence candidate slots.
    ///
    /// Logits are squashed through the sigmoid and candidates returned in
    /// descending-confidence order. Ordering is deterministic: confidences
    /// are compared with `total_cmp` and ties broken by ascending slot
    /// index. Exactly `k` candidates are returned whenever the slot count
    /// is at least `k`; with fewer slots, every slot is returned (sorted).
    /// No slot is returned twice.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the logit and interval vectors
    /// have different lengths.
    pub fn top_k(&self, k: usize) -> Result<Vec<Candidate>> {
        if self.logits.len() != self.intervals.len() {
            return Err(Error::invalid_input(format!(
                "slot shape mismatch: {} logits vs {} intervals",
                self.logits.len(),
                self.intervals.len()
            )));
        }

        let confidences: Vec<Confidence> = self
            .logits
            .iter()
            .map(|&raw| Confidence::from_logit(raw))
            .collect();

        let mut order: Vec<usize> = (0..confidences.len()).collect();
        order.sort_by(|&a, &b| {
            confidences[b]
                .get()
                .total_cmp(&confidences[a].get())
                .then(a.cmp(&b))
        });
        order.truncate(k);

        Ok(order
            .into_iter()
            .map(|slot| Candidate {
                slot,
                confidence: confidences[slot],
                interval: self.intervals[slot],
            })
            .collect())
    }
}
