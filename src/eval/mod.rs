//! Interval-matching evaluation: greedy matching and micro-averaged F1.
//!
//! # Overview
//!
//! The pipeline is: per sample, select the K most confident candidate
//! slots ([`crate::SampleOutput::top_k`]); greedily match each
//! ground-truth interval to its best-IoU candidate ([`match_sample`]);
//! sum `(TP, predicted, ground-truth)` counts over every sample in every
//! batch ([`batch_counts`], [`evaluate_corpus`]); derive precision,
//! recall, and F1 once from the cumulative totals ([`MatchCounts::f1`]).
//!
//! # Example
//!
//! ```rust
//! use spindle_metrics::eval::{evaluate_corpus, MatchConfig};
//! use spindle_metrics::{Interval, SampleOutput};
//!
//! // One sample, three candidate slots, one ground-truth event.
//! let output = SampleOutput::new(
//!     vec![0.8, 2.5, -1.0],
//!     vec![
//!         Interval::new(0.1, 0.1),
//!         Interval::new(0.5, 0.1),
//!         Interval::new(0.9, 0.1),
//!     ],
//! );
//! let targets = vec![vec![Interval::new(0.5, 0.1)]];
//!
//! let summary =
//!     evaluate_corpus([(vec![output], targets)], &MatchConfig::default()).unwrap();
//! assert!((summary.f1 - 0.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

mod harness;
mod matcher;
mod metrics;

pub use harness::{batch_counts, evaluate_corpus, CorpusSummary};
pub use matcher::match_sample;
pub use metrics::{f1, MatchCounts};

/// Configuration for interval matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of top-confidence candidate slots considered per sample.
    pub top_k: usize,
    /// IoU a candidate must strictly exceed to count as a true positive.
    pub iou_threshold: f64,
}

impl MatchConfig {
    /// Default number of candidates considered per sample.
    pub const DEFAULT_TOP_K: usize = 3;

    /// Default IoU match threshold.
    pub const DEFAULT_IOU_THRESHOLD: f64 = 0.2;

    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
            iou_threshold: Self::DEFAULT_IOU_THRESHOLD,
        }
    }

    /// Set the number of candidates considered per sample.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the IoU match threshold.
    #[must_use]
    pub fn with_iou_threshold(mut self, iou_threshold: f64) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
