//! # spindle-metrics
//!
//! Interval-matching evaluation metrics for 1-D event detection.
//!
//! A detection model scores a fixed number of candidate slots per sample,
//! each with a raw confidence and a predicted interval encoded as
//! (center, width): think of a sleep-spindle detector locating events in an
//! EEG trace. This crate answers one question about such a model: how well
//! do its ranked candidate intervals line up with the ground truth?
//!
//! - **Geometry**: [`Interval`] for (center, width) spans, IoU, and the
//!   one-sided overlap ratio
//! - **Selection**: [`SampleOutput::top_k`] for sigmoid squashing and
//!   deterministic top-K candidate selection
//! - **Matching**: [`eval::match_sample`] for greedy best-IoU matching of
//!   ground truths to candidates
//! - **Aggregation**: [`eval::evaluate_corpus`] for micro-averaged F1 from
//!   counts accumulated over a whole corpus
//!
//! ## Quick Start
//!
//! ```rust
//! use spindle_metrics::{evaluate_corpus, Interval, MatchConfig, SampleOutput};
//!
//! // One batch of one sample: three candidate slots, one true event.
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
//! println!("{summary}");
//! assert!((summary.f1 - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Library only**: the training and evaluation loops are external
//!   collaborators; this crate consumes already-materialized batches of
//!   (outputs, targets) and performs no I/O beyond `log` diagnostics.
//! - **Micro-averaged**: counts are summed across the corpus and F1 is
//!   derived once at the end, never averaged per batch.
//! - **Policy over panics**: degenerate intervals and empty corpora are
//!   resolved by documented numeric policies, not runtime faults.
//! - **Order-insensitive aggregation**: count merging is plain addition,
//!   so samples and batches may be processed (or sharded) in any order.

#![warn(missing_docs)]

pub mod detect;
mod error;
pub mod eval;
pub mod interval;
pub mod types;

pub use detect::{Candidate, SampleOutput};
pub use error::{Error, Result};
pub use eval::{batch_counts, evaluate_corpus, f1, CorpusSummary, MatchConfig, MatchCounts};
pub use interval::Interval;
pub use types::Confidence;
