//! Interval geometry for 1-D event detection.
//!
//! Events are one-dimensional regions of a signal (e.g. a sleep spindle in
//! an EEG trace) encoded as a center and a width. Everything here is a pure
//! function over that encoding; no allocation, no side effects.

use serde::{Deserialize, Serialize};

/// A one-dimensional interval encoded as (center, width).
///
/// Always convertible to a `(start, end)` span via [`Interval::span`].
/// Width must be non-negative; degenerate width-0 intervals are permitted
/// and never cause the geometry functions to panic or divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Center of the interval.
    pub center: f64,
    /// Width of the interval (non-negative).
    pub width: f64,
}

impl Interval {
    /// Create an interval from its center and width.
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        debug_assert!(width >= 0.0, "interval width must be non-negative");
        Self { center, width }
    }

    /// Create an interval from a `(start, end)` span.
    #[must_use]
    pub fn from_span(start: f64, end: f64) -> Self {
        Self {
            center: (start + end) / 2.0,
            width: end - start,
        }
    }

    /// The `(start, end)` span of this interval.
    #[must_use]
    pub fn span(self) -> (f64, f64) {
        (self.center - self.width / 2.0, self.center + self.width / 2.0)
    }

    /// Intersection-over-union with another interval.
    ///
    /// The overlap term is deliberately NOT clamped at zero: disjoint
    /// intervals yield a negative value, keeping parity with the
    /// established form of this metric. Ranking and thresholding are
    /// unaffected, since any positive match threshold rejects
    /// non-overlapping pairs either way.
    ///
    /// Returns 0.0 when the union has zero length, which only happens when
    /// both intervals are degenerate and coincident.
    #[must_use]
    pub fn iou(self, other: Interval) -> f64 {
        let (a_start, a_end) = self.span();
        let (b_start, b_end) = other.span();

        let overlap = a_end.min(b_end) - a_start.max(b_start);
        let union = a_end.max(b_end) - a_start.min(b_start);

        if union == 0.0 {
            return 0.0;
        }
        overlap / union
    }

    /// Fraction of `target` covered by the overlap with this interval.
    ///
    /// Same (unclamped) overlap term as [`Interval::iou`], but normalized
    /// by the target's own length rather than the union, so a wide
    /// prediction fully containing the target scores 1.0. Asymmetric in
    /// its arguments. Not used by the default match threshold; exposed for
    /// callers that want a coverage-based match criterion.
    ///
    /// Returns 0.0 when the target is degenerate.
    #[must_use]
    pub fn overlap_ratio(self, target: Interval) -> f64 {
        let (a_start, a_end) = self.span();
        let (t_start, t_end) = target.span();

        let overlap = a_end.min(t_end) - a_start.max(t_start);
        let target_len = t_end - t_start;

        if target_len == 0.0 {
            return 0.0;
        }
        overlap / target_len
    }
}
