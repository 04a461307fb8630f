//! Witness type for confidence values bounded to [0.0, 1.0].
//!
//! Detection models emit a raw score (logit) per candidate slot. Those raw
//! scores live on an unbounded scale and are only meaningful relative to
//! each other; squashing them through a sigmoid turns them into per-slot
//! confidences that thresholds and diagnostics can treat uniformly.
//! [`Confidence::from_logit`] is that squashing, expressed as a pure
//! function over plain numbers with no tensor framework involved.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence score guaranteed to be in the range [0.0, 1.0].
///
/// This is a witness type: its existence proves the value is valid, so
/// downstream code never re-checks bounds.
///
/// # Construction
///
/// - [`Confidence::new`]: Returns `None` if out of range (strict)
/// - [`Confidence::saturating`]: Clamps to [0, 1]; NaN becomes 0 (lenient)
/// - [`Confidence::from_logit`]: Sigmoid-squashes a raw model score
///
/// # Example
///
/// ```rust
/// use spindle_metrics::Confidence;
///
/// assert!(Confidence::new(0.5).is_some());
/// assert!(Confidence::new(1.5).is_none());
///
/// let conf = Confidence::from_logit(0.0);
/// assert!((conf.get() - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// The minimum valid confidence value.
    pub const MIN: Self = Self(0.0);

    /// The maximum valid confidence value.
    pub const MAX: Self = Self(1.0);

    /// Create a confidence score, returning `None` if out of range.
    #[must_use]
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) && !value.is_nan() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a confidence score, clamping to [0.0, 1.0].
    ///
    /// NaN is treated as 0.0.
    #[must_use]
    #[inline]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Squash a raw model score (logit) into a confidence via the sigmoid.
    ///
    /// Evaluated in the numerically stable form for each sign of the input,
    /// so large-magnitude scores saturate to 0 or 1 instead of overflowing.
    /// A NaN score maps to zero confidence.
    #[must_use]
    pub fn from_logit(raw: f64) -> Self {
        let squashed = if raw >= 0.0 {
            1.0 / (1.0 + (-raw).exp())
        } else {
            let e = raw.exp();
            e / (1.0 + e)
        };
        Self::saturating(squashed)
    }

    /// Get the inner value (guaranteed to be in [0.0, 1.0]).
    #[must_use]
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Debug for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Confidence({:.4})", self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl From<Confidence> for f64 {
    #[inline]
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}
