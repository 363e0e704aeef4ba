//! Tracker configuration.

use crate::error::{Error, Result};

/// Default fraction of an element that must be visible to reveal it.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// How a tracker treats notifications after the first reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RevealMode {
    /// Latch on the first qualifying notification and stop observing.
    #[default]
    Once,
    /// Keep observing; `revealed` follows every notification.
    Continuous,
}

/// Configuration for a [`VisibilityTracker`](super::VisibilityTracker).
///
/// Options are compared by value: a [`TrackerSlot`](super::TrackerSlot) keeps
/// its tracker for as long as it is handed equal options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerOptions {
    threshold: f32,
    mode: RevealMode,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            mode: RevealMode::Once,
        }
    }
}

impl TrackerOptions {
    /// Default options: threshold 0.1, one-shot reveal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold, clamping out-of-range values into `[0, 1]`.
    ///
    /// NaN falls back to [`DEFAULT_THRESHOLD`]. Both cases log a warning.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = if threshold.is_nan() {
            tracing::warn!(target: "folio_core::visibility", "NaN threshold, using default");
            DEFAULT_THRESHOLD
        } else if !(0.0..=1.0).contains(&threshold) {
            let clamped = threshold.clamp(0.0, 1.0);
            tracing::warn!(
                target: "folio_core::visibility",
                requested = threshold,
                clamped,
                "threshold out of range, clamping"
            );
            clamped
        } else {
            threshold
        };
        self
    }

    /// Set the threshold, rejecting values outside `[0, 1]`.
    pub fn try_with_threshold(mut self, threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::invalid_threshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Set the reveal mode.
    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    /// The visibility threshold.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The reveal mode.
    #[inline]
    pub fn mode(&self) -> RevealMode {
        self.mode
    }
}
