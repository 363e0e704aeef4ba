//! Viewport intersection reporting.
//!
//! An [`IntersectionReporter`] tells interested parties how much of an element
//! overlaps the visible viewport. It is the seam between the visibility
//! tracker and whatever surface actually scrolls:
//!
//! - [`ScrollViewport`] computes ratios from element rectangles and a scroll
//!   offset, notifying observers whenever an element crosses their threshold.
//! - [`ManualReporter`] delivers synthetic entries on demand, for tests and
//!   hosts that receive intersection data from elsewhere.
//!
//! # Delivery contract
//!
//! Reporters never hold internal locks while invoking callbacks, so a
//! callback may call [`IntersectionReporter::unobserve`] (including on its own
//! subscription). Once `unobserve` returns, the callback is never invoked
//! again, even for notifications already collected by an in-flight dispatch.

mod manual;
mod scroll;
mod subscriptions;

use std::sync::Arc;

use slotmap::new_key_type;

pub use manual::ManualReporter;
pub use scroll::ScrollViewport;

new_key_type! {
    /// Identifies an element registered with a reporter.
    pub struct ElementId;

    /// Identifies one observation registration.
    pub struct SubscriptionId;
}

/// Callback invoked with each intersection notification.
pub type IntersectionCallback = Arc<dyn Fn(&IntersectionEntry) + Send + Sync>;

/// One intersection notification for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// The element this entry describes.
    pub element: ElementId,
    /// Fraction of the element's area inside the viewport, in `[0, 1]`.
    pub ratio: f32,
    /// Whether the element overlaps the viewport at all.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Create an entry from a ratio. The ratio is clamped to `[0, 1]` and the
    /// element counts as intersecting when the ratio is positive.
    pub fn new(element: ElementId, ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self {
            element,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    /// Create an entry with an explicit intersecting flag.
    ///
    /// Platforms report edge-adjacent elements as intersecting with a zero
    /// ratio; this constructor lets hosts forward that faithfully.
    pub fn with_intersecting(element: ElementId, ratio: f32, is_intersecting: bool) -> Self {
        Self {
            element,
            ratio: ratio.clamp(0.0, 1.0),
            is_intersecting,
        }
    }

    /// Whether this entry satisfies the given visibility threshold.
    #[inline]
    pub fn meets(&self, threshold: f32) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// A source of viewport intersection notifications.
///
/// Implementations must honor the delivery contract described in the
/// [module documentation](self).
pub trait IntersectionReporter: Send + Sync {
    /// Start observing `element`, reporting against `threshold`.
    ///
    /// Reporters may invoke `callback` before this method returns (an initial
    /// notification). Observing an element the reporter does not know is not
    /// an error; the subscription simply never fires.
    fn observe(
        &self,
        element: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId;

    /// Stop a subscription.
    ///
    /// Returns `true` if a live subscription was removed. Calling this twice
    /// for the same ID is harmless.
    fn unobserve(&self, id: SubscriptionId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn element() -> ElementId {
        ElementId::from(KeyData::from_ffi(1))
    }

    #[test]
    fn test_entry_clamps_ratio() {
        assert_eq!(IntersectionEntry::new(element(), 1.7).ratio, 1.0);
        assert_eq!(IntersectionEntry::new(element(), -0.2).ratio, 0.0);
    }

    #[test]
    fn test_entry_intersecting_follows_ratio() {
        assert!(IntersectionEntry::new(element(), 0.01).is_intersecting);
        assert!(!IntersectionEntry::new(element(), 0.0).is_intersecting);
    }

    #[test]
    fn test_entry_meets_threshold() {
        let entry = IntersectionEntry::new(element(), 0.1);
        assert!(entry.meets(0.1));
        assert!(!entry.meets(0.11));
    }

    #[test]
    fn test_zero_threshold_requires_intersection() {
        assert!(!IntersectionEntry::new(element(), 0.0).meets(0.0));
        assert!(IntersectionEntry::with_intersecting(element(), 0.0, true).meets(0.0));
    }
}
