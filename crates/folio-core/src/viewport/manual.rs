//! A reporter driven entirely by the caller.

use parking_lot::Mutex;
use slotmap::SlotMap;

use super::subscriptions::SubscriptionTable;
use super::{
    ElementId, IntersectionCallback, IntersectionEntry, IntersectionReporter, SubscriptionId,
};

/// An [`IntersectionReporter`] that only reports what it is told to.
///
/// No notification is produced on `observe`; every entry comes from
/// [`deliver`](Self::deliver) or [`deliver_entry`](Self::deliver_entry). This
/// makes it the natural fake for exercising trackers without a rendering
/// surface, and an adapter for hosts that receive intersection data from an
/// external platform.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use folio_core::viewport::ManualReporter;
/// use folio_core::{TrackerOptions, VisibilityTracker};
///
/// let reporter = Arc::new(ManualReporter::new());
/// let element = reporter.create_element();
///
/// let tracker = VisibilityTracker::create(reporter.clone(), TrackerOptions::default());
/// tracker.handle().bind(element);
///
/// reporter.deliver(element, 0.15);
/// assert!(tracker.revealed());
/// ```
#[derive(Default)]
pub struct ManualReporter {
    elements: Mutex<SlotMap<ElementId, ()>>,
    subscriptions: SubscriptionTable,
}

impl ManualReporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh element ID.
    pub fn create_element(&self) -> ElementId {
        self.elements.lock().insert(())
    }

    /// Deliver an entry with the given ratio to every observer of `element`.
    ///
    /// Returns the number of callbacks invoked.
    pub fn deliver(&self, element: ElementId, ratio: f32) -> usize {
        self.deliver_entry(IntersectionEntry::new(element, ratio))
    }

    /// Deliver a prepared entry to every observer of `entry.element`.
    pub fn deliver_entry(&self, entry: IntersectionEntry) -> usize {
        let pending = self.subscriptions.with_mut(|subs| {
            subs.iter_mut()
                .filter(|(_, sub)| sub.element == entry.element)
                .map(|(id, sub)| {
                    sub.last_met = Some(entry.meets(sub.threshold));
                    (id, sub.callback.clone(), entry)
                })
                .collect::<Vec<_>>()
        });
        tracing::trace!(
            target: "folio_core::viewport",
            element = ?entry.element,
            ratio = entry.ratio,
            observers = pending.len(),
            "manual delivery"
        );
        self.subscriptions.dispatch(pending)
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether any subscription is observing `element`.
    pub fn is_observed(&self, element: ElementId) -> bool {
        !self.subscriptions.thresholds_for(element).is_empty()
    }

    /// Thresholds of the live subscriptions on `element`.
    pub fn thresholds_for(&self, element: ElementId) -> Vec<f32> {
        self.subscriptions.thresholds_for(element)
    }
}

impl IntersectionReporter for ManualReporter {
    fn observe(
        &self,
        element: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        let id = self.subscriptions.insert(element, threshold, callback);
        tracing::trace!(target: "folio_core::viewport", ?id, ?element, threshold, "observe");
        id
    }

    fn unobserve(&self, id: SubscriptionId) -> bool {
        let removed = self.subscriptions.remove(id);
        tracing::trace!(target: "folio_core::viewport", ?id, removed, "unobserve");
        removed
    }
}
