//! Subscription bookkeeping shared by the reporters.

use parking_lot::Mutex;
use slotmap::SlotMap;

use super::{ElementId, IntersectionCallback, IntersectionEntry, SubscriptionId};

pub(crate) struct Subscription {
    pub element: ElementId,
    pub threshold: f32,
    pub callback: IntersectionCallback,
    /// Whether the last delivered entry met the threshold.
    pub last_met: Option<bool>,
}

/// A notification collected under the lock, delivered after it is released.
pub(crate) type Pending = (SubscriptionId, IntersectionCallback, IntersectionEntry);

#[derive(Default)]
pub(crate) struct SubscriptionTable {
    entries: Mutex<SlotMap<SubscriptionId, Subscription>>,
}

impl SubscriptionTable {
    pub fn insert(
        &self,
        element: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        self.entries.lock().insert(Subscription {
            element,
            threshold,
            callback,
            last_met: None,
        })
    }

    pub fn remove(&self, id: SubscriptionId) -> bool {
        self.entries.lock().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.lock().contains_key(id)
    }

    /// Thresholds of every live subscription on `element`.
    pub fn thresholds_for(&self, element: ElementId) -> Vec<f32> {
        self.entries
            .lock()
            .values()
            .filter(|sub| sub.element == element)
            .map(|sub| sub.threshold)
            .collect()
    }

    /// Run `f` with exclusive access to the table.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SlotMap<SubscriptionId, Subscription>) -> R) -> R {
        f(&mut self.entries.lock())
    }

    /// Deliver collected notifications, skipping any whose subscription was
    /// removed in the meantime. Returns the number of callbacks invoked.
    pub fn dispatch(&self, pending: Vec<Pending>) -> usize {
        let mut delivered = 0;
        for (id, callback, entry) in pending {
            if !self.contains(id) {
                tracing::trace!(target: "folio_core::viewport", ?id, "subscription released before delivery");
                continue;
            }
            callback(&entry);
            delivered += 1;
        }
        delivered
    }
}
