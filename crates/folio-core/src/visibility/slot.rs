//! Dependency-driven tracker re-creation.

use std::sync::Arc;

use super::handle::ElementHandle;
use super::options::TrackerOptions;
use super::tracker::VisibilityTracker;
use crate::viewport::IntersectionReporter;

/// Owns a persistent handle and at most one tracker for it.
///
/// A host calls [`ensure`](Self::ensure) on every render with its current
/// options. Equal options keep the existing tracker (and its latch); changed
/// options tear the old tracker down before a new one starts observing the
/// same handle. The new tracker begins with `revealed == false`.
pub struct TrackerSlot {
    reporter: Arc<dyn IntersectionReporter>,
    handle: ElementHandle,
    tracker: Option<VisibilityTracker>,
}

impl TrackerSlot {
    /// Create an empty slot with an unbound handle.
    pub fn new(reporter: Arc<dyn IntersectionReporter>) -> Self {
        Self {
            reporter,
            handle: ElementHandle::new(),
            tracker: None,
        }
    }

    /// The handle shared by every tracker this slot creates.
    pub fn handle(&self) -> &ElementHandle {
        &self.handle
    }

    /// Get the tracker for `options`, re-creating it if they changed.
    pub fn ensure(&mut self, options: TrackerOptions) -> &VisibilityTracker {
        if let Some(previous) = self.tracker.take_if(|tracker| tracker.options() != options) {
            tracing::debug!(
                target: "folio_core::visibility",
                previous = ?previous.options(),
                next = ?options,
                "options changed, recreating tracker"
            );
            previous.teardown();
        }

        let reporter = &self.reporter;
        let handle = &self.handle;
        self.tracker.get_or_insert_with(|| {
            VisibilityTracker::with_handle(reporter.clone(), handle.clone(), options)
        })
    }

    /// The current tracker, if any.
    pub fn tracker(&self) -> Option<&VisibilityTracker> {
        self.tracker.as_ref()
    }

    /// Whether the current tracker has revealed its element.
    pub fn revealed(&self) -> bool {
        self.tracker.as_ref().is_some_and(VisibilityTracker::revealed)
    }

    /// Tear down the current tracker without creating another.
    pub fn clear(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.teardown();
        }
    }
}
