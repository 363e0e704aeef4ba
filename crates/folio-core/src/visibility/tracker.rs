//! The visibility tracker state machine.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::handle::ElementHandle;
use super::options::{RevealMode, TrackerOptions};
use crate::property::Property;
use crate::signal::{ConnectionGuard, Signal};
use crate::viewport::{
    ElementId, IntersectionCallback, IntersectionEntry, IntersectionReporter, SubscriptionId,
};

/// Lifecycle state of a [`VisibilityTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerState {
    /// The handle is not bound to an element; nothing is observed.
    Unbound,
    /// A subscription is live for the bound element.
    Observing,
    /// The one-shot latch fired and the subscription was released.
    Revealed,
    /// The tracker was discarded; it never observes again.
    TornDown,
}

struct Lifecycle {
    state: TrackerState,
    observed: Option<ElementId>,
    subscription: Option<SubscriptionId>,
    binding: Option<ConnectionGuard<Option<ElementId>>>,
}

struct TrackerInner {
    options: TrackerOptions,
    reporter: Arc<dyn IntersectionReporter>,
    lifecycle: Mutex<Lifecycle>,
    revealed: Property<bool>,
    revealed_changed: Signal<bool>,
}

impl TrackerInner {
    /// React to the host binding, rebinding or unbinding the handle.
    fn on_element_changed(self: &Arc<Self>, element: Option<ElementId>) {
        let mut lifecycle = self.lifecycle.lock();
        match (lifecycle.state, element) {
            (TrackerState::Revealed | TrackerState::TornDown, _) => {
                tracing::trace!(
                    target: "folio_core::visibility",
                    state = ?lifecycle.state,
                    "binding change ignored"
                );
            }
            (TrackerState::Unbound, None) => {}
            (TrackerState::Unbound, Some(element)) => {
                drop(lifecycle);
                self.start(element);
            }
            (TrackerState::Observing, Some(element)) if lifecycle.observed == Some(element) => {}
            (TrackerState::Observing, next) => {
                let released = lifecycle.subscription.take();
                lifecycle.state = TrackerState::Unbound;
                lifecycle.observed = None;
                drop(lifecycle);

                self.release(released);
                tracing::debug!(target: "folio_core::visibility", ?next, "handle rebound, observation released");
                if let Some(element) = next {
                    self.start(element);
                }
            }
        }
    }

    /// Enter `Observing` for `element`. No lock is held across `observe`, as
    /// reporters may deliver an initial notification synchronously.
    fn start(self: &Arc<Self>, element: ElementId) {
        {
            let mut lifecycle = self.lifecycle.lock();
            if lifecycle.state != TrackerState::Unbound {
                return;
            }
            lifecycle.state = TrackerState::Observing;
            lifecycle.observed = Some(element);
        }

        let weak: Weak<Self> = Arc::downgrade(self);
        let callback: IntersectionCallback = Arc::new(move |entry: &IntersectionEntry| {
            if let Some(inner) = weak.upgrade() {
                inner.on_intersection(entry);
            }
        });
        let id = self
            .reporter
            .observe(element, self.options.threshold(), callback);

        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.state == TrackerState::Observing && lifecycle.observed == Some(element) {
            lifecycle.subscription = Some(id);
            tracing::debug!(
                target: "folio_core::visibility",
                ?element,
                threshold = self.options.threshold(),
                "observing"
            );
        } else {
            // Latched (or torn down) during the initial notification
            drop(lifecycle);
            self.release(Some(id));
        }
    }

    fn on_intersection(&self, entry: &IntersectionEntry) {
        let meets = entry.meets(self.options.threshold());
        let mut lifecycle = self.lifecycle.lock();
        if lifecycle.state != TrackerState::Observing || lifecycle.observed != Some(entry.element) {
            tracing::trace!(
                target: "folio_core::visibility",
                state = ?lifecycle.state,
                "stale notification ignored"
            );
            return;
        }
        tracing::trace!(
            target: "folio_core::visibility",
            element = ?entry.element,
            ratio = entry.ratio,
            meets,
            "intersection"
        );

        match self.options.mode() {
            RevealMode::Once => {
                if !meets {
                    return;
                }
                lifecycle.state = TrackerState::Revealed;
                let released = lifecycle.subscription.take();
                drop(lifecycle);

                self.release(released);
                tracing::debug!(target: "folio_core::visibility", element = ?entry.element, "revealed");
                self.set_revealed(true);
            }
            RevealMode::Continuous => {
                drop(lifecycle);
                self.set_revealed(meets);
            }
        }
    }

    fn set_revealed(&self, revealed: bool) {
        if self.revealed.set(revealed) {
            self.revealed_changed.emit(revealed);
        }
    }

    fn release(&self, subscription: Option<SubscriptionId>) {
        if let Some(id) = subscription {
            self.reporter.unobserve(id);
        }
    }

    fn teardown(&self) {
        let (previous, released, binding) = {
            let mut lifecycle = self.lifecycle.lock();
            if lifecycle.state == TrackerState::TornDown {
                return;
            }
            let previous = std::mem::replace(&mut lifecycle.state, TrackerState::TornDown);
            lifecycle.observed = None;
            (previous, lifecycle.subscription.take(), lifecycle.binding.take())
        };
        drop(binding);
        self.release(released);
        tracing::debug!(target: "folio_core::visibility", ?previous, "torn down");
    }
}

/// Reports, once, whether an element has entered the viewport.
///
/// A tracker pairs an [`ElementHandle`] (bound by the host to one element)
/// with a read-only `revealed` flag. Nothing is observed until the handle is
/// bound. The first notification whose ratio meets the threshold sets
/// `revealed` and, in the default [`RevealMode::Once`], releases the
/// subscription immediately; `revealed` then never reverts for the lifetime
/// of the tracker.
///
/// Dropping the tracker (or calling [`teardown`](Self::teardown)) releases
/// the subscription synchronously. Teardown is idempotent.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use folio_core::viewport::ManualReporter;
/// use folio_core::{TrackerOptions, TrackerState, VisibilityTracker};
///
/// let reporter = Arc::new(ManualReporter::new());
/// let element = reporter.create_element();
/// let tracker = VisibilityTracker::create(reporter.clone(), TrackerOptions::default());
/// assert_eq!(tracker.state(), TrackerState::Unbound);
///
/// tracker.handle().bind(element);
/// reporter.deliver(element, 0.05);
/// assert!(!tracker.revealed());
///
/// reporter.deliver(element, 0.15);
/// assert!(tracker.revealed());
/// assert_eq!(reporter.subscription_count(), 0);
/// ```
pub struct VisibilityTracker {
    inner: Arc<TrackerInner>,
    handle: ElementHandle,
}

impl VisibilityTracker {
    /// Create a tracker with a fresh, unbound handle.
    pub fn create(reporter: Arc<dyn IntersectionReporter>, options: TrackerOptions) -> Self {
        Self::with_handle(reporter, ElementHandle::new(), options)
    }

    /// Create a tracker on an existing handle.
    ///
    /// If the handle is already bound, observation starts immediately.
    pub fn with_handle(
        reporter: Arc<dyn IntersectionReporter>,
        handle: ElementHandle,
        options: TrackerOptions,
    ) -> Self {
        let inner = Arc::new(TrackerInner {
            options,
            reporter,
            lifecycle: Mutex::new(Lifecycle {
                state: TrackerState::Unbound,
                observed: None,
                subscription: None,
                binding: None,
            }),
            revealed: Property::new(false),
            revealed_changed: Signal::new(),
        });

        let weak = Arc::downgrade(&inner);
        let binding = handle.on_change(move |element| {
            if let Some(inner) = weak.upgrade() {
                inner.on_element_changed(*element);
            }
        });
        inner.lifecycle.lock().binding = Some(binding);

        if let Some(element) = handle.element() {
            inner.start(element);
        }

        Self { inner, handle }
    }

    /// The attachment point the host binds to its element.
    pub fn handle(&self) -> &ElementHandle {
        &self.handle
    }

    /// Whether the element has satisfied the threshold.
    pub fn revealed(&self) -> bool {
        self.inner.revealed.get()
    }

    /// Emitted whenever `revealed` changes.
    pub fn revealed_changed(&self) -> &Signal<bool> {
        &self.inner.revealed_changed
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TrackerState {
        self.inner.lifecycle.lock().state
    }

    /// The options this tracker was created with.
    pub fn options(&self) -> TrackerOptions {
        self.inner.options
    }

    /// Release the observation and stop reacting to the handle.
    ///
    /// Safe to call any number of times, in any state. `revealed` keeps its
    /// last value.
    pub fn teardown(&self) {
        self.inner.teardown();
    }
}

impl Drop for VisibilityTracker {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

impl fmt::Debug for VisibilityTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("state", &self.state())
            .field("revealed", &self.revealed())
            .field("options", &self.inner.options)
            .field("handle", &self.handle)
            .finish()
    }
}

static_assertions::assert_impl_all!(VisibilityTracker: Send, Sync);
