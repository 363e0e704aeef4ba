//! The attachment point a host binds to one element.

use std::fmt;
use std::sync::Arc;

use crate::property::Property;
use crate::signal::{ConnectionGuard, Signal};
use crate::viewport::ElementId;

struct HandleInner {
    element: Property<Option<ElementId>>,
    element_changed: Arc<Signal<Option<ElementId>>>,
}

/// An opaque attachment point for a single element.
///
/// The host owns the element; the handle only records which element (if any)
/// is currently rendered for it. Cloning the handle shares the binding.
#[derive(Clone)]
pub struct ElementHandle {
    inner: Arc<HandleInner>,
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandle {
    /// Create an unbound handle.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HandleInner {
                element: Property::new(None),
                element_changed: Arc::new(Signal::new()),
            }),
        }
    }

    /// Bind the handle to a live element.
    pub fn bind(&self, element: ElementId) {
        self.set(Some(element));
    }

    /// Clear the binding (the element is no longer rendered).
    pub fn unbind(&self) {
        self.set(None);
    }

    /// Set the binding, notifying listeners if it changed.
    pub fn set(&self, element: Option<ElementId>) {
        if self.inner.element.set(element) {
            self.inner.element_changed.emit(element);
        }
    }

    /// The currently bound element.
    pub fn element(&self) -> Option<ElementId> {
        self.inner.element.get()
    }

    /// Whether the handle is bound to an element.
    pub fn is_bound(&self) -> bool {
        self.element().is_some()
    }

    /// Listen for binding changes until the guard is dropped.
    pub(crate) fn on_change<F>(&self, slot: F) -> ConnectionGuard<Option<ElementId>>
    where
        F: Fn(&Option<ElementId>) + Send + Sync + 'static,
    {
        self.inner.element_changed.connect_scoped(slot)
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle")
            .field("element", &self.element())
            .finish()
    }
}
