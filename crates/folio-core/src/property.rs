//! Property system for Folio.
//!
//! Properties are the data backbone of the signal/slot system: when a
//! property changes, its owner emits a signal to notify interested parties.
//!
//! # Example
//!
//! ```
//! use folio_core::{Property, Signal};
//!
//! struct Flag {
//!     value: Property<bool>,
//!     value_changed: Signal<bool>,
//! }
//!
//! impl Flag {
//!     fn raise(&self) {
//!         if self.value.set(true) {
//!             self.value_changed.emit(true);
//!         }
//!     }
//! }
//!
//! let flag = Flag { value: Property::new(false), value_changed: Signal::new() };
//! flag.raise();
//! assert!(flag.value.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(false);

        // Same value - no change
        assert!(!prop.set(false));

        // Different value - changed
        assert!(prop.set(true));
        assert!(prop.get());
    }

    #[test]
    fn test_property_debug() {
        let prop = Property::new(Some(3));
        assert_eq!(format!("{prop:?}"), "Property { value: Some(3) }");
    }
}
