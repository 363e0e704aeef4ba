//! Error types for Folio core.
//!
//! Visibility tracking itself never fails: an element that is never bound or
//! never scrolled into view simply stays hidden. The errors here cover the
//! strict entry points used by configuration and viewport geometry updates.

use crate::viewport::ElementId;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Folio core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A threshold outside `[0, 1]` (or NaN) was supplied to a strict constructor.
    #[error("Invalid intersection threshold {value}: must be within [0, 1]")]
    InvalidThreshold { value: f32 },

    /// The element is not registered with the viewport.
    #[error("Unknown element {0:?}")]
    UnknownElement(ElementId),
}

impl Error {
    /// Create a threshold error.
    pub fn invalid_threshold(value: f32) -> Self {
        Self::InvalidThreshold { value }
    }
}
