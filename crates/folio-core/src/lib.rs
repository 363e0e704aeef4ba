//! Core systems for Folio.
//!
//! This crate provides the foundational pieces behind Folio's scroll-reveal
//! pages:
//!
//! - **Visibility Tracking**: one-shot reveal trackers bound to element handles
//! - **Viewport Intersection**: the reporter abstraction, a geometric scroll
//!   viewport and a manually driven reporter
//! - **Signal/Slot System**: change notification between objects
//! - **Property System**: change-detecting values
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_core::geometry::{Rect, Size};
//! use folio_core::viewport::ScrollViewport;
//! use folio_core::{TrackerOptions, VisibilityTracker};
//!
//! let viewport = Arc::new(ScrollViewport::new(Size::new(800.0, 600.0)));
//! let card = viewport.add_element(Rect::new(0.0, 900.0, 800.0, 200.0));
//!
//! let tracker = VisibilityTracker::create(viewport.clone(), TrackerOptions::default());
//! tracker.handle().bind(card);
//! assert!(!tracker.revealed());
//!
//! viewport.scroll_to(0.0, 400.0);
//! assert!(tracker.revealed());
//!
//! // Scrolling away never hides it again
//! viewport.scroll_to(0.0, 0.0);
//! assert!(tracker.revealed());
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod property;
pub mod signal;
pub mod viewport;
pub mod visibility;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use viewport::{ElementId, IntersectionEntry, IntersectionReporter, SubscriptionId};
pub use visibility::{
    DEFAULT_THRESHOLD, ElementHandle, RevealMode, TrackerOptions, TrackerSlot, TrackerState,
    VisibilityTracker,
};
