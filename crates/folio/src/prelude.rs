//! Prelude module for Folio.
//!
//! ```ignore
//! use folio::prelude::*;
//! ```

// ============================================================================
// Site
// ============================================================================

pub use crate::config::SiteConfig;
pub use crate::site::Site;
pub use crate::{Error, Result};

// ============================================================================
// Pages
// ============================================================================

pub use crate::page::{Block, BlockKind, Page, PageView, Route};

// ============================================================================
// Visibility Tracking
// ============================================================================

pub use folio_core::geometry::{Rect, Size};
pub use folio_core::viewport::{ManualReporter, ScrollViewport};
pub use folio_core::{
    ElementHandle, IntersectionEntry, IntersectionReporter, RevealMode, TrackerOptions,
    TrackerSlot, TrackerState, VisibilityTracker,
};

// ============================================================================
// Presentation
// ============================================================================

pub use folio_style::prelude::{Easing, RevealClasses, RevealPreset, RevealTransition};
