//! Reveal presentation for Folio pages.
//!
//! A reveal block has two looks, hidden and revealed, and a transition
//! between them. This crate describes both as data:
//!
//! - [`RevealPreset`] picks the hidden look (fade and rise, optionally scaled)
//! - [`RevealTransition`] holds duration, easing and stagger delay
//! - [`RevealClasses`] renders the utility class list for a state
//!
//! # Example
//!
//! ```
//! use folio_style::prelude::*;
//!
//! let transition = RevealTransition::new().staggered(2, DEFAULT_STAGGER);
//! let classes = RevealClasses::new(RevealPreset::FadeSlideScale, &transition, false);
//!
//! assert_eq!(
//!     classes.class(),
//!     "transition-all duration-700 ease-out opacity-0 translate-y-5 scale-95"
//! );
//! assert_eq!(classes.inline_style(), Some("transition-delay: 300ms"));
//! ```

pub mod easing;
pub mod reveal;
pub mod transition;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::reveal::{RevealClasses, RevealPreset};
    pub use crate::transition::{RevealTransition, DEFAULT_DURATION, DEFAULT_STAGGER};
    pub use crate::{Error, Result};
}
