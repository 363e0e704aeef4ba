//! Scroll-reveal visibility tracking.
//!
//! A [`VisibilityTracker`] observes one element through an
//! [`IntersectionReporter`](crate::viewport::IntersectionReporter) and reports
//! whether it has ever satisfied its visibility threshold:
//!
//! ```text
//! Unbound --bind--> Observing --ratio >= threshold--> Revealed
//!    ^                  |
//!    +-----unbind-------+          (any state) --teardown--> TornDown
//! ```
//!
//! [`TrackerSlot`] adds the host-side lifecycle: it keeps one handle across
//! renders and re-creates the tracker only when its options change.

mod handle;
mod options;
mod slot;
mod tracker;

pub use handle::ElementHandle;
pub use options::{DEFAULT_THRESHOLD, RevealMode, TrackerOptions};
pub use slot::TrackerSlot;
pub use tracker::{TrackerState, VisibilityTracker};
