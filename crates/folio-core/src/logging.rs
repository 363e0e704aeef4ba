//! Logging facilities for Folio.
//!
//! Folio uses the `tracing` crate for instrumentation. Libraries never install
//! a subscriber; applications (and tests that want output) do:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("folio_core::visibility=debug")
//!     .init();
//! ```
//!
//! Tracker lifecycle transitions are logged at `debug`, individual
//! intersection notifications at `trace`, and clamped thresholds at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "folio_core";
    /// Visibility tracker target.
    pub const VISIBILITY: &str = "folio_core::visibility";
    /// Viewport and intersection reporting target.
    pub const VIEWPORT: &str = "folio_core::viewport";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "folio_core::signal";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a render or a batch of viewport updates.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "folio::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
