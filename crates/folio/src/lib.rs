//! Folio: scroll-reveal portfolio pages rendered to static HTML.
//!
//! Pages are built from static content, laid out in a
//! [`ScrollViewport`](folio_core::viewport::ScrollViewport), and every
//! reveal block is tracked by a one-shot visibility tracker. Rendering
//! reflects each block's reveal state at the current scroll position.
//!
//! # Example
//!
//! ```
//! use folio::prelude::*;
//!
//! let mut site = Site::new(SiteConfig::default())?;
//! let media = site.view_mut("/media")?;
//!
//! // Scroll to the end: every card has now been revealed
//! media.scroll_to_bottom();
//! assert_eq!(media.revealed_count(), media.page().reveal_count());
//!
//! let html = site.render("/media")?;
//! assert!(html.contains("Read More"));
//! # Ok::<(), folio::Error>(())
//! ```

pub mod config;
pub mod content;
pub mod page;
pub mod prelude;
pub mod site;

mod error;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use site::Site;
