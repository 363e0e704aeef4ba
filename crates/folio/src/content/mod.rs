//! Static site content: biography, media appearances and publications.
//!
//! Content is stored as plain text and validated into typed values (URLs,
//! dates) when a page is built.

mod about;
mod home;
mod media;
mod publications;

pub use about::{Biography, biography};
pub use home::{Profile, profile};
pub use media::{MediaItem, media_items};
pub use publications::{Outlet, outlets};

use url::Url;

use crate::error::{Error, Result};

/// Width requested from the image host.
const THUMBNAIL_SIZE: &str = "w2000";

/// An image with alternative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: Url,
    pub alt: String,
}

impl Image {
    /// A hosted image identified by its file id.
    pub fn hosted(file_id: &str, alt: impl Into<String>) -> Result<Self> {
        Ok(Self {
            src: thumbnail_url(file_id)?,
            alt: alt.into(),
        })
    }
}

/// Thumbnail URL for a hosted image file.
pub fn thumbnail_url(file_id: &str) -> Result<Url> {
    let mut url = parse_url("https://drive.google.com/thumbnail")?;
    url.query_pairs_mut()
        .append_pair("id", file_id)
        .append_pair("sz", THUMBNAIL_SIZE);
    Ok(url)
}

pub(crate) fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|source| Error::Url {
        value: value.to_string(),
        source,
    })
}
