//! The four site pages and their block layout.

pub mod block;
pub mod html;
mod view;

pub use block::{Block, BlockKind, Inline, NavLink, Paragraph, Reveal};
pub use view::PageView;

use std::fmt;
use std::str::FromStr;

use folio_style::reveal::RevealPreset;

use crate::content::{self, Image};
use crate::error::{Error, Result};

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Media,
    Publications,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Media, Route::Publications];

    /// URL path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Media => "/media",
            Self::Publications => "/publications",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Media => "Media",
            Self::Publications => "Publications",
        }
    }

    /// Output file relative to the export directory.
    pub fn file_path(self) -> std::path::PathBuf {
        let mut path = std::path::PathBuf::new();
        let dir = self.path().trim_start_matches('/');
        if !dir.is_empty() {
            path.push(dir);
        }
        path.push("index.html");
        path
    }

    fn nav_link(self) -> NavLink {
        NavLink {
            label: self.label(),
            href: self.path(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))
    }
}

/// A page: a title and its blocks, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    route: Route,
    title: &'static str,
    blocks: Vec<Block>,
}

impl Page {
    /// Build the page served at `route`.
    pub fn build(route: Route) -> Result<Self> {
        match route {
            Route::Home => home(),
            Route::About => about(),
            Route::Media => media(),
            Route::Publications => publications(),
        }
    }

    /// The route the page is served at.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Page title, shown before the site title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Blocks from top to bottom.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks that reveal on scroll.
    pub fn reveal_count(&self) -> usize {
        self.blocks.iter().filter(|block| block.is_reveal()).count()
    }
}

fn home() -> Result<Page> {
    let profile = content::profile()?;
    let nav = Route::ALL
        .into_iter()
        .filter(|route| *route != Route::Home)
        .map(Route::nav_link)
        .collect();
    Ok(Page {
        route: Route::Home,
        title: "Home",
        blocks: vec![
            Block::new(BlockKind::Hero {
                name: profile.name.to_string(),
                role: format!("{}, {}", profile.role, profile.location),
                tagline: profile.tagline.to_string(),
            })
            .revealed_with(RevealPreset::FadeSlide)
            .wrapped_in("w-full"),
            Block::new(BlockKind::Nav(nav)),
        ],
    })
}

fn about() -> Result<Page> {
    let bio = content::biography()?;
    let (before, newsletter, after) = bio.newsletter;
    let image = |image: Image| Block::new(BlockKind::Image(image));
    Ok(Page {
        route: Route::About,
        title: "About",
        blocks: vec![
            Block::heading("About"),
            image(bio.wide_image)
                .revealed_with(RevealPreset::FadeSlideScale)
                .wrapped_in("mb-6"),
            Block::paragraph(Paragraph::lead(bio.introduction)),
            Block::paragraph(Paragraph::plain(bio.education)),
            Block::paragraph(Paragraph::plain(bio.career)),
            Block::new(BlockKind::Aside {
                image: bio.portrait,
                paragraphs: vec![
                    Paragraph::plain(bio.published_in),
                    Paragraph {
                        content: vec![
                            Inline::Text(before.to_string()),
                            Inline::Emphasis(newsletter.to_string()),
                            Inline::Text(after.to_string()),
                        ],
                        lead: false,
                    },
                ],
            })
            .revealed_with(RevealPreset::FadeSlideScale)
            .wrapped_in("clearfix"),
            Block::paragraph(Paragraph::plain(bio.collaboration)),
        ],
    })
}

fn media() -> Result<Page> {
    let mut blocks = vec![
        Block::heading("Media")
            .revealed_with(RevealPreset::FadeSlide)
            .wrapped_in("w-full"),
    ];
    blocks.extend(
        content::media_items()?
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Block::new(BlockKind::MediaCard(item))
                    .revealed_with(RevealPreset::FadeSlideScale)
                    .staggered(index)
            }),
    );
    Ok(Page {
        route: Route::Media,
        title: "Media",
        blocks,
    })
}

fn publications() -> Result<Page> {
    let mut blocks = vec![
        Block::heading("Publications")
            .revealed_with(RevealPreset::FadeSlide)
            .wrapped_in("w-full"),
    ];
    blocks.extend(content::outlets().iter().enumerate().map(|(index, outlet)| {
        Block::new(BlockKind::Publication(*outlet))
            .revealed_with(RevealPreset::FadeSlideScale)
            .staggered(index)
    }));
    Ok(Page {
        route: Route::Publications,
        title: "Publications",
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/media/".parse::<Route>().unwrap(), Route::Media);
        assert!(matches!("/blog".parse::<Route>(), Err(Error::UnknownRoute(_))));
        assert_eq!(Route::Home.file_path(), std::path::PathBuf::from("index.html"));
        assert_eq!(
            Route::About.file_path(),
            std::path::Path::new("about").join("index.html")
        );
    }

    #[test]
    fn test_about_reveals_both_images() {
        let page = Page::build(Route::About).unwrap();
        assert_eq!(page.reveal_count(), 2);
        assert!(matches!(page.blocks()[0].kind(), BlockKind::Heading(text) if text == "About"));
        assert!(matches!(page.blocks()[1].kind(), BlockKind::Image(_)));
    }

    #[test]
    fn test_media_cards_are_staggered_in_order() {
        let page = Page::build(Route::Media).unwrap();
        let staggers: Vec<_> = page
            .blocks()
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::MediaCard(_)))
            .map(|block| block.reveal().and_then(|reveal| reveal.stagger))
            .collect();
        assert_eq!(staggers, [Some(0), Some(1), Some(2)]);
        assert_eq!(
            page.blocks()[0].reveal().map(|reveal| reveal.preset),
            Some(RevealPreset::FadeSlide)
        );
    }

    #[test]
    fn test_home_links_to_other_pages() {
        let page = Page::build(Route::Home).unwrap();
        let BlockKind::Nav(links) = page.blocks()[1].kind() else {
            panic!("expected navigation");
        };
        let hrefs: Vec<_> = links.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, ["/about", "/media", "/publications"]);
    }
}
