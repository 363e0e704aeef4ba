//! HTML rendering of pages.
//!
//! Markup uses the site's utility classes. Reveal blocks are wrapped in a
//! `div` carrying their transition classes, the classes for their current
//! state and, for staggered items, an inline transition delay.

use maud::{DOCTYPE, Markup, html};

use folio_style::reveal::RevealClasses;

use super::block::{Block, BlockKind, Inline, NavLink, Paragraph};
use super::Route;
use crate::content::{Image, MediaItem, Outlet};

const HEADING_CLASS: &str = "text-4xl font-bold text-sky-950 mb-12 font-['Inter']";
const PARAGRAPH_CLASS: &str = "text-sky-950 mb-6 leading-relaxed text-sm font-['Inter']";
const LEAD_CLASS: &str = "text-sky-950 mb-6 leading-relaxed text-sm font-semibold font-['Inter']";
const EMPHASIS_CLASS: &str = "italic font-medium";
const IMAGE_CLASS: &str = "w-full h-auto rounded-[15px] shadow-[2px_2px_2px_0px_rgba(0,89,173,0.50)]";
const ASIDE_IMAGE_CLASS: &str = "float-right w-48 ml-8 mb-4 h-auto rounded-[15px] \
    shadow-[2px_2px_2px_0px_rgba(0,89,173,0.50)]";
const CARD_IMAGE_CLASS: &str = "w-full md:w-56 h-40 md:h-40 rounded-[30px] \
    shadow-[0px_2px_2px_0px_rgba(0,89,173,1.00)] object-cover flex-shrink-0";
const CARD_TITLE_CLASS: &str = "text-xl font-bold text-sky-950 mb-3 leading-9 font-['Inter']";
const BYLINE_CLASS: &str = "text-sky-950 text-base font-normal font-['Inter']";
const READ_MORE_CLASS: &str = "inline-flex items-center gap-2 text-[#012d52] text-sm \
    font-semibold hover:gap-3 hover:underline transition-all";
const NAV_LINK_CLASS: &str = "text-sky-950 text-sm font-semibold hover:underline";

fn wrapper_class(wrapper: &str, classes: &RevealClasses) -> String {
    if wrapper.is_empty() {
        classes.class()
    } else {
        format!("{wrapper} {}", classes.class())
    }
}

/// Render blocks top to bottom. `reveal` supplies the classes of reveal
/// blocks by index.
pub fn render_blocks<F>(blocks: &[Block], reveal: F) -> Markup
where
    F: Fn(usize) -> Option<RevealClasses>,
{
    html! {
        @for (index, block) in blocks.iter().enumerate() {
            @match (block.reveal(), reveal(index)) {
                (Some(spec), Some(classes)) => {
                    div class=(wrapper_class(spec.wrapper_class, &classes))
                        data-revealed=(classes.is_revealed().to_string())
                        style=[classes.inline_style()] {
                        (render_kind(block.kind()))
                    }
                }
                _ => {
                    @match block.kind() {
                        BlockKind::Aside { .. } => {
                            div class="clearfix" { (render_kind(block.kind())) }
                        }
                        kind => { (render_kind(kind)) }
                    }
                }
            }
        }
    }
}

fn render_kind(kind: &BlockKind) -> Markup {
    html! {
        @match kind {
            BlockKind::Heading(text) => {
                h1 class=(HEADING_CLASS) { (text) }
            }
            BlockKind::Hero { name, role, tagline } => {
                h1 class=(HEADING_CLASS) { (name) }
                p class=(LEAD_CLASS) { (role) }
                p class=(PARAGRAPH_CLASS) { (tagline) }
            }
            BlockKind::Paragraph(paragraph) => { (render_paragraph(paragraph)) }
            BlockKind::Image(image) => { (render_image(image, IMAGE_CLASS)) }
            BlockKind::Aside { image, paragraphs } => {
                (render_image(image, ASIDE_IMAGE_CLASS))
                @for paragraph in paragraphs {
                    (render_paragraph(paragraph))
                }
            }
            BlockKind::Nav(links) => { (render_nav(links, None)) }
            BlockKind::MediaCard(item) => { (render_media_card(item)) }
            BlockKind::Publication(outlet) => { (render_publication(outlet)) }
        }
    }
}

fn render_paragraph(paragraph: &Paragraph) -> Markup {
    let class = if paragraph.lead { LEAD_CLASS } else { PARAGRAPH_CLASS };
    html! {
        p class=(class) {
            @for inline in &paragraph.content {
                @match inline {
                    Inline::Text(text) => { (text) }
                    Inline::Emphasis(text) => { span class=(EMPHASIS_CLASS) { (text) } }
                }
            }
        }
    }
}

fn render_image(image: &Image, class: &str) -> Markup {
    html! {
        img src=(image.src.as_str()) alt=(image.alt) class=(class);
    }
}

fn render_nav(links: &[NavLink], current: Option<Route>) -> Markup {
    html! {
        nav class="flex gap-6" {
            @for link in links {
                @let is_current = current.is_some_and(|route| route.path() == link.href);
                a href=(link.href) class=(NAV_LINK_CLASS) aria-current=[is_current.then_some("page")] {
                    (link.label)
                }
            }
        }
    }
}

fn render_media_card(item: &MediaItem) -> Markup {
    html! {
        article class="flex flex-col md:flex-row gap-6 items-start" {
            (render_image(&item.image(), CARD_IMAGE_CLASS))
            div class="flex-1" {
                h3 class=(CARD_TITLE_CLASS) { (item.headline()) }
                div class="flex items-center gap-2 mb-2" {
                    span class=(BYLINE_CLASS) { (item.byline()) }
                }
                a href=(item.link().as_str()) target="_blank" rel="noopener noreferrer"
                    class=(READ_MORE_CLASS) { "Read More" }
            }
        }
    }
}

fn render_publication(outlet: &Outlet) -> Markup {
    html! {
        article class="flex flex-col gap-2" {
            h3 class=(CARD_TITLE_CLASS) { (outlet.name) }
        }
    }
}

fn section_class(route: Route) -> &'static str {
    match route {
        Route::Media => "max-w-6xl mx-auto px-6 py-16",
        _ => "max-w-7xl mx-auto px-6 py-16",
    }
}

/// Wrap a rendered body in a complete document with site navigation.
pub fn render_document(site_title: &str, page_title: &str, route: Route, body: Markup) -> Markup {
    let links: Vec<_> = Route::ALL
        .into_iter()
        .map(|route| NavLink {
            label: route.label(),
            href: route.path(),
        })
        .collect();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " | " (site_title) }
            }
            body {
                header class="max-w-7xl mx-auto px-6 py-6" {
                    (render_nav(&links, Some(route)))
                }
                main {
                    section class=(section_class(route)) { (body) }
                }
            }
        }
    }
}
