//! Page building blocks and their layout estimates.

use folio_style::reveal::RevealPreset;

use crate::content::{Image, MediaItem, Outlet};

/// A run of paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Italicised name or title.
    Emphasis(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Emphasis(text) => text,
        }
    }
}

/// A paragraph made of inline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub content: Vec<Inline>,
    /// Rendered in a heavier weight as the lead paragraph.
    pub lead: bool,
}

impl Paragraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::Text(text.into())],
            lead: false,
        }
    }

    pub fn lead(text: impl Into<String>) -> Self {
        Self {
            lead: true,
            ..Self::plain(text)
        }
    }

    /// Number of characters across every run.
    pub fn char_count(&self) -> usize {
        self.content
            .iter()
            .map(|inline| inline.text().chars().count())
            .sum()
    }
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// What a block shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Page title.
    Heading(String),
    /// Landing-page introduction.
    Hero {
        name: String,
        role: String,
        tagline: String,
    },
    Paragraph(Paragraph),
    /// Full-width image.
    Image(Image),
    /// Image floated beside its paragraphs.
    Aside {
        image: Image,
        paragraphs: Vec<Paragraph>,
    },
    Nav(Vec<NavLink>),
    MediaCard(MediaItem),
    Publication(Outlet),
}

/// How a block enters when it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub preset: RevealPreset,
    /// Position in a staggered list.
    pub stagger: Option<usize>,
    /// Extra wrapper classes (spacing, width).
    pub wrapper_class: &'static str,
}

/// One vertically stacked block of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    reveal: Option<Reveal>,
}

// Layout estimates in pixels.
const LINE_HEIGHT: f32 = 26.0;
const AVERAGE_CHAR_WIDTH: f32 = 7.5;
const BLOCK_MARGIN: f32 = 24.0;
const HEADING_HEIGHT: f32 = 88.0;
const NAV_HEIGHT: f32 = 48.0;
const ASIDE_IMAGE_WIDTH: f32 = 192.0;
const CARD_IMAGE_HEIGHT: f32 = 160.0;
const CARD_TEXT_HEIGHT: f32 = 140.0;
const PUBLICATION_HEIGHT: f32 = 72.0;
const WIDE_IMAGE_ASPECT: f32 = 9.0 / 16.0;

fn text_height(chars: usize, width: f32) -> f32 {
    let per_line = (width / AVERAGE_CHAR_WIDTH).floor().max(1.0);
    (chars as f32 / per_line).ceil().max(1.0) * LINE_HEIGHT
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self { kind, reveal: None }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading(text.into()))
    }

    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self::new(BlockKind::Paragraph(paragraph))
    }

    /// Reveal this block with `preset` when it scrolls into view.
    pub fn revealed_with(mut self, preset: RevealPreset) -> Self {
        self.reveal = Some(Reveal {
            preset,
            stagger: None,
            wrapper_class: "",
        });
        self
    }

    /// Delay the reveal by its position in a list.
    pub fn staggered(mut self, index: usize) -> Self {
        if let Some(reveal) = &mut self.reveal {
            reveal.stagger = Some(index);
        }
        self
    }

    /// Add wrapper classes to a reveal block.
    pub fn wrapped_in(mut self, class: &'static str) -> Self {
        if let Some(reveal) = &mut self.reveal {
            reveal.wrapper_class = class;
        }
        self
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn is_reveal(&self) -> bool {
        self.reveal.is_some()
    }

    /// Estimated rendered height at `width`, including the bottom margin.
    pub fn estimated_height(&self, width: f32) -> f32 {
        let content = match &self.kind {
            BlockKind::Heading(_) => HEADING_HEIGHT,
            BlockKind::Hero { tagline, .. } => {
                HEADING_HEIGHT * 2.0 + text_height(tagline.chars().count(), width)
            }
            BlockKind::Paragraph(paragraph) => text_height(paragraph.char_count(), width),
            BlockKind::Image(_) => width * WIDE_IMAGE_ASPECT,
            BlockKind::Aside { paragraphs, .. } => {
                let text_width = width - ASIDE_IMAGE_WIDTH;
                let text: f32 = paragraphs
                    .iter()
                    .map(|p| text_height(p.char_count(), text_width) + BLOCK_MARGIN)
                    .sum();
                text.max(ASIDE_IMAGE_WIDTH)
            }
            BlockKind::Nav(_) => NAV_HEIGHT,
            BlockKind::MediaCard(_) => CARD_IMAGE_HEIGHT + CARD_TEXT_HEIGHT,
            BlockKind::Publication(_) => PUBLICATION_HEIGHT,
        };
        content + BLOCK_MARGIN
    }
}
