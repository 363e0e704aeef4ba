//! A page laid out in a scrollable viewport, with one tracker per reveal block.

use std::sync::Arc;
use std::time::Duration;

use maud::Markup;

use folio_core::geometry::{Rect, Size};
use folio_core::viewport::ScrollViewport;
use folio_core::{ElementId, TrackerOptions, TrackerSlot};
use folio_style::reveal::RevealClasses;
use folio_style::transition::RevealTransition;

use super::Page;
use super::html;
use crate::config::SiteConfig;
use crate::error::Result;

/// Horizontal and top padding around the content column.
const PAGE_PADDING: f32 = 64.0;

/// Widest content column.
const MAX_CONTENT_WIDTH: f32 = 768.0;

struct LaidOutBlock {
    element: ElementId,
    slot: Option<TrackerSlot>,
}

/// A [`Page`] placed in a [`ScrollViewport`].
///
/// Every block is registered with the viewport at its estimated position.
/// Reveal blocks each get a [`TrackerSlot`] bound to their element, so
/// scrolling reveals them the same way a browser would.
pub struct PageView {
    page: Page,
    viewport: Arc<ScrollViewport>,
    blocks: Vec<LaidOutBlock>,
    options: TrackerOptions,
    transition: RevealTransition,
    stagger: Duration,
}

fn column(viewport: Size) -> (f32, f32) {
    let width = (viewport.width - PAGE_PADDING * 2.0).clamp(1.0, MAX_CONTENT_WIDTH);
    let left = ((viewport.width - width) / 2.0).max(0.0);
    (left, width)
}

fn layout(page: &Page, viewport: Size) -> Vec<Rect> {
    let (left, width) = column(viewport);
    let mut top = PAGE_PADDING;
    page.blocks()
        .iter()
        .map(|block| {
            let height = block.estimated_height(width);
            let rect = Rect::new(left, top, width, height);
            top += height;
            rect
        })
        .collect()
}

impl PageView {
    /// Lay out `page` for the configured viewport and start tracking.
    ///
    /// The viewport is scrolled to the configured initial offset before any
    /// tracker observes, so only blocks visible there start out revealed.
    pub fn new(page: Page, config: &SiteConfig) -> Result<Self> {
        let options = config.tracker_options()?;
        let transition = config.transition()?;
        let viewport = Arc::new(ScrollViewport::new(config.viewport_size()));

        let rects = layout(&page, viewport.size());
        let mut blocks: Vec<LaidOutBlock> = page
            .blocks()
            .iter()
            .zip(rects)
            .map(|(block, rect)| LaidOutBlock {
                element: viewport.add_element(rect),
                slot: block
                    .is_reveal()
                    .then(|| TrackerSlot::new(viewport.clone())),
            })
            .collect();

        viewport.scroll_to(0.0, config.viewport.initial_scroll);

        for block in &mut blocks {
            if let Some(slot) = &mut block.slot {
                slot.ensure(options);
                slot.handle().bind(block.element);
            }
        }

        tracing::debug!(
            target: "folio::site",
            route = %page.route(),
            blocks = blocks.len(),
            reveals = page.reveal_count(),
            "page laid out"
        );

        Ok(Self {
            page,
            viewport,
            blocks,
            options,
            transition,
            stagger: config.stagger(),
        })
    }

    /// The page being shown.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The viewport the page is laid out in.
    pub fn viewport(&self) -> &Arc<ScrollViewport> {
        &self.viewport
    }

    /// Options shared by every tracker on the page.
    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    /// Change tracker options; trackers whose options differ are re-created.
    pub fn set_options(&mut self, options: TrackerOptions) {
        self.options = options;
        for block in &mut self.blocks {
            if let Some(slot) = &mut block.slot {
                slot.ensure(options);
            }
        }
    }

    /// Scroll vertically to `y`, returning the number of notifications delivered.
    pub fn scroll_to(&self, y: f32) -> usize {
        let x = self.viewport.scroll_offset().x;
        self.viewport.scroll_to(x, y)
    }

    /// Scroll vertically by `dy`.
    pub fn scroll_by(&self, dy: f32) -> usize {
        self.viewport.scroll_by(0.0, dy)
    }

    /// Scroll to the end of the page.
    pub fn scroll_to_bottom(&self) -> usize {
        self.scroll_to(self.viewport.max_scroll().y)
    }

    /// Resize the viewport and lay the page out again for the new width.
    ///
    /// Trackers only see the finished layout, never a mix of old and new
    /// block positions.
    pub fn resize(&self, size: Size) -> Result<usize> {
        let rects: Vec<_> = self
            .blocks
            .iter()
            .map(|block| block.element)
            .zip(layout(&self.page, size))
            .collect();
        Ok(self.viewport.relayout(size, &rects)?)
    }

    /// Layout rectangle of block `index`.
    pub fn block_rect(&self, index: usize) -> Option<Rect> {
        let block = self.blocks.get(index)?;
        self.viewport.element_rect(block.element)
    }

    /// Reveal state of block `index`; `None` for blocks that do not reveal.
    pub fn is_revealed(&self, index: usize) -> Option<bool> {
        let slot = self.blocks.get(index)?.slot.as_ref()?;
        Some(slot.revealed())
    }

    /// Reveal state of every reveal block, by block index.
    pub fn reveal_states(&self) -> Vec<(usize, bool)> {
        (0..self.blocks.len())
            .filter_map(|index| Some((index, self.is_revealed(index)?)))
            .collect()
    }

    /// Number of revealed blocks.
    pub fn revealed_count(&self) -> usize {
        self.reveal_states()
            .into_iter()
            .filter(|(_, revealed)| *revealed)
            .count()
    }

    /// Classes for block `index` in its current state.
    pub fn reveal_classes(&self, index: usize) -> Option<RevealClasses> {
        let reveal = self.page.blocks().get(index)?.reveal()?;
        let revealed = self.is_revealed(index)?;
        let transition = match reveal.stagger {
            Some(position) => self.transition.staggered(position, self.stagger),
            None => self.transition,
        };
        Some(RevealClasses::new(reveal.preset, &transition, revealed))
    }

    /// Render the page body in its current reveal state.
    pub fn render_body(&self) -> Markup {
        html::render_blocks(self.page.blocks(), |index| self.reveal_classes(index))
    }
}
