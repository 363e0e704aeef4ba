//! A scrollable viewport that computes intersection ratios geometrically.

use parking_lot::Mutex;
use slotmap::SlotMap;

use super::subscriptions::{Pending, SubscriptionTable};
use super::{
    ElementId, IntersectionCallback, IntersectionEntry, IntersectionReporter, SubscriptionId,
};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};

struct ViewportState {
    size: Size,
    scroll: Point,
    elements: SlotMap<ElementId, Rect>,
}

impl ViewportState {
    fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll.x, self.scroll.y, self.size.width, self.size.height)
    }

    fn content_extent(&self) -> Size {
        self.elements.values().fold(Size::ZERO, |extent, rect| {
            Size::new(extent.width.max(rect.right()), extent.height.max(rect.bottom()))
        })
    }

    fn max_scroll(&self) -> Point {
        let extent = self.content_extent();
        Point::new(
            (extent.width - self.size.width).max(0.0),
            (extent.height - self.size.height).max(0.0),
        )
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.scroll = Point::new(self.scroll.x.min(max.x), self.scroll.y.min(max.y));
    }

    fn entry_for(&self, element: ElementId) -> Option<IntersectionEntry> {
        let rect = self.elements.get(element)?;
        Some(IntersectionEntry::new(
            element,
            rect.intersection_ratio(&self.visible_rect()),
        ))
    }
}

/// A viewport over laid-out content, reporting element intersections.
///
/// Elements are rectangles in content coordinates. The visible region is the
/// viewport size placed at the current scroll offset. Like the browser's
/// intersection observer, the viewport delivers an initial entry when an
/// element is observed, then one entry each time the element moves across
/// the subscription's threshold in either direction (after a scroll, resize,
/// or geometry change).
///
/// Scroll offsets are clamped to the content extent.
///
/// # Example
///
/// ```
/// use folio_core::geometry::{Rect, Size};
/// use folio_core::viewport::ScrollViewport;
///
/// let viewport = ScrollViewport::new(Size::new(800.0, 600.0));
/// let below_fold = viewport.add_element(Rect::new(0.0, 1000.0, 800.0, 200.0));
///
/// assert_eq!(viewport.ratio_of(below_fold), Some(0.0));
/// viewport.scroll_to(0.0, 500.0);
/// assert_eq!(viewport.ratio_of(below_fold), Some(0.5));
/// ```
pub struct ScrollViewport {
    state: Mutex<ViewportState>,
    subscriptions: SubscriptionTable,
}

impl ScrollViewport {
    /// Create a viewport of the given size, scrolled to the origin.
    pub fn new(size: Size) -> Self {
        Self {
            state: Mutex::new(ViewportState {
                size,
                scroll: Point::ZERO,
                elements: SlotMap::with_key(),
            }),
            subscriptions: SubscriptionTable::default(),
        }
    }

    /// The viewport size.
    pub fn size(&self) -> Size {
        self.state.lock().size
    }

    /// The current scroll offset.
    pub fn scroll_offset(&self) -> Point {
        self.state.lock().scroll
    }

    /// The visible region in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        self.state.lock().visible_rect()
    }

    /// The bounding extent of all registered elements.
    pub fn content_extent(&self) -> Size {
        self.state.lock().content_extent()
    }

    /// The largest reachable scroll offset.
    pub fn max_scroll(&self) -> Point {
        self.state.lock().max_scroll()
    }

    /// Register an element at `rect` (content coordinates).
    ///
    /// Existing observers are not notified; new elements have no observers.
    pub fn add_element(&self, rect: Rect) -> ElementId {
        let id = self.state.lock().elements.insert(rect);
        tracing::trace!(target: "folio_core::viewport", element = ?id, ?rect, "element added");
        id
    }

    /// The rectangle of a registered element.
    pub fn element_rect(&self, element: ElementId) -> Option<Rect> {
        self.state.lock().elements.get(element).copied()
    }

    /// Current intersection ratio of a registered element.
    pub fn ratio_of(&self, element: ElementId) -> Option<f32> {
        self.state.lock().entry_for(element).map(|entry| entry.ratio)
    }

    /// Number of registered elements.
    pub fn element_count(&self) -> usize {
        self.state.lock().elements.len()
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Move an element, notifying observers whose threshold it crosses.
    pub fn set_element_rect(&self, element: ElementId, rect: Rect) -> Result<usize> {
        {
            let mut state = self.state.lock();
            let slot = state
                .elements
                .get_mut(element)
                .ok_or(Error::UnknownElement(element))?;
            *slot = rect;
            state.clamp_scroll();
        }
        Ok(self.notify_crossings())
    }

    /// Remove an element. Observers receive a final zero-ratio entry if they
    /// last saw the element meeting their threshold; their subscriptions stay
    /// registered until unobserved but never fire again.
    pub fn remove_element(&self, element: ElementId) -> Result<usize> {
        self.state
            .lock()
            .elements
            .remove(element)
            .ok_or(Error::UnknownElement(element))?;

        let pending: Vec<Pending> = self.subscriptions.with_mut(|subs| {
            subs.iter_mut()
                .filter(|(_, sub)| sub.element == element)
                .filter_map(|(id, sub)| {
                    let was_met = sub.last_met.replace(false);
                    (was_met == Some(true))
                        .then(|| (id, sub.callback.clone(), IntersectionEntry::new(element, 0.0)))
                })
                .collect()
        });
        tracing::debug!(target: "folio_core::viewport", ?element, notified = pending.len(), "element removed");
        Ok(self.subscriptions.dispatch(pending))
    }

    /// Scroll to an absolute offset, clamped to the content extent.
    ///
    /// Returns the number of notifications delivered.
    pub fn scroll_to(&self, x: f32, y: f32) -> usize {
        {
            let mut state = self.state.lock();
            let max = state.max_scroll();
            state.scroll = Point::new(x.clamp(0.0, max.x), y.clamp(0.0, max.y));
            tracing::trace!(target: "folio_core::viewport", scroll = ?state.scroll, "scrolled");
        }
        self.notify_crossings()
    }

    /// Scroll by a relative amount.
    pub fn scroll_by(&self, dx: f32, dy: f32) -> usize {
        let current = self.scroll_offset();
        self.scroll_to(current.x + dx, current.y + dy)
    }

    /// Resize the viewport, re-clamping the scroll offset.
    pub fn resize(&self, size: Size) -> usize {
        {
            let mut state = self.state.lock();
            state.size = size;
            state.clamp_scroll();
        }
        self.notify_crossings()
    }

    /// Resize the viewport and move several elements as one layout change.
    ///
    /// The scroll offset is re-clamped against the new extent and observers
    /// are notified once, against the final geometry only. Nothing changes
    /// if any element is unknown.
    pub fn relayout(&self, size: Size, rects: &[(ElementId, Rect)]) -> Result<usize> {
        {
            let mut state = self.state.lock();
            if let Some((element, _)) = rects
                .iter()
                .find(|(element, _)| !state.elements.contains_key(*element))
            {
                return Err(Error::UnknownElement(*element));
            }
            state.size = size;
            for (element, rect) in rects {
                if let Some(slot) = state.elements.get_mut(*element) {
                    *slot = *rect;
                }
            }
            state.clamp_scroll();
            tracing::trace!(target: "folio_core::viewport", ?size, moved = rects.len(), "relayout");
        }
        Ok(self.notify_crossings())
    }

    /// Collect entries for every subscription whose threshold state changed,
    /// then deliver them with no lock held.
    fn notify_crossings(&self) -> usize {
        let pending: Vec<Pending> = {
            let state = self.state.lock();
            self.subscriptions.with_mut(|subs| {
                subs.iter_mut()
                    .filter_map(|(id, sub)| {
                        let entry = state.entry_for(sub.element)?;
                        let met = entry.meets(sub.threshold);
                        if sub.last_met == Some(met) {
                            return None;
                        }
                        sub.last_met = Some(met);
                        Some((id, sub.callback.clone(), entry))
                    })
                    .collect()
            })
        };
        if !pending.is_empty() {
            tracing::trace!(target: "folio_core::viewport", crossings = pending.len(), "threshold crossings");
        }
        self.subscriptions.dispatch(pending)
    }
}

impl IntersectionReporter for ScrollViewport {
    fn observe(
        &self,
        element: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        let initial = self.state.lock().entry_for(element);
        let id = self.subscriptions.insert(element, threshold, callback.clone());
        tracing::trace!(target: "folio_core::viewport", ?id, ?element, threshold, "observe");

        match initial {
            Some(entry) => {
                self.subscriptions.with_mut(|subs| {
                    if let Some(sub) = subs.get_mut(id) {
                        sub.last_met = Some(entry.meets(threshold));
                    }
                });
                self.subscriptions.dispatch(vec![(id, callback, entry)]);
            }
            None => {
                tracing::debug!(target: "folio_core::viewport", ?element, "observing unknown element");
            }
        }
        id
    }

    fn unobserve(&self, id: SubscriptionId) -> bool {
        let removed = self.subscriptions.remove(id);
        tracing::trace!(target: "folio_core::viewport", ?id, removed, "unobserve");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recording() -> (IntersectionCallback, Arc<Mutex<Vec<(f32, bool)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let callback: IntersectionCallback = Arc::new(move |entry: &IntersectionEntry| {
            seen_clone.lock().push((entry.ratio, entry.is_intersecting));
        });
        (callback, seen)
    }

    fn tall_viewport() -> ScrollViewport {
        let viewport = ScrollViewport::new(Size::new(100.0, 100.0));
        // Content extends to y = 1000 so every offset below is reachable
        viewport.add_element(Rect::new(0.0, 990.0, 100.0, 10.0));
        viewport
    }

    #[test]
    fn test_initial_notification_on_observe() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 0.0, 100.0, 50.0));
        let (callback, seen) = recording();

        viewport.observe(element, 0.1, callback);
        assert_eq!(*seen.lock(), vec![(1.0, true)]);
    }

    #[test]
    fn test_crossing_notifications() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 200.0, 100.0, 100.0));
        let (callback, seen) = recording();

        viewport.observe(element, 0.5, callback);
        assert_eq!(seen.lock().len(), 1);

        // 20% visible: still below threshold, no crossing
        assert_eq!(viewport.scroll_to(0.0, 120.0), 0);
        // 60% visible: crosses upward
        assert_eq!(viewport.scroll_to(0.0, 160.0), 1);
        // Fully visible: same side, no notification
        assert_eq!(viewport.scroll_to(0.0, 200.0), 0);
        // Scrolled past: crosses downward
        assert_eq!(viewport.scroll_to(0.0, 600.0), 1);

        let seen = seen.lock();
        assert_eq!(seen.len(), 3);
        assert!((seen[1].0 - 0.6).abs() < 1e-5);
        assert_eq!(seen[2], (0.0, false));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let viewport = tall_viewport();
        viewport.scroll_to(-50.0, 5000.0);
        assert_eq!(viewport.scroll_offset(), Point::new(0.0, 900.0));
        assert_eq!(viewport.max_scroll(), Point::new(0.0, 900.0));
    }

    #[test]
    fn test_resize_reveals_more_content() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 150.0, 100.0, 50.0));
        let (callback, seen) = recording();

        viewport.observe(element, 0.1, callback);
        assert_eq!(viewport.resize(Size::new(100.0, 400.0)), 1);
        assert_eq!(seen.lock().last(), Some(&(1.0, true)));
    }

    #[test]
    fn test_relayout_notifies_against_final_geometry() {
        let viewport = ScrollViewport::new(Size::new(100.0, 100.0));
        let top = viewport.add_element(Rect::new(0.0, 0.0, 100.0, 100.0));
        let element = viewport.add_element(Rect::new(0.0, 100.0, 100.0, 100.0));
        let (callback, seen) = recording();
        viewport.observe(element, 0.5, callback);

        // Taller viewport, element pushed further down: never visible enough
        let moved = viewport
            .relayout(
                Size::new(100.0, 200.0),
                &[
                    (top, Rect::new(0.0, 0.0, 100.0, 190.0)),
                    (element, Rect::new(0.0, 190.0, 100.0, 100.0)),
                ],
            )
            .unwrap();
        assert_eq!(moved, 0);
        assert_eq!(*seen.lock(), vec![(0.0, false)]);
        assert_eq!(viewport.ratio_of(element), Some(0.1));
    }

    #[test]
    fn test_relayout_reclamps_scroll() {
        let viewport = ScrollViewport::new(Size::new(100.0, 100.0));
        let element = viewport.add_element(Rect::new(0.0, 0.0, 100.0, 1000.0));
        viewport.scroll_to(0.0, 900.0);

        viewport
            .relayout(Size::new(100.0, 100.0), &[(element, Rect::new(0.0, 0.0, 100.0, 300.0))])
            .unwrap();
        assert_eq!(viewport.scroll_offset(), Point::new(0.0, 200.0));
    }

    #[test]
    fn test_relayout_unknown_element_changes_nothing() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 0.0, 10.0, 10.0));
        viewport.remove_element(element).unwrap();
        assert_eq!(
            viewport.relayout(Size::new(50.0, 50.0), &[(element, Rect::ZERO)]),
            Err(Error::UnknownElement(element))
        );
        assert_eq!(viewport.size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_set_element_rect_unknown() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 0.0, 10.0, 10.0));
        viewport.remove_element(element).unwrap();
        assert_eq!(
            viewport.set_element_rect(element, Rect::ZERO),
            Err(Error::UnknownElement(element))
        );
    }

    #[test]
    fn test_remove_element_reports_zero() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 0.0, 100.0, 50.0));
        let (callback, seen) = recording();

        viewport.observe(element, 0.1, callback);
        assert_eq!(viewport.remove_element(element).unwrap(), 1);
        assert_eq!(seen.lock().last(), Some(&(0.0, false)));

        // Subscription stays registered but is inert
        assert_eq!(viewport.subscription_count(), 1);
        assert_eq!(viewport.scroll_to(0.0, 10.0), 0);
    }

    #[test]
    fn test_unobserved_callback_never_fires() {
        let viewport = tall_viewport();
        let element = viewport.add_element(Rect::new(0.0, 500.0, 100.0, 50.0));
        let (callback, seen) = recording();

        let id = viewport.observe(element, 0.1, callback);
        assert!(viewport.unobserve(id));
        viewport.scroll_to(0.0, 480.0);
        assert_eq!(seen.lock().len(), 1);
    }
}
