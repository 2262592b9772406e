//! Infinitely looping horizontal pager widget.
//!
//! The widget owns the whole pager stack for one item list:
//!
//! - an [`ExtendedSequence`] built from the items, rebuilt only when the
//!   list content changes
//! - a [`PagerState`] acting as the [`PagedHost`]
//! - an [`InfinitePagerController`] that jumps off clone pages after they settle
//! - a [`PagerLayout`] and a [`HorizontalDragDetector`] for input
//!
//! Frames are driven by the caller: feed pointer events as they arrive and
//! call [`InfiniteHorizontalPager::on_frame`] once per display frame.

use infinipager_foundation::{
    ExtendedSequence, InfinitePagerController, PageDirection, PagedHost, PagerConfig,
    PagerConfigError, PagerEvents, PagerState, PointerEvent, PointerEventKind, DEFAULT_PAGE_SIZE,
};
use infinipager_ui_graphics::Size;

use crate::layout::PagerLayout;
use crate::pointer_input::{DragGesture, HorizontalDragDetector};

/// A page that overlaps the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisiblePage<'a, T> {
    /// Index into the extended sequence.
    pub page: usize,
    /// Left edge of the page relative to the viewport, in pixels.
    pub offset_x: f32,
    pub item: &'a T,
}

/// Result of one [`InfiniteHorizontalPager::on_frame`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagerFrame {
    pub events: PagerEvents,
    /// Whether the pager still has motion or a pending reconcile that needs
    /// another frame.
    pub needs_next_frame: bool,
}

#[derive(Clone, Debug)]
struct PagerContent<T> {
    sequence: ExtendedSequence<T>,
    controller: InfinitePagerController,
}

/// Horizontally swipeable pager that loops endlessly over its items.
///
/// # Example
///
/// ```rust
/// use infinipager_ui::{InfiniteHorizontalPager, PageDirection, PagerConfig};
///
/// let mut pager = InfiniteHorizontalPager::new(&["cyan", "red"], PagerConfig::default())
///     .expect("default config is valid")
///     .expect("items are not empty");
///
/// pager.scroll_to_adjacent(PageDirection::Previous);
/// let mut frame_time = 0;
/// while pager.on_frame(frame_time).needs_next_frame {
///     frame_time += 16_666_667;
/// }
/// assert_eq!(pager.current_item(), Some(&"red"));
/// assert_eq!(pager.current_page(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct InfiniteHorizontalPager<T> {
    config: PagerConfig,
    content: Option<PagerContent<T>>,
    state: PagerState,
    layout: PagerLayout,
    drag_detector: HorizontalDragDetector,
    pressed_arrow: Option<PageDirection>,
}

impl<T: Clone + PartialEq> InfiniteHorizontalPager<T> {
    /// Builds a pager over `items`.
    ///
    /// Returns `Ok(None)` when `items` is empty; there is nothing to page through.
    pub fn new(items: &[T], config: PagerConfig) -> Result<Option<Self>, PagerConfigError> {
        config.validate()?;
        let Some(sequence) = ExtendedSequence::new(items) else {
            log::debug!("no items, pager not created");
            return Ok(None);
        };

        let mut state = PagerState::with_config(sequence.len(), sequence.initial_page(), &config);
        let mut controller = InfinitePagerController::from_config(sequence.len(), &config);
        controller.attach(&mut state);

        Ok(Some(Self {
            config,
            content: Some(PagerContent {
                sequence,
                controller,
            }),
            state,
            layout: PagerLayout::new(Size::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE), 1.0),
            drag_detector: HorizontalDragDetector::default(),
            pressed_arrow: None,
        }))
    }

    /// Replaces the item list.
    ///
    /// Nothing happens when `items` matches the current list. A different
    /// list rebuilds the extended sequence and keeps the current page if it
    /// is still a real page. An empty list leaves the pager inert until items
    /// are supplied again. Returns whether anything changed.
    pub fn set_items(&mut self, items: &[T]) -> bool {
        if let Some(content) = &self.content {
            if content.sequence.is_built_from(items) {
                return false;
            }
        }

        self.drag_detector.reset();
        self.pressed_arrow = None;

        let Some(sequence) = ExtendedSequence::new(items) else {
            let cleared = self.content.take().is_some();
            if cleared {
                log::debug!("pager items cleared");
            }
            return cleared;
        };

        self.state.set_page_count(sequence.len());
        match self.content.as_mut() {
            Some(content) => {
                content.controller.reset(sequence.len(), &mut self.state);
                content.sequence = sequence;
            }
            None => {
                let mut controller =
                    InfinitePagerController::from_config(sequence.len(), &self.config);
                controller.attach(&mut self.state);
                self.content = Some(PagerContent {
                    sequence,
                    controller,
                });
            }
        }
        log::debug!("pager items replaced, {} logical pages", items.len());
        true
    }
}

impl<T> InfiniteHorizontalPager<T> {
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn layout(&self) -> &PagerLayout {
        &self.layout
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn controller(&self) -> Option<&InfinitePagerController> {
        self.content.as_ref().map(|content| &content.controller)
    }

    pub fn sequence(&self) -> Option<&ExtendedSequence<T>> {
        self.content.as_ref().map(|content| &content.sequence)
    }

    /// The logical items, without the boundary clones.
    pub fn items(&self) -> &[T] {
        match &self.content {
            Some(content) => content.sequence.logical_items(),
            None => &[],
        }
    }

    /// Whether the pager has no items and therefore renders nothing.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.sequence()?.get(self.current_page())
    }

    pub fn current_logical_index(&self) -> Option<usize> {
        let sequence = self.sequence()?;
        Some(sequence.logical_index(self.current_page()))
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.controller()
            .is_some_and(InfinitePagerController::is_scroll_locked)
    }

    /// Whether nothing is moving and no reconcile is pending.
    pub fn is_idle(&self) -> bool {
        !self.state.is_scroll_in_progress() && !self.is_scroll_locked()
    }

    /// Resizes the pager to `viewport` logical pixels at `density` pixels per dp.
    pub fn set_viewport(&mut self, viewport: Size, density: f32) {
        if viewport.is_empty() {
            log::warn!("ignoring empty viewport {viewport:?}");
            return;
        }
        self.layout = PagerLayout::new(viewport, density);
        self.state.set_page_size(viewport.width);
    }

    /// Starts an animated move to the previous or next page.
    pub fn scroll_to_adjacent(&mut self, direction: PageDirection) {
        if let Some(content) = self.content.as_mut() {
            content
                .controller
                .scroll_to_adjacent(direction, &mut self.state);
        }
    }

    /// Advances animations to `frame_time_nanos`, then lets the controller
    /// observe page changes and reconcile.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> PagerFrame {
        let Some(content) = self.content.as_mut() else {
            return PagerFrame::default();
        };

        self.state.on_frame(frame_time_nanos);
        let events = content.controller.on_frame(&mut self.state);
        for event in &events {
            log::trace!("pager event {event:?}");
        }

        PagerFrame {
            events,
            needs_next_frame: self.state.is_scroll_in_progress()
                || content.controller.is_scroll_locked(),
        }
    }

    /// Routes a pointer event to the arrow buttons or the drag handling.
    ///
    /// Returns whether the event was consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.content.is_none() {
            return false;
        }

        if event.kind == PointerEventKind::Down {
            self.pressed_arrow = self.layout.arrow_at(event.position);
        }
        if let Some(pressed) = self.pressed_arrow {
            return self.on_arrow_event(pressed, event);
        }

        match self.drag_detector.on_pointer_event(event) {
            Some(DragGesture::Started { delta }) => {
                if self.state.drag_start() {
                    self.state.drag_by(delta);
                } else {
                    log::trace!("drag ignored, user scroll disabled");
                }
                true
            }
            Some(DragGesture::Dragged { delta }) => {
                self.state.drag_by(delta);
                true
            }
            Some(DragGesture::Ended { velocity }) => {
                self.state.drag_end(velocity);
                true
            }
            Some(DragGesture::Cancelled) => {
                self.state.cancel_drag();
                true
            }
            Some(DragGesture::Tapped { .. }) => false,
            None => event.kind == PointerEventKind::Down,
        }
    }

    fn on_arrow_event(&mut self, pressed: PageDirection, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down | PointerEventKind::Move => {}
            PointerEventKind::Up => {
                self.pressed_arrow = None;
                if self.layout.arrow_at(event.position) == Some(pressed) {
                    self.scroll_to_adjacent(pressed);
                }
            }
            PointerEventKind::Cancel => self.pressed_arrow = None,
        }
        true
    }

    /// Pages overlapping the viewport, left to right.
    pub fn visible_pages(&self) -> impl Iterator<Item = VisiblePage<'_, T>> + '_ {
        let width = self.layout.page_width();
        let position = self.state.position();
        let first = position.floor().max(0.0) as usize;

        self.content.iter().flat_map(move |content| {
            (first..=first + 1).filter_map(move |page| {
                let item = content.sequence.get(page)?;
                let offset_x = (page as f32 - position) * width;
                (offset_x.abs() < width).then_some(VisiblePage {
                    page,
                    offset_x,
                    item,
                })
            })
        })
    }
}

#[cfg(test)]
#[path = "tests/infinite_pager_tests.rs"]
mod tests;
