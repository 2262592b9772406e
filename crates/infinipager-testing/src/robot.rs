//! Robot testing framework for end-to-end pager testing
//!
//! This module provides a robot-style testing API that allows developers to:
//! - Launch a pager over a fixed viewport without a window
//! - Perform interactions (clicks, drags, swipes, arrow buttons)
//! - Drive frames deterministically and wait for the pager to settle
//! - Inspect the page, the visible items and the events the controller emitted
//!
//! # Example
//!
//! ```
//! use infinipager_testing::PagerRobot;
//!
//! let mut robot = PagerRobot::launch(400, 300, &["cyan", "red", "blue", "green"]);
//! robot.swipe_left();
//! robot.assert_showing(&"red");
//! ```

use infinipager_foundation::{PageDirection, PagerConfig, PagerEvent, PointerEvent};
use infinipager_ui::{InfiniteHorizontalPager, PagerFrame};
use infinipager_ui_graphics::{Point, Size};

/// Frame interval of a 60 Hz display.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const FRAME_INTERVAL_MS: i64 = 16;
const MAX_IDLE_FRAMES: usize = 600;
const DRAG_STEPS: usize = 10;

/// Drives an [`InfiniteHorizontalPager`] the way a window would: pointer
/// events in logical pixels plus a 60 Hz frame clock.
pub struct PagerRobot<T> {
    pager: InfiniteHorizontalPager<T>,
    viewport: Size,
    frame_time_nanos: u64,
    uptime_ms: i64,
    events: Vec<PagerEvent>,
}

impl<T: Clone + PartialEq> PagerRobot<T> {
    /// Launches a pager over `items` with the default configuration.
    ///
    /// Panics when `items` is empty.
    pub fn launch(width: u32, height: u32, items: &[T]) -> Self {
        Self::launch_with_config(width, height, items, PagerConfig::default())
    }

    pub fn launch_with_config(width: u32, height: u32, items: &[T], config: PagerConfig) -> Self {
        let pager = match InfiniteHorizontalPager::new(items, config) {
            Ok(Some(pager)) => pager,
            Ok(None) => panic!("robot needs at least one item"),
            Err(err) => panic!("invalid pager config: {err}"),
        };
        let mut robot = Self {
            pager,
            viewport: Size::ZERO,
            frame_time_nanos: 0,
            uptime_ms: 0,
            events: Vec::new(),
        };
        robot.set_viewport(width, height);
        robot
    }
}

impl<T> PagerRobot<T> {
    /// Resize the viewport (simulates window resize).
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Size::new(width as f32, height as f32);
        self.pager.set_viewport(self.viewport, 1.0);
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn pager(&self) -> &InfiniteHorizontalPager<T> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut InfiniteHorizontalPager<T> {
        &mut self.pager
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.pager.current_item()
    }

    /// Items of every page overlapping the viewport, left to right.
    pub fn visible_items(&self) -> Vec<&T> {
        self.pager.visible_pages().map(|page| page.item).collect()
    }

    /// Events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<PagerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render one frame and advance the clock by one frame interval.
    pub fn advance_frame(&mut self) -> PagerFrame {
        let frame = self.pager.on_frame(self.frame_time_nanos);
        self.events.extend(frame.events.iter().copied());
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.uptime_ms += FRAME_INTERVAL_MS;
        frame
    }

    /// Advance frame time by at least `nanos`, rendering every frame on the way.
    pub fn advance_time(&mut self, nanos: u64) {
        let deadline = self.frame_time_nanos + nanos;
        while self.frame_time_nanos < deadline {
            self.advance_frame();
        }
    }

    /// Pump frames until no animation or reconcile is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.advance_frame().needs_next_frame {
                return;
            }
        }
        panic!("pager did not become idle within {MAX_IDLE_FRAMES} frames");
    }

    /// Perform a click at the given coordinates and wait for the pager to settle.
    ///
    /// Returns whether the pager consumed the press.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        let hit = self.pointer(PointerEvent::down(x, y, self.uptime_ms));
        self.uptime_ms += FRAME_INTERVAL_MS;
        self.pointer(PointerEvent::up(x, y, self.uptime_ms));
        self.wait_for_idle();
        hit
    }

    pub fn click_arrow(&mut self, direction: PageDirection) -> bool {
        let center = self.pager.layout().arrow_rect(direction).center();
        self.click_at(center.x, center.y)
    }

    pub fn click_next(&mut self) -> bool {
        self.click_arrow(PageDirection::Next)
    }

    pub fn click_previous(&mut self) -> bool {
        self.click_arrow(PageDirection::Previous)
    }

    /// Perform a drag from one point to another.
    ///
    /// This simulates a pointer down, move, and up sequence with a frame
    /// rendered after every move, then waits for the pager to settle.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        let from = Point::new(from_x, from_y);
        self.pointer(PointerEvent::down(from.x, from.y, self.uptime_ms));

        let mut position = from;
        for i in 1..=DRAG_STEPS {
            let t = i as f32 / DRAG_STEPS as f32;
            position = Point::new(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t);
            self.pointer(PointerEvent::moved(position.x, position.y, self.uptime_ms));
            self.advance_frame();
        }

        self.pointer(PointerEvent::up(position.x, position.y, self.uptime_ms));
        self.wait_for_idle();
    }

    /// Swipe towards the left, revealing the next page.
    pub fn swipe_left(&mut self) {
        let (from_x, to_x, y) = self.swipe_track();
        self.drag(from_x, y, to_x, y);
    }

    /// Swipe towards the right, revealing the previous page.
    pub fn swipe_right(&mut self) {
        let (from_x, to_x, y) = self.swipe_track();
        self.drag(to_x, y, from_x, y);
    }

    /// A horizontal track covering 60% of the page, above the arrow buttons.
    fn swipe_track(&self) -> (f32, f32, f32) {
        let width = self.viewport.width;
        (width * 0.75, width * 0.15, self.viewport.height * 0.25)
    }

    fn pointer(&mut self, event: PointerEvent) -> bool {
        log::trace!("robot pointer {:?} at {:?}", event.kind, event.position);
        self.pager.on_pointer_event(&event)
    }
}

impl<T: PartialEq + std::fmt::Debug> PagerRobot<T> {
    /// Assert that the settled page shows `expected`.
    pub fn assert_showing(&self, expected: &T) {
        assert_eq!(
            self.current_item(),
            Some(expected),
            "page {} shows the wrong item",
            self.current_page()
        );
    }

    /// Assert that the pager rests on `page` with nothing pending.
    pub fn assert_idle_on_page(&self, page: usize) {
        assert_eq!(self.current_page(), page, "unexpected page");
        assert!(self.pager.is_idle(), "pager is still moving or locked");
        assert_eq!(
            self.pager.state().position(),
            page as f32,
            "pager is between pages"
        );
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
