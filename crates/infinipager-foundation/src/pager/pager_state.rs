//! Pager state management.
//!
//! Provides [`PagerState`], a frame-driven horizontal pager model. Position is
//! tracked in pages as a float: `2.25` means a quarter of the way from page 2
//! to page 3.

use infinipager_animation::{AnimationSpec, TweenAnimation};

use super::config::PagerConfig;
use super::host::PagedHost;
use crate::gesture_constants::SNAP_VELOCITY_THRESHOLD;

/// Fallback page width used until the first layout reports a real one.
pub const DEFAULT_PAGE_SIZE: f32 = 360.0;

#[derive(Clone, Copy, Debug)]
struct DragState {
    start_page: usize,
}

/// Scroll position, drag and settle animation of a horizontal pager.
///
/// # Example
///
/// ```rust
/// use infinipager_foundation::{PagedHost, PagerState};
///
/// let mut state = PagerState::new(6, 1);
/// state.animate_scroll_to_page(2);
/// let mut frame_time = 0;
/// while state.on_frame(frame_time) {
///     frame_time += 16_666_667;
/// }
/// assert_eq!(state.current_page(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct PagerState {
    page_count: usize,
    page_size: f32,
    position: f32,
    user_scroll_enabled: bool,
    animation: Option<TweenAnimation<f32>>,
    animation_spec: AnimationSpec,
    snap_velocity_threshold: f32,
    drag: Option<DragState>,
}

impl PagerState {
    pub fn new(page_count: usize, initial_page: usize) -> Self {
        let max_page = page_count.saturating_sub(1);
        Self {
            page_count,
            page_size: DEFAULT_PAGE_SIZE,
            position: initial_page.min(max_page) as f32,
            user_scroll_enabled: true,
            animation: None,
            animation_spec: AnimationSpec::default(),
            snap_velocity_threshold: SNAP_VELOCITY_THRESHOLD,
            drag: None,
        }
    }

    pub fn with_config(page_count: usize, initial_page: usize, config: &PagerConfig) -> Self {
        let mut state = Self::new(page_count, initial_page);
        state.animation_spec = config.page_animation;
        state.snap_velocity_threshold = config.snap_velocity_threshold;
        state
    }

    /// Scroll position in pages.
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn page_size(&self) -> f32 {
        self.page_size
    }

    /// Sets the width of one page in logical pixels.
    pub fn set_page_size(&mut self, page_size: f32) {
        if page_size.is_finite() && page_size > 0.0 {
            self.page_size = page_size;
        } else {
            log::warn!("ignoring invalid page size {page_size}");
        }
    }

    /// Changes the number of pages, keeping the position within range.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        let clamped = self.clamp_position(self.position);
        if clamped != self.position {
            self.animation = None;
            self.position = clamped;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_scroll_in_progress(&self) -> bool {
        self.is_dragging() || self.is_animating()
    }

    /// Page the running animation is heading to, if any.
    pub fn target_page(&self) -> Option<usize> {
        self.animation
            .as_ref()
            .map(|animation| animation.target().round() as usize)
    }

    /// Begins a user drag. Returns false when user scrolling is disabled.
    pub fn drag_start(&mut self) -> bool {
        if !self.user_scroll_enabled {
            return false;
        }
        self.animation = None;
        self.drag = Some(DragState {
            start_page: self.current_page(),
        });
        true
    }

    /// Applies a horizontal drag of `delta_px` and returns the pixels consumed.
    ///
    /// Dragging towards the left (negative delta) reveals the next page.
    pub fn drag_by(&mut self, delta_px: f32) -> f32 {
        if self.drag.is_none() || !self.user_scroll_enabled {
            return 0.0;
        }
        let before = self.position;
        self.position = self.clamp_position(self.position - delta_px / self.page_size);
        (before - self.position) * self.page_size
    }

    /// Ends the drag and snaps to a page.
    ///
    /// Fast releases move one page in the fling direction from the page the
    /// drag started on; slow releases settle on the nearest page.
    pub fn drag_end(&mut self, velocity_px_per_sec: f32) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        let target = if velocity_px_per_sec.abs() >= self.snap_velocity_threshold {
            // Content follows the finger, so a leftward fling moves forward.
            let forward = velocity_px_per_sec < 0.0;
            let (low, high) = (
                drag.start_page.saturating_sub(1) as f32,
                (drag.start_page + 1) as f32,
            );
            let page = if forward {
                self.position.floor() + 1.0
            } else {
                self.position.ceil() - 1.0
            };
            page.clamp(low, high)
        } else {
            self.current_page() as f32
        };

        log::trace!(
            "drag released at {:.3} with {velocity_px_per_sec:.0}px/s, snapping to {target}",
            self.position
        );
        self.start_animation(target);
    }

    /// Drops an in-flight drag and settles on the nearest page.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.start_animation(self.current_page() as f32);
        }
    }

    /// Advances the running animation. Returns whether it is still in flight.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let frame = animation.on_frame(frame_time_nanos);
        self.position = frame.value;
        if frame.finished {
            self.animation = None;
        }
        !frame.finished
    }

    fn start_animation(&mut self, target: f32) {
        let target = self.clamp_position(target);
        if (target - self.position).abs() <= f32::EPSILON {
            self.position = target;
            self.animation = None;
            return;
        }
        self.animation = Some(TweenAnimation::new(
            self.position,
            target,
            self.animation_spec,
        ));
    }

    fn max_page(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn clamp_position(&self, position: f32) -> f32 {
        position.clamp(0.0, self.max_page() as f32)
    }
}

impl PagedHost for PagerState {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn current_page(&self) -> usize {
        ((self.position + 0.5).floor().max(0.0) as usize).min(self.max_page())
    }

    fn current_page_offset_fraction(&self) -> f32 {
        self.position - self.current_page() as f32
    }

    fn scroll_to_page(&mut self, page: usize) {
        self.animation = None;
        self.drag = None;
        self.position = page.min(self.max_page()) as f32;
    }

    fn animate_scroll_to_page(&mut self, page: isize) {
        self.drag = None;
        let page = page.clamp(0, self.max_page() as isize);
        self.start_animation(page as f32);
    }

    fn set_user_scroll_enabled(&mut self, enabled: bool) {
        self.user_scroll_enabled = enabled;
        if !enabled {
            self.cancel_drag();
        }
    }

    fn is_user_scroll_enabled(&self) -> bool {
        self.user_scroll_enabled
    }
}
