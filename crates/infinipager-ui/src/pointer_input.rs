//! Horizontal drag detection.
//!
//! Turns raw pointer events into drag gestures. A press only becomes a drag
//! once the pointer has travelled further than the touch slop; a release
//! before that point is reported as a tap.

use infinipager_foundation::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use infinipager_foundation::{PointerEvent, PointerEventKind, VelocityTracker1D};
use infinipager_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragGesture {
    /// The slop was crossed. `delta` is the horizontal travel since the press.
    Started { delta: f32 },
    Dragged { delta: f32 },
    /// Released after dragging, with the horizontal release velocity in px/s.
    Ended { velocity: f32 },
    /// Released without crossing the slop.
    Tapped { down: Point, up: Point },
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    down: Point,
    last_x: f32,
    dragging: bool,
}

#[derive(Clone, Debug)]
pub struct HorizontalDragDetector {
    touch_slop: f32,
    press: Option<Press>,
    velocity_tracker: VelocityTracker1D,
}

impl Default for HorizontalDragDetector {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl HorizontalDragDetector {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            press: None,
            velocity_tracker: VelocityTracker1D::new(),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.dragging)
    }

    /// Forgets the current press without reporting anything.
    pub fn reset(&mut self) {
        self.press = None;
        self.velocity_tracker.reset();
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragGesture> {
        let position = event.position;
        match event.kind {
            PointerEventKind::Down => {
                self.velocity_tracker.reset();
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, position.x);
                self.press = Some(Press {
                    down: position,
                    last_x: position.x,
                    dragging: false,
                });
                None
            }
            PointerEventKind::Move => {
                let press = self.press.as_mut()?;
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, position.x);
                if press.dragging {
                    let delta = position.x - press.last_x;
                    press.last_x = position.x;
                    return (delta != 0.0).then_some(DragGesture::Dragged { delta });
                }
                if press.down.distance_to(position) > self.touch_slop {
                    press.dragging = true;
                    press.last_x = position.x;
                    return Some(DragGesture::Started {
                        delta: position.x - press.down.x,
                    });
                }
                None
            }
            PointerEventKind::Up => {
                let press = self.press.take()?;
                if !press.dragging {
                    self.velocity_tracker.reset();
                    return Some(DragGesture::Tapped {
                        down: press.down,
                        up: position,
                    });
                }
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, position.x);
                let velocity = self
                    .velocity_tracker
                    .calculate_velocity_with_max(MAX_FLING_VELOCITY);
                self.velocity_tracker.reset();
                Some(DragGesture::Ended { velocity })
            }
            PointerEventKind::Cancel => {
                let press = self.press.take()?;
                self.velocity_tracker.reset();
                press.dragging.then_some(DragGesture::Cancelled)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/pointer_input_tests.rs"]
mod tests;
