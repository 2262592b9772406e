use infinipager_foundation::{PageDirection, PointerEvent, PointerEventKind};
use infinipager_ui_graphics::{Point, Size};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Converts winit's physical coordinates into the logical pixels the pager
/// lays out in.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
        uptime_ms: i64,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(position), uptime_ms)
    }

    pub fn logical_size(&self, size: PhysicalSize<u32>) -> Size {
        Size::new(
            (size.width as f64 / self.scale_factor) as f32,
            (size.height as f64 / self.scale_factor) as f32,
        )
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Maps the left and right arrow keys to page directions.
pub fn page_direction_for_key(key: PhysicalKey) -> Option<PageDirection> {
    match key {
        PhysicalKey::Code(KeyCode::ArrowLeft) => Some(PageDirection::Previous),
        PhysicalKey::Code(KeyCode::ArrowRight) => Some(PageDirection::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_divides_by_scale_factor() {
        let platform = DesktopWinitPlatform::new(2.0);
        assert_eq!(
            platform.pointer_position(PhysicalPosition::new(300.0, 120.0)),
            Point::new(150.0, 60.0)
        );
    }

    #[test]
    fn pointer_event_keeps_kind_and_time() {
        let mut platform = DesktopWinitPlatform::default();
        platform.set_scale_factor(1.5);
        let event = platform.pointer_event(
            PointerEventKind::Down,
            PhysicalPosition::new(30.0, 15.0),
            42,
        );
        assert_eq!(event, PointerEvent::down(20.0, 10.0, 42));
    }

    #[test]
    fn logical_size_divides_by_scale_factor() {
        let platform = DesktopWinitPlatform::new(2.0);
        assert_eq!(
            platform.logical_size(PhysicalSize::new(800, 600)),
            Size::new(400.0, 300.0)
        );
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(
            page_direction_for_key(PhysicalKey::Code(KeyCode::ArrowLeft)),
            Some(PageDirection::Previous)
        );
        assert_eq!(
            page_direction_for_key(PhysicalKey::Code(KeyCode::ArrowRight)),
            Some(PageDirection::Next)
        );
        assert_eq!(page_direction_for_key(PhysicalKey::Code(KeyCode::Space)), None);
    }
}
