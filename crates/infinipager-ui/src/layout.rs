//! Geometry of the pager screen.
//!
//! Pages fill the viewport edge to edge. Each page shows its item as a
//! square centered on the page; two circular arrow buttons float above the
//! pages, vertically centered and inset from the left and right edges.

use infinipager_foundation::PageDirection;
use infinipager_ui_graphics::{Dp, Point, Rect, Size};

/// Side of the colored square drawn for an item.
pub const ITEM_SIZE: Dp = Dp(80.0);

/// Diameter of the previous/next buttons.
pub const ARROW_BUTTON_SIZE: Dp = Dp(40.0);

/// Distance between an arrow button and the nearest viewport edge.
pub const ARROW_BUTTON_INSET: Dp = Dp(16.0);

/// Resolved pixel geometry for one viewport size and density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerLayout {
    viewport: Size,
    density: f32,
}

impl PagerLayout {
    pub fn new(viewport: Size, density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("invalid density {density}, falling back to 1.0");
            1.0
        };
        Self { viewport, density }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn page_width(&self) -> f32 {
        self.viewport.width
    }

    /// Bounds of a page whose left edge sits `offset_x` pixels from the viewport's.
    pub fn page_rect(&self, offset_x: f32) -> Rect {
        Rect::from_size(self.viewport).translate(offset_x, 0.0)
    }

    /// Bounds of the item square inside `page`.
    pub fn item_rect(&self, page: Rect) -> Rect {
        let side = ITEM_SIZE.to_px(self.density);
        page.centered(Size::new(side, side))
    }

    pub fn arrow_rect(&self, direction: PageDirection) -> Rect {
        let size = ARROW_BUTTON_SIZE.to_px(self.density);
        let inset = ARROW_BUTTON_INSET.to_px(self.density);
        let y = (self.viewport.height - size) / 2.0;
        let x = match direction {
            PageDirection::Previous => inset,
            PageDirection::Next => self.viewport.width - inset - size,
        };
        Rect::new(x, y, size, size)
    }

    /// Returns the arrow button under `point`, hit-testing the circle rather
    /// than its bounding box.
    pub fn arrow_at(&self, point: Point) -> Option<PageDirection> {
        [PageDirection::Previous, PageDirection::Next]
            .into_iter()
            .find(|&direction| {
                let bounds = self.arrow_rect(direction);
                point.distance_to(bounds.center()) <= bounds.width / 2.0
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PagerLayout {
        PagerLayout::new(Size::new(400.0, 300.0), 1.0)
    }

    #[test]
    fn arrows_are_inset_and_vertically_centered() {
        let layout = layout();
        assert_eq!(
            layout.arrow_rect(PageDirection::Previous),
            Rect::new(16.0, 130.0, 40.0, 40.0)
        );
        assert_eq!(
            layout.arrow_rect(PageDirection::Next),
            Rect::new(344.0, 130.0, 40.0, 40.0)
        );
    }

    #[test]
    fn arrows_scale_with_density() {
        let layout = PagerLayout::new(Size::new(800.0, 600.0), 2.0);
        assert_eq!(
            layout.arrow_rect(PageDirection::Next),
            Rect::new(688.0, 260.0, 80.0, 80.0)
        );
    }

    #[test]
    fn arrow_hit_test_uses_the_circle() {
        let layout = layout();
        assert_eq!(
            layout.arrow_at(Point::new(36.0, 150.0)),
            Some(PageDirection::Previous)
        );
        assert_eq!(
            layout.arrow_at(Point::new(364.0, 150.0)),
            Some(PageDirection::Next)
        );
        // Corner of the bounding box, outside the circle.
        assert_eq!(layout.arrow_at(Point::new(17.0, 131.0)), None);
        assert_eq!(layout.arrow_at(Point::new(200.0, 150.0)), None);
    }

    #[test]
    fn item_square_is_centered_in_page() {
        let layout = layout();
        let page = layout.page_rect(400.0);
        assert_eq!(page, Rect::new(400.0, 0.0, 400.0, 300.0));
        assert_eq!(layout.item_rect(page), Rect::new(560.0, 110.0, 80.0, 80.0));
    }

    #[test]
    fn invalid_density_falls_back_to_one() {
        let layout = PagerLayout::new(Size::new(10.0, 10.0), f32::NAN);
        assert_eq!(layout.density(), 1.0);
    }
}
