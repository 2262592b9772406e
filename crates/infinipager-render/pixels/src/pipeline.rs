use infinipager_foundation::PageDirection;
use infinipager_ui::InfiniteHorizontalPager;
use infinipager_ui_graphics::{Color, Point, Rect};

use crate::scene::Scene;

pub const PAGE_BACKGROUND: Color = Color::GRAY;
pub const ARROW_BUTTON_COLOR: Color = Color::WHITE;
pub const ARROW_ICON_COLOR: Color = Color::BLACK;

/// Appends the pager's visible pages and arrow buttons to `scene`.
///
/// Layout runs in logical pixels; `scale` converts to the physical pixels of
/// the target frame.
pub(crate) fn render_pager<T, F>(
    pager: &InfiniteHorizontalPager<T>,
    scale: f32,
    item_color: F,
    scene: &mut Scene,
) where
    F: Fn(&T) -> Color,
{
    if pager.is_empty() {
        return;
    }

    let layout = pager.layout();
    let viewport = Rect::from_size(layout.viewport()).scale(scale);

    for page in pager.visible_pages() {
        let page_rect = layout.page_rect(page.offset_x);
        scene.push_rect(page_rect.scale(scale), PAGE_BACKGROUND, Some(viewport));
        scene.push_rect(
            layout.item_rect(page_rect).scale(scale),
            item_color(page.item),
            Some(viewport),
        );
    }

    for direction in [PageDirection::Previous, PageDirection::Next] {
        let button = layout.arrow_rect(direction).scale(scale);
        scene.push_circle(button, ARROW_BUTTON_COLOR, Some(viewport));
        scene.push_triangle(
            arrow_icon(button, direction),
            ARROW_ICON_COLOR,
            Some(viewport),
        );
    }
}

/// Chevron-like triangle pointing towards `direction`, centered in `button`.
fn arrow_icon(button: Rect, direction: PageDirection) -> [Point; 3] {
    let center = button.center();
    let half = button.width * 0.2;
    let tip = match direction {
        PageDirection::Previous => -half,
        PageDirection::Next => half,
    };
    [
        Point::new(center.x + tip, center.y),
        Point::new(center.x - tip, center.y - half),
        Point::new(center.x - tip, center.y + half),
    ]
}
