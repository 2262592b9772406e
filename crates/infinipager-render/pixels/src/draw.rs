use infinipager_ui_graphics::Rect;

use crate::scene::{DrawShape, Scene};

/// Background written before any shape is drawn.
pub const CLEAR_COLOR: [u8; 4] = [18, 18, 24, 255];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClipBounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

fn clip_rect_to_bounds(
    rect: Rect,
    clip: Option<Rect>,
    width: u32,
    height: u32,
) -> Option<ClipBounds> {
    let mut min_x = rect.x;
    let mut min_y = rect.y;
    let mut max_x = rect.right();
    let mut max_y = rect.bottom();

    if let Some(clip_rect) = clip {
        min_x = min_x.max(clip_rect.x);
        min_y = min_y.max(clip_rect.y);
        max_x = max_x.min(clip_rect.right());
        max_y = max_y.min(clip_rect.bottom());
    }

    min_x = min_x.max(0.0);
    min_y = min_y.max(0.0);
    max_x = max_x.min(width as f32);
    max_y = max_y.min(height as f32);

    if max_x <= min_x || max_y <= min_y {
        return None;
    }

    let min_x = (min_x.floor() as i32).clamp(0, width as i32);
    let min_y = (min_y.floor() as i32).clamp(0, height as i32);
    let max_x = (max_x.ceil() as i32).clamp(0, width as i32);
    let max_y = (max_y.ceil() as i32).clamp(0, height as i32);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    Some(ClipBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Rasterizes `scene` into an RGBA8 `frame` of `width` x `height` pixels.
///
/// `frame` must hold exactly `width * height * 4` bytes.
pub fn draw_scene(frame: &mut [u8], width: u32, height: u32, scene: &Scene) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR);
    }

    let mut shapes: Vec<&DrawShape> = scene.shapes.iter().collect();
    shapes.sort_by_key(|shape| shape.z_index);
    for shape in shapes {
        draw_shape(frame, width, height, shape);
    }
}

fn draw_shape(frame: &mut [u8], width: u32, height: u32, draw: &DrawShape) {
    if draw.color.a() <= 0.0 {
        return;
    }
    let Some(bounds) = clip_rect_to_bounds(draw.rect, draw.clip, width, height) else {
        return;
    };

    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let center_x = px as f32 + 0.5;
            let center_y = py as f32 + 0.5;
            if !draw.rect.contains(center_x, center_y) || !draw.covers(center_x, center_y) {
                continue;
            }
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            let existing = &mut frame[idx..idx + 4];
            let blended = draw.color.blend_over([existing[0], existing[1], existing[2], existing[3]]);
            existing.copy_from_slice(&blended);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_is_limited_to_frame() {
        let bounds = clip_rect_to_bounds(Rect::new(-10.0, -10.0, 30.0, 30.0), None, 16, 8);
        assert_eq!(
            bounds,
            Some(ClipBounds {
                min_x: 0,
                min_y: 0,
                max_x: 16,
                max_y: 8,
            })
        );
    }

    #[test]
    fn clip_intersects_with_clip_rect() {
        let bounds = clip_rect_to_bounds(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Some(Rect::new(4.0, 2.0, 100.0, 3.0)),
            20,
            20,
        );
        assert_eq!(
            bounds,
            Some(ClipBounds {
                min_x: 4,
                min_y: 2,
                max_x: 10,
                max_y: 5,
            })
        );
    }

    #[test]
    fn offscreen_rect_is_skipped() {
        assert_eq!(
            clip_rect_to_bounds(Rect::new(30.0, 0.0, 10.0, 10.0), None, 20, 20),
            None
        );
    }
}
