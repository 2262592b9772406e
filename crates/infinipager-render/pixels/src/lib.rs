//! Software renderer for the Infinipager widget.
//!
//! The pager is turned into a flat [`Scene`] of rectangles, circles and
//! triangles, which is then rasterized into an RGBA8 frame such as the one a
//! `pixels` surface exposes.

mod draw;
mod pipeline;
pub mod scene;

use infinipager_ui::InfiniteHorizontalPager;
use infinipager_ui_graphics::Color;

pub use draw::{draw_scene, CLEAR_COLOR};
pub use pipeline::{ARROW_BUTTON_COLOR, ARROW_ICON_COLOR, PAGE_BACKGROUND};
pub use scene::{DrawShape, Scene, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelsRendererError {
    FrameSize { expected: usize, actual: usize },
}

impl std::fmt::Display for PixelsRendererError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelsRendererError::FrameSize { expected, actual } => {
                write!(f, "frame holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for PixelsRendererError {}

#[derive(Debug, Default)]
pub struct PixelsRenderer {
    scene: Scene,
}

impl PixelsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Rebuilds the scene from the pager's current scroll position.
    ///
    /// `scale` maps the pager's logical pixels to frame pixels; `item_color`
    /// picks the color of each item's square.
    pub fn rebuild_scene<T, F>(&mut self, pager: &InfiniteHorizontalPager<T>, scale: f32, item_color: F)
    where
        F: Fn(&T) -> Color,
    {
        self.scene.clear();
        pipeline::render_pager(pager, scale, item_color, &mut self.scene);
        log::trace!("scene rebuilt with {} shapes", self.scene.shapes.len());
    }

    pub fn draw(&self, frame: &mut [u8], width: u32, height: u32) -> Result<(), PixelsRendererError> {
        let expected = width as usize * height as usize * 4;
        if frame.len() != expected {
            return Err(PixelsRendererError::FrameSize {
                expected,
                actual: frame.len(),
            });
        }
        draw::draw_scene(frame, width, height, &self.scene);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
