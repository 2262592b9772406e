//! Pure math/data for drawing & units in Infinipager
//!
//! Geometry primitives, colors and density-independent units shared by the
//! pager widget, the renderer and the platform adapters.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
