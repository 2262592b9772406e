//! Foundation elements for Infinipager: pager state, input and the looping controller

pub mod gesture_constants;
pub mod input;
pub mod pager;
pub mod velocity_tracker;

#[cfg(test)]
mod tests;

pub use input::{PointerEvent, PointerEventKind};
pub use pager::*;
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::pager::{
        ExtendedSequence, InfinitePagerController, PageDirection, PagedHost, PagerConfig,
        PagerEvent, PagerState, Reconciliation, ScrollLock,
    };
    pub use crate::velocity_tracker::VelocityTracker1D;
}
