//! Widgets for Infinipager
//!
//! The [`InfiniteHorizontalPager`] widget ties an [`ExtendedSequence`], a
//! [`PagerState`] host and an [`InfinitePagerController`] together and adds
//! the screen layout and pointer handling around them.

pub mod layout;
pub mod pointer_input;
pub mod widgets;

pub use layout::*;
pub use pointer_input::{DragGesture, HorizontalDragDetector};
pub use widgets::*;

pub use infinipager_animation::{AnimationSpec, Easing};
pub use infinipager_foundation::{
    ExtendedSequence, InfinitePagerController, PageDirection, PagedHost, PagerConfig,
    PagerConfigError, PagerEvent, PagerEvents, PagerState, PointerEvent, PointerEventKind,
    Reconciliation, ScrollLock,
};
pub use infinipager_ui_graphics::{Color, Dp, Point, Rect, Size};

pub mod prelude {
    pub use crate::layout::PagerLayout;
    pub use crate::widgets::{InfiniteHorizontalPager, PagerFrame, VisiblePage};
    pub use infinipager_foundation::prelude::*;
    pub use infinipager_ui_graphics::prelude::*;
}
