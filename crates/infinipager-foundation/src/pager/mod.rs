//! Horizontal pager primitives.
//!
//! # Architecture
//!
//! - [`ExtendedSequence`] - the item list with a clone of the last item in
//!   front and a clone of the first item at the back
//! - [`PagedHost`] - the capability a paging surface exposes to controllers
//! - [`PagerState`] - a frame-driven [`PagedHost`] with drag, snap and
//!   animated page changes (JC: `PagerState`)
//! - [`InfinitePagerController`] - turns the finite extended sequence into an
//!   endlessly looping pager by jumping off cloned pages once they settle
//!
//! # Example
//!
//! ```rust
//! use infinipager_foundation::{ExtendedSequence, InfinitePagerController, PagedHost, PagerConfig, PagerState};
//!
//! let items = ExtendedSequence::new(&["cyan", "red", "blue", "green"]).unwrap();
//! let config = PagerConfig::default();
//! let mut state = PagerState::with_config(items.len(), items.initial_page(), &config);
//! let mut controller = InfinitePagerController::from_config(items.len(), &config);
//! controller.attach(&mut state);
//!
//! let mut frame_time = 0;
//! while state.on_frame(frame_time) {
//!     controller.on_frame(&mut state);
//!     frame_time += 16_666_667;
//! }
//! controller.on_frame(&mut state);
//! assert_eq!(items[state.current_page()], "cyan");
//! ```

mod config;
mod controller;
mod extended_sequence;
mod host;
mod pager_state;

pub use config::*;
pub use controller::*;
pub use extended_sequence::*;
pub use host::*;
pub use pager_state::*;
