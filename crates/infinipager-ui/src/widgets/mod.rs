//! Widget implementations

mod infinite_pager;

pub use infinite_pager::*;
