//! Frame-driven animation primitives for Infinipager.
//!
//! Animations here never own a clock. Callers feed frame timestamps in
//! nanoseconds, the same way a platform frame callback delivers them.

mod animation;

pub use animation::*;
