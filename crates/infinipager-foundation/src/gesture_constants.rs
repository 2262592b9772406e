//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels (or logical pixels per second) and match the
//! Android `ViewConfiguration` defaults on a baseline density.

/// Drag threshold in logical pixels.
///
/// Movement beyond this distance from the press position turns a press into
/// a drag; below it the release is treated as a click.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Release velocity above which a pager moves to the neighbouring page even
/// when the drag covered less than half a page. Matches the Compose pager's
/// 400dp/s minimum fling velocity.
pub const SNAP_VELOCITY_THRESHOLD: f32 = 400.0;
