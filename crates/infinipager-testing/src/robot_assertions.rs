//! Assertion utilities for robot testing

/// Assert that a value is within an expected range.
///
/// Positions sampled mid-animation are rarely exact; compare them with a
/// tolerance instead.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}
