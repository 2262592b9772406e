//! Velocity tracking for swipe release.
//!
//! Keeps a short history of pointer positions and reports the average speed
//! over the most recent uninterrupted stretch of movement.

use std::collections::VecDeque;

/// Maximum number of samples retained.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
///
/// ```ignore
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(time_ms, x);
/// let velocity = tracker.calculate_velocity(); // px/sec
/// ```
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<Sample>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Adds the position observed at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    /// Calculates the velocity in units/second.
    ///
    /// Returns 0.0 with fewer than two usable samples or when the pointer
    /// paused longer than [`ASSUME_STOPPED_MS`] before the newest sample.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples.back().copied() else {
            return 0.0;
        };

        let mut oldest = newest;
        let mut previous = newest;
        for sample in self.samples.iter().rev().skip(1) {
            let age = newest.time_ms - sample.time_ms;
            let gap = previous.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            oldest = *sample;
            previous = *sample;
        }

        let elapsed_ms = newest.time_ms - oldest.time_ms;
        if elapsed_ms <= 0 {
            return 0.0;
        }
        (newest.position - oldest.position) / elapsed_ms as f32 * 1000.0
    }

    /// Calculates the velocity in units/second, capped to `max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity() {
        let mut tracker = VelocityTracker1D::new();
        // 100 px per 10ms = 10000 px/s
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.add_data_point(20, 200.0);
        tracker.add_data_point(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!((velocity - 10_000.0).abs() < 1.0, "Expected ~10000, got {velocity}");
    }

    #[test]
    fn negative_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);

        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn velocity_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn old_samples_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 5_000.0);
        tracker.add_data_point(150, 100.0);
        tracker.add_data_point(160, 200.0);
        tracker.add_data_point(170, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!((velocity - 10_000.0).abs() < 1.0, "got {velocity}");
    }

    #[test]
    fn gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn history_is_bounded() {
        let mut tracker = VelocityTracker1D::new();
        for i in 0..(HISTORY_SIZE as i64 * 2) {
            tracker.add_data_point(i, i as f32);
        }
        assert_eq!(tracker.samples.len(), HISTORY_SIZE);
    }
}
