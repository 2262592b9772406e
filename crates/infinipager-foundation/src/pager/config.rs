use infinipager_animation::AnimationSpec;

use crate::gesture_constants::SNAP_VELOCITY_THRESHOLD;

/// Default half-width of the "settled" window around a page, in pages.
///
/// A transition counts as finished once the offset fraction from the current
/// page falls inside `[-0.05, 0.05]`, which absorbs floating-point noise at
/// the tail of the settle animation.
pub const DEFAULT_SETTLE_TOLERANCE: f32 = 0.05;

/// Tunables for the pager host and the looping controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerConfig {
    /// Offset fraction below which a page counts as settled. Must lie in `[0, 0.5)`.
    pub settle_tolerance: f32,
    /// Animation used for programmatic page changes and for snapping after a drag.
    pub page_animation: AnimationSpec,
    /// Release velocity (logical px/s) that flings to the neighbouring page.
    pub snap_velocity_threshold: f32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            settle_tolerance: DEFAULT_SETTLE_TOLERANCE,
            page_animation: AnimationSpec::default(),
            snap_velocity_threshold: SNAP_VELOCITY_THRESHOLD,
        }
    }
}

impl PagerConfig {
    pub fn with_settle_tolerance(mut self, tolerance: f32) -> Self {
        self.settle_tolerance = tolerance;
        self
    }

    pub fn with_page_animation(mut self, spec: AnimationSpec) -> Self {
        self.page_animation = spec;
        self
    }

    pub fn with_snap_velocity_threshold(mut self, velocity: f32) -> Self {
        self.snap_velocity_threshold = velocity;
        self
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), PagerConfigError> {
        let tolerance = self.settle_tolerance;
        // Half a page or more would count a mid-swipe position as settled.
        if !tolerance.is_finite() || !(0.0..0.5).contains(&tolerance) {
            return Err(PagerConfigError::InvalidSettleTolerance { value: tolerance });
        }
        if self.page_animation.duration_millis == 0 {
            return Err(PagerConfigError::ZeroAnimationDuration);
        }
        let velocity = self.snap_velocity_threshold;
        if !velocity.is_finite() || velocity < 0.0 {
            return Err(PagerConfigError::InvalidVelocityThreshold { value: velocity });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PagerConfigError {
    InvalidSettleTolerance { value: f32 },
    ZeroAnimationDuration,
    InvalidVelocityThreshold { value: f32 },
}

impl std::fmt::Display for PagerConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerConfigError::InvalidSettleTolerance { value } => {
                write!(f, "settle tolerance {value} must be finite and within [0, 0.5)")
            }
            PagerConfigError::ZeroAnimationDuration => {
                write!(f, "page animation duration must be greater than zero")
            }
            PagerConfigError::InvalidVelocityThreshold { value } => {
                write!(f, "snap velocity threshold {value} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for PagerConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PagerConfig::default();
        assert_eq!(config.settle_tolerance, 0.05);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn tolerance_outside_half_page_is_rejected() {
        for bad in [-0.01, 0.5, 0.75, f32::NAN, f32::INFINITY] {
            let config = PagerConfig::default().with_settle_tolerance(bad);
            assert!(
                matches!(
                    config.validate(),
                    Err(PagerConfigError::InvalidSettleTolerance { .. })
                ),
                "tolerance {bad} should be rejected"
            );
        }
        let strict = PagerConfig::default().with_settle_tolerance(0.0);
        assert_eq!(strict.validate(), Ok(()));
    }

    #[test]
    fn zero_duration_animation_is_rejected() {
        let config = PagerConfig::default().with_page_animation(AnimationSpec::linear(0));
        assert_eq!(config.validate(), Err(PagerConfigError::ZeroAnimationDuration));
    }

    #[test]
    fn negative_velocity_threshold_is_rejected() {
        let config = PagerConfig::default().with_snap_velocity_threshold(-1.0);
        let err = config.validate().expect_err("negative threshold");
        assert_eq!(
            err.to_string(),
            "snap velocity threshold -1 must be finite and non-negative"
        );
    }
}
