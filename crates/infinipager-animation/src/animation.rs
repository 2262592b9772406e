//! Time-based tween animations with easing curves.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing functions for animations matching Jetpack Compose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Jetpack Compose: LinearEasing
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve, the default for page animations.
    /// Jetpack Compose: FastOutSlowInEasing
    FastOutSlowInEasing,
    /// Jetpack Compose: LinearOutSlowInEasing
    LinearOutSlowInEasing,
    /// Jetpack Compose: FastOutLinearEasing
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluates a CSS-style cubic bezier easing curve at `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first, bisection when the slope flattens out.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let derivative = slope(ax, bx, cx, t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let error = sample(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
    }

    sample(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    fn total_nanos(&self) -> u64 {
        (self.delay_millis + self.duration_millis) * 1_000_000
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// One sample of a running tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame<T> {
    pub value: T,
    pub finished: bool,
}

/// A tween between two values, advanced by explicit frame timestamps.
///
/// The first frame seen pins the start time, mirroring how a frame-clock
/// callback starts an animation on the next vsync rather than at request time.
#[derive(Debug, Clone)]
pub struct TweenAnimation<T: Lerp + Clone> {
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
}

impl<T: Lerp + Clone> TweenAnimation<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
        }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Returns whether the first frame has been delivered yet.
    pub fn has_started(&self) -> bool {
        self.start_time_nanos.is_some()
    }

    /// Samples the animation at `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> TweenFrame<T> {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis * 1_000_000;

        if elapsed_nanos < delay_nanos {
            return TweenFrame {
                value: self.start.clone(),
                finished: false,
            };
        }

        if elapsed_nanos >= self.spec.total_nanos() {
            log::trace!("tween finished after {elapsed_nanos}ns");
            return TweenFrame {
                value: self.target.clone(),
                finished: true,
            };
        }

        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear_progress);
        TweenFrame {
            value: self.start.lerp(&self.target, progress),
            finished: false,
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
