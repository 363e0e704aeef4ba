//! Timing of a reveal: duration, easing and per-item delay.

use std::time::Duration;

use crate::easing::Easing;

/// Duration of a reveal transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);

/// Delay added per list position when revealing a staggered list.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(150);

/// Durations with a predefined utility class.
const DURATION_CLASSES: [u128; 9] = [0, 75, 100, 150, 200, 300, 500, 700, 1000];

/// How a block moves from its hidden classes to its revealed classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    duration: Duration,
    easing: Easing,
    delay: Option<Duration>,
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::EaseOut,
            delay: None,
        }
    }
}

impl RevealTransition {
    /// A 700ms ease-out transition with no delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set an explicit start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay this transition by `index * step`, for the `index`-th item of a list.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.with_delay(step.saturating_mul(index))
    }

    /// The transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The start delay (zero when none was set).
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay.unwrap_or(Duration::ZERO)
    }

    /// The duration utility class, e.g. `duration-700`.
    pub fn duration_class(&self) -> String {
        let millis = self.duration.as_millis();
        if DURATION_CLASSES.contains(&millis) {
            format!("duration-{millis}")
        } else {
            format!("duration-[{millis}ms]")
        }
    }

    /// The inline `transition-delay` declaration for explicitly delayed items.
    pub fn delay_css(&self) -> Option<String> {
        self.delay
            .map(|delay| format!("transition-delay: {}ms", delay.as_millis()))
    }
}
