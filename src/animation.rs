// SPDX-License-Identifier: MPL-2.0
//! Dashboard stat counters and progress bars.
//!
//! Both animations are pure functions of the clock: the caller records when
//! an animation starts and asks for the frame at any later instant. Only
//! linear interpolation is used.

use crate::app::config::{
    AnimationsConfig, DEFAULT_COUNTER_INTERVAL_MS, DEFAULT_COUNTER_STEPS,
    DEFAULT_PROGRESS_DELAY_MS, DEFAULT_PROGRESS_DURATION_MS, DEFAULT_PROGRESS_START_MS,
};
use std::time::{Duration, Instant};

/// Timing shared by all dashboard animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub counter_steps: u32,
    pub counter_interval: Duration,
    pub progress_delay: Duration,
    pub progress_duration: Duration,
    /// Offset from startup before the progress bars begin.
    pub progress_start: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            counter_steps: DEFAULT_COUNTER_STEPS,
            counter_interval: Duration::from_millis(DEFAULT_COUNTER_INTERVAL_MS),
            progress_delay: Duration::from_millis(DEFAULT_PROGRESS_DELAY_MS),
            progress_duration: Duration::from_millis(DEFAULT_PROGRESS_DURATION_MS),
            progress_start: Duration::from_millis(DEFAULT_PROGRESS_START_MS),
        }
    }
}

impl From<&AnimationsConfig> for AnimationTiming {
    fn from(config: &AnimationsConfig) -> Self {
        let defaults = Self::default();
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map_or(fallback, Duration::from_millis)
        };
        Self {
            counter_steps: config.counter_steps.unwrap_or(defaults.counter_steps).max(1),
            counter_interval: ms(config.counter_interval_ms, defaults.counter_interval),
            progress_delay: ms(config.progress_delay_ms, defaults.progress_delay),
            progress_duration: ms(config.progress_duration_ms, defaults.progress_duration),
            progress_start: ms(config.progress_start_ms, defaults.progress_start),
        }
    }
}

/// Counts a stat label such as `1,234+` up from zero.
///
/// The target is every digit of the label read as one number; the suffix is
/// every non-digit character, in order. `1,234+` therefore counts to 1234
/// and renders as `1234,+` once done.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    steps: u32,
    interval: Duration,
    started_at: Instant,
}

impl CounterAnimation {
    pub fn from_text(text: &str, timing: &AnimationTiming, started_at: Instant) -> Self {
        let (digits, suffix): (String, String) = text.chars().partition(char::is_ascii_digit);
        let target = digits.parse().unwrap_or_else(|_| {
            if !digits.is_empty() {
                tracing::warn!(text, "stat counter target out of range");
            }
            0
        });
        Self {
            target,
            suffix,
            steps: timing.counter_steps.max(1),
            interval: timing.counter_interval,
            started_at,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn frames_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.interval.is_zero() {
            return u64::MAX;
        }
        u64::try_from(elapsed.as_nanos() / self.interval.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Numeric value shown at `now`.
    pub fn value_at(&self, now: Instant) -> u64 {
        let frames = self.frames_at(now);
        if frames >= u64::from(self.steps) {
            return self.target;
        }
        let increment = self.target as f64 / f64::from(self.steps);
        let current = frames as f64 * increment;
        if current >= self.target as f64 {
            self.target
        } else {
            current.floor() as u64
        }
    }

    /// Label shown at `now`.
    pub fn display_at(&self, now: Instant) -> String {
        format!("{}{}", self.value_at(now), self.suffix)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.frames_at(now) >= u64::from(self.steps)
    }
}

/// Grows a progress bar from zero to its target percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    target: f32,
    begins_at: Instant,
    delay: Duration,
    duration: Duration,
}

impl ProgressAnimation {
    /// `begins_at` is when the bar resets to zero; growth follows after the
    /// configured delay.
    pub fn new(target: f32, timing: &AnimationTiming, begins_at: Instant) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            begins_at,
            delay: timing.progress_delay,
            duration: timing.progress_duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let growth_start = self.begins_at + self.delay;
        let elapsed = now.saturating_duration_since(growth_start);
        if now < growth_start {
            return 0.0;
        }
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        self.target * (elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        now >= self.begins_at + self.delay + self.duration
    }
}
