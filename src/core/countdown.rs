//! Launch countdown shown on screens whose features have not shipped yet.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

pub fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 20)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn default_target() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, 20)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    fn from_delta(delta: TimeDelta) -> Self {
        let total = delta.num_seconds().max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownSnapshot {
    pub remaining: TimeLeft,
    /// Percentage of the start→target span that has elapsed, in `0.0..=100.0`.
    pub progress: f64,
    pub launched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    start: NaiveDateTime,
    target: NaiveDateTime,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(default_start(), default_target())
    }
}

impl Countdown {
    pub fn new(start: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self { start, target }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    pub fn snapshot(&self, now: NaiveDateTime) -> CountdownSnapshot {
        let launched = now > self.target;
        let remaining = if launched {
            TimeLeft::default()
        } else {
            TimeLeft::from_delta(self.target - now)
        };

        let span = (self.target - self.start).num_milliseconds();
        let progress = if span <= 0 {
            if launched {
                100.0
            } else {
                0.0
            }
        } else {
            let elapsed = (now - self.start).num_milliseconds() as f64;
            (elapsed / span as f64 * 100.0).clamp(0.0, 100.0)
        };

        CountdownSnapshot {
            remaining,
            progress,
            launched,
        }
    }
}

/// Progress value that glides toward its target instead of jumping.
///
/// Each [`EasedProgress::step`] closes a fixed fraction of the remaining gap,
/// which reads as an ease-out curve; with the default rate the bar settles
/// within about a second of 100ms ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedProgress {
    current: f64,
    target: f64,
    rate: f64,
}

impl Default for EasedProgress {
    fn default() -> Self {
        Self::new(0.35)
    }
}

impl EasedProgress {
    const SETTLE_EPSILON: f64 = 0.05;

    pub fn new(rate: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            rate: rate.clamp(0.01, 1.0),
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 100.0);
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn step(&mut self) {
        let gap = self.target - self.current;
        if gap.abs() <= Self::SETTLE_EPSILON {
            self.current = self.target;
        } else {
            self.current += gap * self.rate;
        }
    }
}
