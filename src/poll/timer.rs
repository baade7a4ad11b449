// src/poll/timer.rs
use std::time::{Duration, Instant};

/// Repeating deadline. Holds no thread; the owner asks `fire(now)`.
/// Missed deadlines collapse into a single fire.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period: Duration,
    next: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        // Zero would spin
        let period = period.max(Duration::from_millis(1));
        Self { period, next: None }
    }

    #[inline]
    pub fn period(&self) -> Duration { self.period }

    #[inline]
    pub fn is_armed(&self) -> bool { self.next.is_some() }

    /// First fire one period after `now`. Returns false if already armed.
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.next.is_some() {
            return false;
        }
        self.next = Some(now + self.period);
        true
    }

    /// Returns false if it wasn't armed.
    pub fn disarm(&mut self) -> bool {
        self.next.take().is_some()
    }

    /// True once per elapsed deadline. Reschedules to the first period
    /// boundary strictly after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else { return false };
        if now < next {
            return false;
        }
        // Distance past the last boundary at or before `now`
        let into = (now - next).as_nanos() % self.period.as_nanos();
        let left = self.period.as_nanos() - into;
        let left = u64::try_from(left).map(Duration::from_nanos).unwrap_or(self.period);
        self.next = Some(now + left);
        true
    }

    /// Time left until the next deadline, `None` when disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next.map(|n| n.saturating_duration_since(now))
    }
}
