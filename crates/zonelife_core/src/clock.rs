use std::time::Duration;

use crate::error::{Result, SimError};

/// Frame-time accumulator that decides when the next generation is due.
///
/// Callers feed it the time elapsed since their last frame. A call reports at
/// most one due tick; leftover time past the interval is dropped, so a long
/// frame never triggers a burst of catch-up generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Result<Self> {
        Self::check_interval(interval)?;
        Ok(Self {
            interval,
            accumulated: Duration::ZERO,
        })
    }

    fn check_interval(interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(SimError::invalid_config("tick interval must be positive"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        Self::check_interval(interval)?;
        self.interval = interval;
        Ok(())
    }

    /// Adds `dt` and returns `true` if a tick is due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(dt);
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
