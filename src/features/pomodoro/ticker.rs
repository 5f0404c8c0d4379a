//! The one-second repeating trigger that drives the countdown.
//!
//! There is exactly one [`Ticker`] per panel, so at most one tick source is
//! ever active. The event loop calls [`Ticker::sync`] with the timer's
//! `is_running` after every transition, and polls [`Ticker::due`] to learn
//! how many ticks have elapsed.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Shortest period a ticker accepts.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A start/stop repeating trigger driven by caller-supplied instants.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker with the given period.
    ///
    /// Periods shorter than [`MIN_PERIOD`] are raised to it.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next: None,
        }
    }

    /// Whether the trigger is registered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// Start the trigger; the first tick is one period from `now`.
    ///
    /// Starting an active ticker does nothing.
    pub fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            debug!(period_ms = self.period.as_millis(), "ticker started");
            self.next = Some(now + self.period);
        }
    }

    /// Stop the trigger.
    pub fn stop(&mut self) {
        if self.next.take().is_some() {
            debug!("ticker stopped");
        }
    }

    /// Start or stop so the trigger is active exactly when `running`.
    pub fn sync(&mut self, running: bool, now: Instant) {
        if running {
            self.start(now);
        } else {
            self.stop();
        }
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// Returns more than one when the caller fell behind by several periods.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };

        let mut count = 0;
        while next <= now {
            count += 1;
            next += self.period;
        }
        self.next = Some(next);
        count
    }

    /// Time until the next tick, or `None` when stopped.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
