//! Time-gated refresh state for the selection pipeline.

use std::time::Duration;

use crate::UtcDateTime;

/// Injectable wall-clock source.
///
/// Production uses [`SystemClock`]; tests drive refresh transitions with a
/// manual implementation instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> UtcDateTime;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UtcDateTime {
        UtcDateTime::now()
    }
}

/// Two-state gate deciding whether the cached selection is still valid.
///
/// Starts stale so the first invocation always recomputes. On a stale->fresh
/// transition the refresh timestamp is stamped before the caller starts the
/// recompute, so a recompute outlasting the refresh period does not
/// immediately re-trigger.
#[derive(Debug, Clone)]
pub struct RefreshGate {
    refresh_period: Duration,
    last_refresh: Option<UtcDateTime>,
}

impl RefreshGate {
    pub fn new(refresh_period: Duration) -> Self {
        Self {
            refresh_period,
            last_refresh: None,
        }
    }

    pub fn refresh_period(&self) -> Duration {
        self.refresh_period
    }

    pub fn last_refresh(&self) -> Option<UtcDateTime> {
        self.last_refresh
    }

    /// Returns `true` and stamps `now` when a recompute is due.
    pub fn try_refresh(&mut self, now: UtcDateTime) -> bool {
        let stale = match self.last_refresh {
            None => true,
            Some(last) => now.seconds_since(last) >= self.refresh_period.as_secs() as i64,
        };

        if stale {
            self.last_refresh = Some(now);
        }
        stale
    }
}
