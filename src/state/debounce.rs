//! Single-slot debounce scheduler for search input.
//!
//! Rapid keystrokes each schedule the current search text. Only the most
//! recent text survives, and it fires once input has been quiet for the
//! configured period. The caller supplies `now`, so the scheduler never
//! reads a clock itself.

use std::time::{Duration, Instant};

/// Quiet period used when none is configured.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    due: Instant,
}

/// Holds at most one pending query.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

impl QueryDebouncer {
    /// Create an idle scheduler with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// How long input must stay quiet before a query fires.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Replace any pending query and restart the quiet period.
    pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            query: query.into(),
            due: now + self.quiet_period,
        });
    }

    /// Drop the pending query, if any. Returns it.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// True when a query is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The query waiting to fire.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.query.as_str())
    }

    /// Take the pending query once its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    /// Time left before the pending query fires. `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
