//! Autoplay scheduler.
//!
//! A single pending deadline. Firing reschedules it one interval later;
//! any manual interaction replaces it with a fresh full interval; a hidden
//! page clears it until the page is visible again.

use std::time::Duration;

use tracing::trace;

use crate::Instant;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Owns the autoplay deadline of one slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayScheduler {
    enabled: bool,
    hidden: bool,
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayScheduler {
    /// Creates an idle scheduler; call [`reset`](Self::reset) to arm it.
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            hidden: false,
            interval: interval.max(MIN_INTERVAL),
            deadline: None,
        }
    }

    /// Whether autoplay is configured.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the hosting page is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Pending tick, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels the pending tick and schedules a full interval from `now`.
    ///
    /// Does nothing beyond cancelling while disabled or hidden.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = None;
        if self.enabled && !self.hidden {
            self.deadline = now.checked_add(self.interval);
            trace!("autoplay scheduled for {:?}", self.deadline);
        }
    }

    /// Cancels the pending tick without rescheduling.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Applies a page visibility change.
    pub fn set_hidden(&mut self, hidden: bool, now: Instant) {
        self.hidden = hidden;
        if hidden {
            self.cancel();
        } else {
            self.reset(now);
        }
    }

    /// If the pending tick is due at `now`, reschedules it and returns the
    /// instant it was due at.
    ///
    /// A host that polls late gets one tick, not a burst of missed ones; the
    /// next deadline is the first interval boundary after `now`.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        let due = self.deadline.filter(|&deadline| deadline <= now)?;
        self.deadline = next_boundary(due, self.interval, now);
        Some(due)
    }
}

/// First interval boundary after `now`, or `None` past the end of time.
fn next_boundary(due: Instant, interval: Duration, now: Instant) -> Option<Instant> {
    let next = due.checked_add(interval)?;
    if next > now {
        return Some(next);
    }
    let behind = now.duration_since(next).as_nanos();
    let steps = behind / interval.as_nanos() + 1;
    let skip = u64::try_from(interval.as_nanos().saturating_mul(steps)).unwrap_or(u64::MAX);
    next.checked_add(Duration::from_nanos(skip))
}
