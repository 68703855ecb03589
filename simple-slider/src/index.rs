//! Index state machine.
//!
//! The slider is either [`Phase::Idle`] or [`Phase::Transitioning`]. A
//! transition is only accepted while idle; requests made while a transition
//! is in flight are dropped. That rule alone keeps the index in step with the
//! rendered position, because the host can never stack two animations.
//!
//! While transitioning the raw index may sit one step outside the valid
//! range: inside the clone region in loop mode, or one past the last page in
//! bounded mode. [`IndexMachine::settle`] brings it back.

use std::time::Duration;

use tracing::debug;

use crate::Instant;

/// What a transition request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move one slide forward.
    Advance,
    /// Move one slide back.
    Retreat,
    /// Move to a real slide, as a pagination bullet does.
    To(usize),
}

/// Current phase of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting requests.
    Idle,
    /// Animating; requests are dropped until `settle_at`.
    Transitioning {
        /// When the transition completes.
        settle_at: Instant,
        /// Settled index the transition started from.
        from: usize,
    },
}

/// An accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Raw index to render, possibly inside the clone region.
    pub index: isize,
    /// Bullet to highlight, i.e. the wrapped or clamped index.
    pub bullet: usize,
    /// When the transition completes.
    pub settle_at: Instant,
}

/// Result of settling a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    /// Index after wrapping or clamping.
    pub index: usize,
    /// The raw index had to be corrected, so the host must re-render it
    /// without animation.
    pub corrected: bool,
    /// The settled slide differs from the one the transition started from.
    pub changed: bool,
}

/// Owns the current index and the idle/transitioning phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMachine {
    index: isize,
    real_count: usize,
    loop_mode: bool,
    phase: Phase,
}

impl IndexMachine {
    /// Starts idle at slide 0.
    pub fn new(real_count: usize, loop_mode: bool) -> Self {
        Self {
            index: 0,
            real_count,
            loop_mode,
            phase: Phase::Idle,
        }
    }

    /// Raw index, possibly outside `[0, N)` while transitioning.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// When the in-flight transition settles.
    pub fn settle_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { settle_at, .. } => Some(settle_at),
        }
    }

    /// Wraps any index into `[0, N)`.
    pub fn wrap(&self, index: isize) -> usize {
        wrap_index(index, self.real_count)
    }

    /// Wrapped index in loop mode, clamped index in bounded mode.
    pub fn normalize(&self, index: isize, max_index: usize) -> usize {
        if self.loop_mode {
            self.wrap(index)
        } else {
            index.clamp(0, max_index.saturating_sub(1) as isize) as usize
        }
    }

    /// Settled form of the current index.
    pub fn current(&self, max_index: usize) -> usize {
        self.normalize(self.index, max_index)
    }

    /// Starts a transition if idle.
    ///
    /// Returns `None` when a transition is already in flight; the request is
    /// dropped, not queued.
    pub fn request(
        &mut self,
        step: Step,
        max_index: usize,
        now: Instant,
        speed: Duration,
    ) -> Option<Transition> {
        if let Phase::Transitioning { settle_at, .. } = self.phase {
            debug!("{step:?} dropped, transition settles at {settle_at:?}");
            return None;
        }

        let from = self.current(max_index);
        self.index = match step {
            Step::Advance => self.index + 1,
            Step::Retreat => self.index - 1,
            Step::To(target) => self.normalize(target as isize, max_index) as isize,
        };
        // An unschedulable speed settles on the next poll.
        let settle_at = now.checked_add(speed).unwrap_or(now);
        self.phase = Phase::Transitioning { settle_at, from };

        Some(Transition {
            index: self.index,
            bullet: self.current(max_index),
            settle_at,
        })
    }

    /// Ends the in-flight transition, wrapping or clamping the index.
    ///
    /// Returns `None` when idle.
    pub fn settle(&mut self, max_index: usize) -> Option<Settled> {
        let Phase::Transitioning { from, .. } = self.phase else {
            return None;
        };
        self.phase = Phase::Idle;

        let settled = self.current(max_index);
        let corrected = settled as isize != self.index;
        self.index = settled as isize;
        Some(Settled {
            index: settled,
            corrected,
            changed: settled != from,
        })
    }

    /// Clamps an idle bounded-mode index after `max_index` shrank.
    ///
    /// Returns `true` if the index moved.
    pub fn reclamp(&mut self, max_index: usize) -> bool {
        if self.loop_mode || self.is_transitioning() {
            return false;
        }
        let clamped = self.current(max_index) as isize;
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }
}

/// Wraps `index` into `[0, count)`. A zero count wraps to 0.
pub fn wrap_index(index: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.rem_euclid(count as isize) as usize
}
