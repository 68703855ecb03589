//! Drag tracker.
//!
//! Turns a pointer or touch gesture into either a live wrapper offset or,
//! on release, one discrete step. A gesture is one `start`, any number of
//! `update`s and one `release`; [`DragState`] is reset after every release.

use tracing::trace;

use crate::Px;

/// Transient per-gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Pointer x at gesture start.
    pub start_x: Px,
    /// Last pointer x seen.
    pub end_x: Px,
    /// `end_x - start_x`; negative when the content moved left.
    pub diff: Px,
    /// Between pointer-down and pointer-up.
    pub focused: bool,
    /// The pointer moved over a link during this gesture.
    pub is_link: bool,
}

/// What to do with a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMove {
    /// No gesture in progress.
    Ignored,
    /// Render this offset directly, without transition.
    Follow(Px),
    /// The gesture left the travel window and must be released now.
    Finalize,
}

/// What a released gesture commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// No gesture in progress.
    Ignored,
    /// Content moved left past the threshold.
    Advance,
    /// Content moved right past the threshold.
    Retreat,
    /// Not far enough; return to the committed offset.
    SnapBack,
}

/// Tracks one gesture at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragTracker {
    state: DragState,
    threshold: Px,
    suppress_click: bool,
}

impl DragTracker {
    /// Creates a tracker committing gestures longer than `threshold`.
    pub fn new(threshold: Px) -> Self {
        Self {
            state: DragState::default(),
            threshold,
            suppress_click: false,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a gesture is in progress.
    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Begins a gesture at `x`.
    pub fn start(&mut self, x: Px) {
        self.state = DragState {
            start_x: x,
            end_x: x,
            diff: Px::ZERO,
            focused: true,
            is_link: false,
        };
        self.suppress_click = false;
    }

    /// Feeds a pointer move.
    ///
    /// `committed` is the offset of the current index and `window` the
    /// inclusive range of offsets that may be rendered live. A candidate up
    /// to `overshoot` outside the window is held at its edge; anything
    /// further finalizes the gesture.
    pub fn update(
        &mut self,
        x: Px,
        over_link: bool,
        committed: Px,
        window: (Px, Px),
        overshoot: Px,
    ) -> DragMove {
        if !self.state.focused {
            return DragMove::Ignored;
        }
        self.state.end_x = x;
        self.state.diff = x - self.state.start_x;
        self.state.is_link |= over_link;

        let candidate = committed - self.state.diff;
        let (min, max) = window;
        if candidate < min - overshoot || candidate > max + overshoot {
            trace!("drag candidate {candidate} outside {min}..={max}");
            return DragMove::Finalize;
        }
        DragMove::Follow(candidate.clamp(min, max))
    }

    /// Ends the gesture and resets the state.
    ///
    /// A gesture that moved over a link arms a one-shot click suppression,
    /// see [`take_click_suppression`](Self::take_click_suppression).
    pub fn release(&mut self) -> DragRelease {
        if !self.state.focused {
            return DragRelease::Ignored;
        }
        let diff = self.state.diff;
        let release = if diff.abs() > self.threshold.abs() {
            if diff < Px::ZERO {
                DragRelease::Advance
            } else {
                DragRelease::Retreat
            }
        } else {
            DragRelease::SnapBack
        };

        self.suppress_click = self.state.is_link && diff != Px::ZERO;
        self.state = DragState::default();
        release
    }

    /// Returns whether the click following the last gesture should be
    /// suppressed, and disarms it.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}
