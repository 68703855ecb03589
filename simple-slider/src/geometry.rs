//! Slide widths and wrapper offsets.
//!
//! ## Offset rule
//!
//! The wrapper offset is the summed width of every element before the
//! leftmost visible position.
//!
//! - Loop mode: the active real slide sits in viewport slot
//!   `ceil(spv / 2) - 1`, i.e. the centre slot, or the earlier of the two
//!   centre slots when `spv` is even. The leftmost visible position is
//!   therefore `index + (k - spv) + floor(spv / 2) + 1`, the `+ 1` skipping
//!   past the clone padding for a 0-based index.
//! - Bounded mode: the leftmost visible position is the index itself,
//!   capped at `max_index - 1` so the last page never shows space past the
//!   final slide.

use tracing::trace;

use crate::{Px, SlideSet, SlidesPerView};

/// Width of one slide: `round(container / slides_per_view)`.
pub fn compute_slide_width(container_width: Px, slides_per_view: usize) -> Px {
    container_width.div_round(slides_per_view.max(1))
}

/// Summed width of every element strictly before `position`.
pub fn compute_offset(position: usize, slide_widths: &[Px]) -> Px {
    let end = position.min(slide_widths.len());
    slide_widths[..end].iter().sum()
}

/// Leftmost visible wrapper position for a loop-mode index.
pub fn loop_position(index: isize, slides_per_view: usize, clones_per_side: usize) -> usize {
    let spv = slides_per_view.max(1) as isize;
    let k = clones_per_side as isize;
    let position = index + (k - spv) + spv / 2 + 1;
    position.max(0) as usize
}

/// Leftmost visible wrapper position for a bounded-mode index.
pub fn bounded_position(index: isize, max_index: usize) -> usize {
    let last = max_index.saturating_sub(1) as isize;
    index.clamp(0, last) as usize
}

/// Number of distinct bounded-mode positions: `N - spv + 1`, at least 1.
pub fn bounded_max_index(real_count: usize, slides_per_view: usize) -> usize {
    (real_count + 1).saturating_sub(slides_per_view).max(1)
}

/// Result of feeding a new container width to [`Geometry::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// Width is zero; layout is kept and rendering should wait.
    Deferred,
    /// Same width and slide count as before.
    Unchanged,
    /// Widths were recomputed.
    Changed {
        /// Whether the resolved slides-per-view changed too.
        slides_per_view_changed: bool,
    },
}

/// Viewport-derived layout state.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    table: SlidesPerView,
    slides: SlideSet,
    loop_mode: bool,
    container_width: Px,
    slides_per_view: usize,
    slide_width: Px,
    slide_widths: Vec<Px>,
    wrapper_width: Px,
}

impl Geometry {
    /// Creates an unlaid-out geometry. Call [`resize`](Self::resize) with the
    /// container width before asking for offsets.
    pub fn new(table: SlidesPerView, slides: SlideSet, loop_mode: bool) -> Self {
        Self {
            table,
            slides,
            loop_mode,
            container_width: Px::ZERO,
            slides_per_view: 1,
            slide_width: Px::ZERO,
            slide_widths: vec![Px::ZERO; slides.len()],
            wrapper_width: Px::ZERO,
        }
    }

    /// Recomputes slides-per-view and every width for `container_width`.
    pub fn resize(&mut self, container_width: Px) -> LayoutChange {
        if !container_width.is_positive() {
            trace!("container width {container_width} deferred");
            return LayoutChange::Deferred;
        }

        let slides_per_view = self
            .table
            .resolve(container_width)
            .clamp(1, self.slides.real_count().max(1));
        if container_width == self.container_width && slides_per_view == self.slides_per_view {
            return LayoutChange::Unchanged;
        }

        let slides_per_view_changed = slides_per_view != self.slides_per_view;
        self.container_width = container_width;
        self.slides_per_view = slides_per_view;
        self.slide_width = compute_slide_width(container_width, slides_per_view);
        self.slide_widths = vec![self.slide_width; self.slides.len()];
        self.wrapper_width = self.slide_widths.iter().sum();
        trace!(
            "layout: container={container_width} spv={slides_per_view} slide={} wrapper={}",
            self.slide_width, self.wrapper_width
        );
        LayoutChange::Changed {
            slides_per_view_changed,
        }
    }

    /// Whether a non-zero width has been applied.
    pub fn is_laid_out(&self) -> bool {
        self.container_width.is_positive()
    }

    /// Current container width.
    pub fn container_width(&self) -> Px {
        self.container_width
    }

    /// Resolved slides-per-view.
    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    /// Width of each slide.
    pub fn slide_width(&self) -> Px {
        self.slide_width
    }

    /// Width of the whole wrapper, clones included.
    pub fn wrapper_width(&self) -> Px {
        self.wrapper_width
    }

    /// The slide set this geometry lays out.
    pub fn slides(&self) -> SlideSet {
        self.slides
    }

    /// Exclusive upper bound of bounded-mode indices.
    pub fn max_index(&self) -> usize {
        bounded_max_index(self.slides.real_count(), self.slides_per_view)
    }

    /// Leftmost visible wrapper position for `index`.
    pub fn position_for(&self, index: isize) -> usize {
        if self.loop_mode {
            loop_position(index, self.slides_per_view, self.slides.clones_per_side())
        } else {
            bounded_position(index, self.max_index())
        }
    }

    /// Wrapper offset for `index`.
    pub fn offset_for(&self, index: isize) -> Px {
        compute_offset(self.position_for(index), &self.slide_widths)
    }

    /// Range of offsets a drag may render without being finalized.
    ///
    /// Loop mode allows `slack` beyond the first and last real slides.
    /// Bounded mode allows no travel past the first or last page; see
    /// [`edge_overshoot`](Self::edge_overshoot) for how far a drag may push
    /// against that edge.
    pub fn travel_window(&self, slack: Px) -> (Px, Px) {
        if self.loop_mode {
            let last = self.slides.real_count().saturating_sub(1) as isize;
            (
                self.offset_for(0) - slack,
                self.offset_for(last) + slack,
            )
        } else {
            let last = self.max_index().saturating_sub(1) as isize;
            (self.offset_for(0), self.offset_for(last))
        }
    }

    /// How far past [`travel_window`](Self::travel_window) a drag may push
    /// before it is finalized.
    ///
    /// Bounded mode holds the wrapper at the edge for up to `threshold`, so
    /// a swipe that starts with a small jitter toward the edge keeps going;
    /// only a push past the threshold ends the gesture. Loop mode finalizes
    /// as soon as the slack is used up.
    pub fn edge_overshoot(&self, threshold: Px) -> Px {
        if self.loop_mode { Px::ZERO } else { threshold }
    }
}
