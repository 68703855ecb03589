//! Real and cloned slides inside the wrapper.
//!
//! In loop mode the wrapper holds `k` clones of the last real slides, then
//! the `N` real slides, then `k` clones of the first real slides:
//!
//! ```text
//! position: 0    1    | 2  3  4  5  6 |  7    8
//! slide:    c(3) c(4) | 0  1  2  3  4 |  c(0) c(1)      N = 5, k = 2
//! ```
//!
//! Clones only exist so the strip can keep moving past either end. They are
//! never counted as slides and have no pagination bullet.

/// Layout of real and cloned slides in the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSet {
    real_count: usize,
    clones_per_side: usize,
}

impl SlideSet {
    /// Describes `real_count` slides with `clones_per_side` clones at each end.
    pub fn new(real_count: usize, clones_per_side: usize) -> Self {
        Self {
            real_count,
            clones_per_side,
        }
    }

    /// Number of real slides, `N`.
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Number of clones on each side, `k`.
    pub fn clones_per_side(&self) -> usize {
        self.clones_per_side
    }

    /// Total number of elements in the wrapper, clones included.
    pub fn len(&self) -> usize {
        self.real_count + 2 * self.clones_per_side
    }

    /// Returns `true` when the wrapper holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wrapper position of real slide `index`.
    pub fn real_position(&self, index: usize) -> usize {
        self.clones_per_side + index
    }

    /// Returns `true` if the element at `position` is a clone.
    pub fn is_clone(&self, position: usize) -> bool {
        position < self.clones_per_side || position >= self.clones_per_side + self.real_count
    }

    /// The real slide shown by the element at `position`.
    ///
    /// Returns `None` for positions outside the wrapper.
    pub fn source_of(&self, position: usize) -> Option<usize> {
        if position >= self.len() || self.real_count == 0 {
            return None;
        }
        let n = self.real_count as isize;
        let relative = position as isize - self.clones_per_side as isize;
        Some(relative.rem_euclid(n) as usize)
    }

    /// Iterates `(position, source)` for every element in wrapper order.
    pub fn positions(&self) -> impl Iterator<Item = SlidePosition> + '_ {
        (0..self.len()).filter_map(move |position| {
            self.source_of(position).map(|source| SlidePosition {
                position,
                source,
                is_clone: self.is_clone(position),
            })
        })
    }
}

/// One element of the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    /// Position inside the wrapper.
    pub position: usize,
    /// Real slide this element shows.
    pub source: usize,
    /// Whether this element is a clone.
    pub is_clone: bool,
}

/// The slide reported to `on_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSlide {
    /// Real slide index in `[0, N)`.
    pub index: usize,
    /// Position of that slide inside the wrapper.
    pub wrapper_position: usize,
}
