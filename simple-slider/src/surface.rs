//! The boundary between the slider core and whatever draws it.
//!
//! ## Usage
//!
//! Implement [`Surface`] for a DOM binding, a native widget, or a test
//! recorder. The core only ever issues these commands; it never queries
//! elements, toggles classes or brands style properties.

use std::time::Duration;

use crate::{Px, SlideSet};

/// Commands the slider issues to its host.
pub trait Surface {
    /// Sets the wrapper's transition duration for subsequent offset changes.
    fn set_transition_duration(&mut self, duration: Duration);

    /// Translates the wrapper `offset` pixels to the left.
    fn set_wrapper_offset(&mut self, offset: Px);

    /// Marks bullet `index` as the only active one.
    fn set_active_bullet(&mut self, index: usize);

    /// Applies slide and wrapper widths after a layout pass.
    fn set_layout(&mut self, slide_width: Px, wrapper_width: Px) {
        let _ = (slide_width, wrapper_width);
    }

    /// Inserts the clone elements described by `slides`. Called once, and
    /// only when the set has clones.
    fn mount_clones(&mut self, slides: &SlideSet) {
        let _ = slides;
    }

    /// Whether the host has a pagination container. Without one the slider
    /// never issues [`set_active_bullet`](Self::set_active_bullet).
    fn has_pagination(&self) -> bool {
        true
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_transition_duration(&mut self, duration: Duration) {
        (**self).set_transition_duration(duration);
    }

    fn set_wrapper_offset(&mut self, offset: Px) {
        (**self).set_wrapper_offset(offset);
    }

    fn set_active_bullet(&mut self, index: usize) {
        (**self).set_active_bullet(index);
    }

    fn set_layout(&mut self, slide_width: Px, wrapper_width: Px) {
        (**self).set_layout(slide_width, wrapper_width);
    }

    fn mount_clones(&mut self, slides: &SlideSet) {
        (**self).mount_clones(slides);
    }

    fn has_pagination(&self) -> bool {
        (**self).has_pagination()
    }
}
