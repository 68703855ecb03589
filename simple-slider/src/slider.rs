//! The slider instance.
//!
//! ## Usage
//!
//! Create one [`Slider`] per carousel, forward host events to its `on_*`
//! methods and call [`Slider::poll`] whenever [`Slider::next_deadline`]
//! passes. Every instance owns its own timers; nothing is shared between
//! sliders.
//!
//! ```
//! use std::time::Duration;
//! use simple_slider::{Instant, Px, SliderConfig, Slider, Surface};
//!
//! #[derive(Default)]
//! struct Wrapper {
//!     offset: Px,
//! }
//!
//! impl Surface for Wrapper {
//!     fn set_transition_duration(&mut self, _: Duration) {}
//!     fn set_wrapper_offset(&mut self, offset: Px) {
//!         self.offset = offset;
//!     }
//!     fn set_active_bullet(&mut self, _: usize) {}
//! }
//!
//! let t0 = Instant::now();
//! let config = SliderConfig::default().speed(Duration::from_millis(300));
//! let mut slider = Slider::new(config, 3, Px::new(400), Wrapper::default(), t0)?;
//! assert_eq!(slider.surface().offset, Px::new(400));
//!
//! slider.on_advance_requested(t0);
//! slider.poll(t0 + Duration::from_millis(300));
//! assert_eq!(slider.index(), 1);
//! assert_eq!(slider.surface().offset, Px::new(800));
//! # Ok::<(), simple_slider::ConfigError>(())
//! ```

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::{
    ActiveSlide, ConfigError, Instant, Px, SlideSet, SliderConfig, Surface,
    autoplay::AutoplayScheduler,
    drag::{DragMove, DragRelease, DragState, DragTracker},
    geometry::{Geometry, LayoutChange},
    index::{IndexMachine, Step},
};

/// What started a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Button,
    Bullet,
    Drag,
    Autoplay,
}

/// One carousel: index, drag, viewport and autoplay state plus its surface.
pub struct Slider<S: Surface> {
    config: SliderConfig,
    surface: S,
    geometry: Geometry,
    machine: IndexMachine,
    drag: DragTracker,
    autoplay: AutoplayScheduler,
    offset: Px,
    active_bullet: usize,
    initialized: bool,
}

impl<S: Surface> Slider<S> {
    /// Validates `config`, mounts clones, lays out for `container_width` and
    /// arms autoplay.
    ///
    /// A zero `container_width` defers layout (and `on_init`) until the
    /// first non-zero [`on_resize`](Self::on_resize).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid for `slide_count`.
    pub fn new(
        config: SliderConfig,
        slide_count: usize,
        container_width: Px,
        surface: S,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        config.validate(slide_count)?;

        let clones = if config.loop_mode {
            config.slides_per_view.max()
        } else {
            0
        };
        let slides = SlideSet::new(slide_count, clones);
        let mut slider = Self {
            geometry: Geometry::new(config.slides_per_view.clone(), slides, config.loop_mode),
            machine: IndexMachine::new(slide_count, config.loop_mode),
            drag: DragTracker::new(config.drag_threshold),
            autoplay: AutoplayScheduler::new(config.autoplay, config.autoplay_interval()),
            config,
            surface,
            offset: Px::ZERO,
            active_bullet: 0,
            initialized: false,
        };

        debug!(
            "slider created: {slide_count} slides, {clones} clones per side, loop={}",
            slider.config.loop_mode
        );
        if clones > 0 {
            slider.surface.mount_clones(&slides);
        }
        if slider.surface.has_pagination() {
            slider.surface.set_active_bullet(0);
        }
        slider.on_resize(container_width);
        slider.autoplay.reset(now);
        Ok(slider)
    }

    /// Next-button click.
    ///
    /// Returns `false` if the request was dropped because a transition is in
    /// flight.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_advance_requested(&mut self, now: Instant) -> bool {
        self.begin(Step::Advance, Trigger::Button, now)
    }

    /// Previous-button click.
    ///
    /// Returns `false` if the request was dropped.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_retreat_requested(&mut self, now: Instant) -> bool {
        self.begin(Step::Retreat, Trigger::Button, now)
    }

    /// Pagination bullet click. Bullet `i` shows real slide `i`.
    ///
    /// Returns `false` if the request was dropped or `bullet` is out of
    /// range.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_bullet_clicked(&mut self, bullet: usize, now: Instant) -> bool {
        let count = self.geometry.slides().real_count();
        if bullet >= count {
            warn!("bullet {bullet} ignored, slider has {count} slides");
            return false;
        }
        self.begin(Step::To(bullet), Trigger::Bullet, now)
    }

    /// Pointer-down or touch-start at `x`.
    pub fn on_drag_start(&mut self, x: Px) {
        if !self.config.enable_drag {
            return;
        }
        trace!("drag start at {x}");
        self.surface.set_transition_duration(Duration::ZERO);
        self.drag.start(x);
        self.autoplay.cancel();
    }

    /// Pointer or touch move to `x`. `over_link` tells whether the event
    /// target is a link.
    pub fn on_drag_move(&mut self, x: Px, over_link: bool, now: Instant) {
        if !self.drag.is_focused()
            || self.machine.is_transitioning()
            || !self.geometry.is_laid_out()
        {
            return;
        }
        let window = self.geometry.travel_window(self.config.drag_slack);
        let overshoot = self.geometry.edge_overshoot(self.config.drag_threshold);
        match self.drag.update(x, over_link, self.offset, window, overshoot) {
            DragMove::Ignored => {}
            DragMove::Follow(offset) => self.surface.set_wrapper_offset(offset),
            DragMove::Finalize => self.finish_drag(now),
        }
    }

    /// Pointer-up, touch-end or pointer-leave.
    pub fn on_drag_end(&mut self, now: Instant) {
        if self.drag.is_focused() {
            self.finish_drag(now);
        }
    }

    /// Whether the click that follows the last drag should be suppressed so
    /// that dragging over a link does not navigate. Disarms the flag.
    pub fn take_click_suppression(&mut self) -> bool {
        self.drag.take_click_suppression()
    }

    /// Container width changed.
    ///
    /// Recomputes slides-per-view and widths, then re-renders without
    /// transition. A zero width is ignored until a real width arrives.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_resize(&mut self, container_width: Px) {
        match self.geometry.resize(container_width) {
            LayoutChange::Deferred => {
                debug!("layout deferred until the container has a width");
            }
            LayoutChange::Unchanged => {}
            LayoutChange::Changed {
                slides_per_view_changed,
            } => {
                let max_index = self.geometry.max_index();
                if slides_per_view_changed {
                    debug!(
                        "slides per view now {}",
                        self.geometry.slides_per_view()
                    );
                }
                if self.machine.reclamp(max_index) {
                    debug!("index clamped to {}", self.machine.index());
                }
                self.surface
                    .set_layout(self.geometry.slide_width(), self.geometry.wrapper_width());
                self.surface.set_transition_duration(Duration::ZERO);
                self.render(self.machine.index());
                if !self.machine.is_transitioning() {
                    self.show_bullet(self.machine.current(max_index));
                }
                if !self.initialized {
                    self.initialized = true;
                    if let Some(on_init) = &self.config.on_init {
                        on_init.call();
                    }
                }
            }
        }
    }

    /// Page visibility changed. Autoplay stops while hidden.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_visibility_change(&mut self, hidden: bool, now: Instant) {
        self.autoplay.set_hidden(hidden, now);
    }

    /// Fires every timer due at `now`, each at its own deadline: transition
    /// settles first, then autoplay ticks.
    pub fn poll(&mut self, now: Instant) {
        loop {
            let settle = self.machine.settle_deadline().filter(|&at| at <= now);
            let tick = self.autoplay.deadline().filter(|&at| at <= now);
            match (settle, tick) {
                (Some(settle_at), Some(tick_at)) if settle_at <= tick_at => self.settle(),
                (Some(_), None) => self.settle(),
                (_, Some(_)) => {
                    if let Some(due) = self.autoplay.fire(now) {
                        self.begin(Step::Advance, Trigger::Autoplay, due);
                    }
                }
                (None, None) => break,
            }
        }
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.machine.settle_deadline(), self.autoplay.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Current slide: wrapped in loop mode, clamped in bounded mode.
    pub fn index(&self) -> usize {
        self.machine.current(self.geometry.max_index())
    }

    /// Raw index, which may sit in the clone region mid-transition.
    pub fn raw_index(&self) -> isize {
        self.machine.index()
    }

    /// Highlighted pagination bullet.
    pub fn active_bullet(&self) -> usize {
        self.active_bullet
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    /// Whether the first layout happened.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resolved slides-per-view.
    pub fn slides_per_view(&self) -> usize {
        self.geometry.slides_per_view()
    }

    /// Width of each slide.
    pub fn slide_width(&self) -> Px {
        self.geometry.slide_width()
    }

    /// Width of the wrapper, clones included.
    pub fn wrapper_width(&self) -> Px {
        self.geometry.wrapper_width()
    }

    /// Offset of the current index as last rendered.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// Real and cloned slides.
    pub fn slide_set(&self) -> SlideSet {
        self.geometry.slides()
    }

    /// Current gesture state.
    pub fn drag(&self) -> DragState {
        self.drag.state()
    }

    /// Pending autoplay tick.
    pub fn autoplay_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    /// The config this slider was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the slider, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn begin(&mut self, step: Step, trigger: Trigger, now: Instant) -> bool {
        let Some(transition) =
            self.machine
                .request(step, self.geometry.max_index(), now, self.config.speed)
        else {
            return false;
        };
        trace!("{trigger:?} started transition to {}", transition.index);

        self.show_bullet(transition.bullet);
        self.surface.set_transition_duration(self.config.speed);
        self.render(transition.index);
        if matches!(trigger, Trigger::Button | Trigger::Bullet) {
            self.autoplay.reset(now);
        }
        if self.config.speed.is_zero() {
            self.settle();
        }
        true
    }

    fn settle(&mut self) {
        let Some(settled) = self.machine.settle(self.geometry.max_index()) else {
            return;
        };
        if settled.corrected {
            self.surface.set_transition_duration(Duration::ZERO);
            self.render(settled.index as isize);
        }
        self.show_bullet(settled.index);

        if settled.changed {
            debug!("settled on slide {}", settled.index);
            let slide = ActiveSlide {
                index: settled.index,
                wrapper_position: self.geometry.slides().real_position(settled.index),
            };
            if let Some(on_change) = &self.config.on_change {
                on_change.call(slide);
            }
        }
    }

    fn finish_drag(&mut self, now: Instant) {
        let committed = match self.drag.release() {
            DragRelease::Ignored => return,
            DragRelease::Advance => self.begin(Step::Advance, Trigger::Drag, now),
            DragRelease::Retreat => self.begin(Step::Retreat, Trigger::Drag, now),
            DragRelease::SnapBack => false,
        };
        if !committed {
            trace!("drag snapped back");
            self.surface.set_transition_duration(self.config.speed);
            self.render(self.machine.index());
        }
        self.autoplay.reset(now);
    }

    fn render(&mut self, index: isize) {
        if !self.geometry.is_laid_out() {
            return;
        }
        self.offset = self.geometry.offset_for(index);
        self.surface.set_wrapper_offset(self.offset);
    }

    fn show_bullet(&mut self, bullet: usize) {
        if bullet == self.active_bullet {
            return;
        }
        self.active_bullet = bullet;
        if self.surface.has_pagination() {
            self.surface.set_active_bullet(bullet);
        }
    }
}

impl<S: Surface> std::fmt::Debug for Slider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("index", &self.machine.index())
            .field("phase", &self.machine.phase())
            .field("offset", &self.offset)
            .field("active_bullet", &self.active_bullet)
            .field("geometry", &self.geometry)
            .field("drag", &self.drag.state())
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}
