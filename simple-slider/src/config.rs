//! Slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] with its setters and hand it to
//! [`Slider::new`](crate::Slider::new). The config is validated once and never
//! mutated afterwards.
//!
//! ```
//! use std::time::Duration;
//! use simple_slider::{Px, SliderConfig, SlidesPerView};
//!
//! let config = SliderConfig::default()
//!     .speed(Duration::from_millis(300))
//!     .autoplay(true)
//!     .slides_per_view(SlidesPerView::fixed(1).breakpoint(Px::new(768), 3));
//! assert!(config.validate(5).is_ok());
//! ```

use std::{collections::BTreeMap, time::Duration};

use derive_setters::Setters;

use crate::{ActiveSlide, Callback, CallbackWith, ConfigError, Px};

const DEFAULT_SPEED: Duration = Duration::from_millis(1_000);
const DEFAULT_DELAY: Duration = Duration::from_millis(6_000);
const DEFAULT_DRAG_THRESHOLD: Px = Px(100);
const DEFAULT_DRAG_SLACK: Px = Px(100);
/// Longest accepted `speed` or `delay`.
pub(crate) const MAX_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Breakpoint table mapping a minimum container width to a slide count.
///
/// The largest breakpoint not exceeding the container width wins. A width
/// below every breakpoint resolves to one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidesPerView {
    breakpoints: BTreeMap<Px, usize>,
}

impl SlidesPerView {
    /// One count for every width.
    pub fn fixed(count: usize) -> Self {
        Self {
            breakpoints: BTreeMap::from([(Px::ZERO, count)]),
        }
    }

    /// An empty table; every width resolves to one slide until breakpoints
    /// are added.
    pub fn empty() -> Self {
        Self {
            breakpoints: BTreeMap::new(),
        }
    }

    /// Adds or replaces the count used from `min_width` upwards.
    pub fn breakpoint(mut self, min_width: Px, count: usize) -> Self {
        self.breakpoints.insert(min_width, count);
        self
    }

    /// Resolves the count for a container width.
    pub fn resolve(&self, width: Px) -> usize {
        self.breakpoints
            .range(..=width)
            .next_back()
            .map(|(_, &count)| count)
            .unwrap_or(1)
    }

    /// Largest count across all breakpoints, at least 1.
    ///
    /// This is the number of clones placed on each side of the real slides
    /// in loop mode.
    pub fn max(&self) -> usize {
        self.breakpoints.values().copied().max().unwrap_or(1).max(1)
    }

    /// Iterates breakpoints in ascending width order.
    pub fn iter(&self) -> impl Iterator<Item = (Px, usize)> + '_ {
        self.breakpoints.iter().map(|(&width, &count)| (width, count))
    }
}

impl Default for SlidesPerView {
    fn default() -> Self {
        Self::fixed(1)
    }
}

/// Immutable slider configuration.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SliderConfig {
    /// Transition duration.
    pub speed: Duration,
    /// Pause between autoplay transitions. The autoplay interval is
    /// `delay + speed`.
    pub delay: Duration,
    /// Wrap around through cloned edge slides instead of stopping at the ends.
    pub loop_mode: bool,
    /// Follow pointer and touch drags.
    pub enable_drag: bool,
    /// Advance on a timer.
    pub autoplay: bool,
    /// Breakpoint table resolving how many slides are visible at once.
    pub slides_per_view: SlidesPerView,
    /// Drag distance that must be exceeded to commit a slide change.
    pub drag_threshold: Px,
    /// How far past the first or last real slide a loop-mode drag may pull
    /// the wrapper before it is finalized.
    pub drag_slack: Px,
    /// Fired once after the first layout.
    #[setters(skip)]
    pub on_init: Option<Callback>,
    /// Fired once per completed transition that changed the visible slide.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<ActiveSlide>>,
}

impl SliderConfig {
    /// Sets the `on_init` hook.
    pub fn on_init<F>(mut self, on_init: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_init = Some(Callback::new(on_init));
        self
    }

    /// Sets the `on_change` hook.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(ActiveSlide) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(on_change));
        self
    }

    /// Checks the config against the number of real slides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when there are no slides, a breakpoint
    /// resolves to zero slides, the drag distances are out of range, or
    /// `speed` or `delay` exceeds one day.
    ///
    /// In loop mode with drag enabled, `drag_slack` must be at least
    /// `drag_threshold`, or no drag could wrap past the first or last slide.
    pub fn validate(&self, slide_count: usize) -> Result<(), ConfigError> {
        if slide_count == 0 {
            return Err(ConfigError::NoSlides);
        }
        if let Some((breakpoint, _)) = self.slides_per_view.iter().find(|&(_, count)| count == 0) {
            return Err(ConfigError::ZeroSlidesPerView { breakpoint });
        }
        if self.drag_threshold < Px::ZERO {
            return Err(ConfigError::NegativeDragDistance {
                field: "threshold",
                value: self.drag_threshold,
            });
        }
        if self.drag_threshold == Px::ZERO {
            return Err(ConfigError::ZeroDragThreshold);
        }
        if self.drag_slack < Px::ZERO {
            return Err(ConfigError::NegativeDragDistance {
                field: "slack",
                value: self.drag_slack,
            });
        }
        if self.loop_mode && self.enable_drag && self.drag_slack < self.drag_threshold {
            return Err(ConfigError::SlackBelowThreshold {
                slack: self.drag_slack,
                threshold: self.drag_threshold,
            });
        }
        for (field, value) in [("speed", self.speed), ("delay", self.delay)] {
            if value > MAX_DURATION {
                return Err(ConfigError::DurationTooLong {
                    field,
                    value,
                    max: MAX_DURATION,
                });
            }
        }
        Ok(())
    }

    /// Interval between autoplay ticks.
    pub fn autoplay_interval(&self) -> Duration {
        self.delay.saturating_add(self.speed)
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            delay: DEFAULT_DELAY,
            loop_mode: true,
            enable_drag: true,
            autoplay: false,
            slides_per_view: SlidesPerView::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            drag_slack: DEFAULT_DRAG_SLACK,
            on_init: None,
            on_change: None,
        }
    }
}
