//! Configuration errors.

use std::time::Duration;

use thiserror::Error;

use crate::Px;

/// Why a [`SliderConfig`](crate::SliderConfig) was rejected at construction.
///
/// These indicate programmer error. Runtime variance such as a zero-width
/// container or a missing pagination element never produces an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The wrapper contains no slides.
    #[error("slider needs at least one slide")]
    NoSlides,
    /// A breakpoint resolves to zero slides per view.
    #[error("slides per view for breakpoint {breakpoint} must be at least 1")]
    ZeroSlidesPerView {
        /// Minimum width of the offending breakpoint.
        breakpoint: Px,
    },
    /// A zero drag threshold would commit every pointer jitter.
    #[error("drag threshold must be greater than zero")]
    ZeroDragThreshold,
    /// Loop-mode drags could never wrap past the first or last slide,
    /// because the travel window ends before the commit threshold is passed.
    #[error("drag slack {slack} must be at least the drag threshold {threshold}")]
    SlackBelowThreshold {
        /// Configured slack.
        slack: Px,
        /// Configured threshold.
        threshold: Px,
    },
    /// `speed` or `delay` is longer than the slider can schedule.
    #[error("{field} of {value:?} exceeds the maximum of {max:?}")]
    DurationTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Duration,
        /// Largest accepted value.
        max: Duration,
    },
    /// The drag threshold or slack is negative.
    #[error("drag {field} must not be negative, got {value}")]
    NegativeDragDistance {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Px,
    },
}
