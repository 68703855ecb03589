//! Headless slide-position state machine for image and content carousels.
//!
//! `simple-slider` owns everything about a carousel that has invariants: the
//! current index, infinite looping through cloned edge slides, bounded
//! paging, drag gestures, autoplay and resize handling. Drawing is left to a
//! host that implements [`Surface`]; the slider only tells it which
//! transition duration, wrapper offset and active bullet to show.
//!
//! # Components
//!
//! - [`geometry`] turns an index into a wrapper offset.
//! - [`index`] is the idle/transitioning state machine.
//! - [`drag`] turns gestures into live offsets or discrete steps.
//! - [`autoplay`] advances on a timer.
//! - [`Slider`] wires them to a [`Surface`].
//!
//! # Time
//!
//! The slider never reads a clock. Every input that may schedule work takes
//! the current [`Instant`], and the host calls [`Slider::poll`] when
//! [`Slider::next_deadline`] passes. Tests drive it with a simulated clock.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use simple_slider::{Instant, Px, Slider, SliderConfig, SlidesPerView, Surface};
//!
//! struct Log(Vec<String>);
//!
//! impl Surface for Log {
//!     fn set_transition_duration(&mut self, duration: Duration) {
//!         self.0.push(format!("duration {}ms", duration.as_millis()));
//!     }
//!     fn set_wrapper_offset(&mut self, offset: Px) {
//!         self.0.push(format!("offset {offset}"));
//!     }
//!     fn set_active_bullet(&mut self, index: usize) {
//!         self.0.push(format!("bullet {index}"));
//!     }
//! }
//!
//! let t0 = Instant::now();
//! let config = SliderConfig::default()
//!     .loop_mode(false)
//!     .slides_per_view(SlidesPerView::fixed(2));
//! let mut slider = Slider::new(config, 5, Px::new(600), Log(Vec::new()), t0)?;
//! slider.on_bullet_clicked(4, t0);
//! slider.poll(t0 + Duration::from_secs(1));
//! assert_eq!(slider.index(), 3);
//! assert_eq!(slider.offset(), Px::new(900));
//! # Ok::<(), simple_slider::ConfigError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod autoplay;
mod callback;
mod config;
pub mod drag;
mod error;
pub mod geometry;
pub mod index;
mod px;
mod slider;
mod slides;
mod surface;

#[cfg(test)]
mod test;

pub use callback::{Callback, CallbackWith, Slot};
pub use config::{SliderConfig, SlidesPerView};
pub use error::ConfigError;
pub use px::Px;
pub use slider::Slider;
pub use slides::{ActiveSlide, SlidePosition, SlideSet};
pub use surface::Surface;

/// Monotonic instant used for every deadline.
#[cfg(not(target_family = "wasm"))]
pub use std::time::Instant;
/// Monotonic instant used for every deadline.
#[cfg(target_family = "wasm")]
pub use web_time::Instant;
