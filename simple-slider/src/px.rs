//! Pixel units for slide geometry.
//!
//! Every width and wrapper offset the slider computes is expressed in
//! [`Px`], a whole number of device pixels. Offsets are positive distances
//! the wrapper is translated to the left, so `Px(300)` renders as
//! `translate3d(-300px, 0, 0)` on a DOM host.
//!
//! # Example
//!
//! ```
//! use simple_slider::Px;
//!
//! let container = Px::new(1000);
//! let slide = container.div_round(3);
//! assert_eq!(slide, Px::new(333));
//! assert_eq!(slide * 2usize, Px::new(666));
//! ```

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A horizontal pixel value.
///
/// Negative values are allowed: a drag can pull the wrapper past its first
/// slide, and drag deltas are signed.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a pixel value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw integer value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the magnitude as an unsigned value.
    ///
    /// ```
    /// use simple_slider::Px;
    ///
    /// assert_eq!(Px::new(-101).abs(), 101);
    /// ```
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Returns `true` for values strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Creates a value from an `f64` rounded half away from zero, clamping
    /// into the `i32` range.
    pub fn round_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped = value
            .round()
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX));
        Px(clamped as i32)
    }

    /// Divides by a count and rounds to the nearest pixel.
    ///
    /// A zero divisor yields [`Px::ZERO`] instead of panicking.
    pub fn div_round(self, divisor: usize) -> Self {
        if divisor == 0 {
            return Px::ZERO;
        }
        Px::round_from_f64(f64::from(self.0) / divisor as f64)
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Mul<usize> for Px {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self::Output {
        let product = i64::from(self.0).saturating_mul(i64::try_from(rhs).unwrap_or(i64::MAX));
        Px(product.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl std::iter::Sum for Px {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Px::ZERO, |acc, px| acc + px)
    }
}

impl<'a> std::iter::Sum<&'a Px> for Px {
    fn sum<I: Iterator<Item = &'a Px>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}
