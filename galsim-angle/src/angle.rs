//! The [`Angle`] type and its arithmetic.
//!
//! # Design overview
//!
//! * **Storage:** an `Angle` always holds radians. The unit a value was written in is applied once, at
//!   construction (`value * unit`), and asked for again only on the way out (`angle / unit`).
//! * **Algebra:** angles add and subtract, scale by plain numbers, and divide by an [`AngleUnit`] to give a
//!   plain number.
//! * **Wrapping:** [`Angle::wrap`] folds any angle into `[-π, π)`.
//!
//! There is no `Angle * Angle` or `Angle / Angle`. Such expressions do not compile:
//!
//! ```compile_fail
//! use galsim_angle::DEGREES;
//! let a = 30.0 * DEGREES;
//! let _squared = a * a;
//! ```
//!
//! ```compile_fail
//! use galsim_angle::DEGREES;
//! let a = 30.0 * DEGREES;
//! let _ratio = a / (10.0 * DEGREES);
//! ```
//!
//! ## Edge cases
//!
//! Everything follows IEEE-754 `f64` semantics. Dividing by a zero-scale unit yields `±∞` or `NaN`, and
//! wrapping `NaN` or `±∞` yields `NaN`. Nothing here panics or returns an error.
//!
//! ## Examples
//!
//! ```rust
//! use galsim_angle::{ARCSEC, DEGREES, HOURS};
//!
//! let pixel = 0.27 * ARCSEC;
//! let ra = 13.4 * HOURS;
//! let dec = -32.0 * DEGREES;
//!
//! assert!((pixel / ARCSEC - 0.27).abs() < 1e-12);
//! assert!((ra / DEGREES - 201.0).abs() < 1e-12);
//! assert!(dec.rad() < 0.0);
//! ```

use crate::unit::{AngleUnit, RADIANS};
use core::f64::consts::{PI, TAU};
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::Sum;
use core::ops::*;

/// An angle, stored in radians.
///
/// Build one by multiplying a number by an [`AngleUnit`] (or with [`Angle::new`]), read it back by dividing
/// by a unit (or with [`Angle::rad`]).
///
/// Comparison is on the stored radians, so `0` and `2π` compare unequal; [`wrap`](Angle::wrap) both sides
/// first when rotational equivalence is what matters.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// Creates an angle of `value` units. Same as `value * unit`.
    ///
    /// ```rust
    /// use galsim_angle::{Angle, DEGREES};
    /// let phi = Angle::new(90.0, DEGREES);
    /// assert_eq!(phi, 90.0 * DEGREES);
    /// ```
    #[inline]
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self(value * unit.value())
    }

    /// Returns the angle in radians.
    ///
    /// Equal to `self / RADIANS` for every angle, without performing the division by one.
    ///
    /// ```rust
    /// use galsim_angle::{DEGREES, RADIANS};
    /// let theta = 90.0 * DEGREES;
    /// assert_eq!(theta.rad(), theta / RADIANS);
    /// ```
    #[inline]
    pub const fn rad(self) -> f64 {
        self.0
    }

    /// Returns the angle expressed as a number of `unit`. Same as `self / unit`.
    ///
    /// A zero-scale unit gives `±∞` (or `NaN` for a zero angle).
    #[inline]
    pub fn div_unit(self, unit: AngleUnit) -> f64 {
        self.0 / unit.value()
    }

    /// Wraps the angle into `[-π, π)`.
    ///
    /// The result represents the same direction modulo `2π`. Angles already in range come back unchanged,
    /// so wrapping is idempotent.
    ///
    /// ```rust
    /// use galsim_angle::DEGREES;
    /// let theta = (450.0 * DEGREES).wrap();
    /// assert!((theta / DEGREES - 90.0).abs() < 1e-12);
    /// ```
    pub fn wrap(self) -> Self {
        let r = self.0;
        if (-PI..PI).contains(&r) {
            return self;
        }
        let mut y = r - TAU * ((r + PI) / TAU).floor();
        // rounding in the fold can land exactly on either edge
        if y >= PI {
            y -= TAU;
        } else if y < -PI {
            y += TAU;
        }
        Self(y)
    }

    /// Absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul<AngleUnit> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: AngleUnit) -> Angle {
        Angle::new(self, rhs)
    }
}

impl Div<AngleUnit> for Angle {
    type Output = f64;
    #[inline]
    fn div(self, rhs: AngleUnit) -> f64 {
        self.div_unit(rhs)
    }
}

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl MulAssign<f64> for Angle {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl DivAssign<f64> for Angle {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        -1.0 * self
    }
}

impl Sum for Angle {
    fn sum<I: Iterator<Item = Angle>>(iter: I) -> Self {
        iter.fold(Angle::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Angle> for Angle {
    fn sum<I: Iterator<Item = &'a Angle>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text forms
// ─────────────────────────────────────────────────────────────────────────────

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} radians", self.rad())
    }
}

/// Renders as an expression that rebuilds the angle: `"<value> * radians"`.
impl Debug for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} * radians", self.rad())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Elementwise helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Builds one angle per value, all in the same unit.
///
/// ```rust
/// use galsim_angle::{angles_from_values, values_in_unit, ARCMIN, DEGREES};
/// let angles = angles_from_values(&[30.0, 60.0], ARCMIN);
/// let degrees = values_in_unit(&angles, DEGREES);
/// assert!((degrees[0] - 0.5).abs() < 1e-12);
/// assert!((degrees[1] - 1.0).abs() < 1e-12);
/// ```
pub fn angles_from_values(values: &[f64], unit: AngleUnit) -> Vec<Angle> {
    values.iter().map(|&v| v * unit).collect()
}

/// Expresses each angle as a number of `unit`.
pub fn values_in_unit(angles: &[Angle], unit: AngleUnit) -> Vec<f64> {
    if unit == RADIANS {
        return angles.iter().map(|a| a.rad()).collect();
    }
    angles.iter().map(|&a| a / unit).collect()
}

/// Wraps every angle of the slice into `[-π, π)` in place.
pub fn wrap_all(angles: &mut [Angle]) {
    for angle in angles.iter_mut() {
        *angle = angle.wrap();
    }
}
