//! Angular unit type and the predefined units.

use core::f64::consts::PI;
use core::fmt::{self, Display, Formatter};

/// A unit of angular measure.
///
/// An `AngleUnit` is nothing more than the size of one unit *expressed in radians*. Radians are the
/// canonical unit: `RADIANS.value() == 1.0`, and every other unit states how many radians one of it is.
///
/// New units can be made ad hoc; there is no registry:
///
/// ```rust
/// use galsim_angle::AngleUnit;
/// use core::f64::consts::PI;
///
/// let gradian = AngleUnit::new(2.0 * PI / 400.0);
/// let right = 100.0 * gradian;
/// assert!((right.rad() - PI / 2.0).abs() < 1e-12);
/// ```
///
/// # Invariants
///
/// None are enforced. The scale should be finite and non-zero; a zero scale makes every conversion
/// into this unit produce `±∞` or `NaN`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct AngleUnit(f64);

/// One radian.
pub const RADIANS: AngleUnit = AngleUnit::new(1.0);
/// One degree (`π/180` radians).
pub const DEGREES: AngleUnit = AngleUnit::new(PI / 180.0);
/// One hour of right ascension (`π/12` radians, i.e. 15 degrees).
pub const HOURS: AngleUnit = AngleUnit::new(PI / 12.0);
/// One arcminute (`1/60` degree).
pub const ARCMIN: AngleUnit = AngleUnit::new(PI / 180.0 / 60.0);
/// One arcsecond (`1/3600` degree).
pub const ARCSEC: AngleUnit = AngleUnit::new(PI / 180.0 / 3600.0);

impl AngleUnit {
    /// Creates a unit whose size is `scale_to_radians` radians.
    ///
    /// No validation is performed.
    #[inline]
    pub const fn new(scale_to_radians: f64) -> Self {
        Self(scale_to_radians)
    }

    /// Returns the number of radians in one of this unit.
    ///
    /// ```rust
    /// use galsim_angle::{HOURS, RADIANS};
    /// assert_eq!(RADIANS.value(), 1.0);
    /// assert!((HOURS.value() - core::f64::consts::PI / 12.0).abs() < 1e-15);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the canonical name for the five predefined units, or `None` for ad hoc ones.
    ///
    /// The names are the ones accepted back by [`crate::parse_unit`].
    pub fn name(self) -> Option<&'static str> {
        if self == RADIANS {
            Some("radians")
        } else if self == DEGREES {
            Some("degrees")
        } else if self == HOURS {
            Some("hours")
        } else if self == ARCMIN {
            Some("arcmin")
        } else if self == ARCSEC {
            Some("arcsec")
        } else {
            None
        }
    }
}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "AngleUnit({:?})", self.0),
        }
    }
}
