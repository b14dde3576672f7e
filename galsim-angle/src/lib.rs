//! Angles and angular units for image simulation.
//!
//! `galsim-angle` provides a small, strongly typed model of plane angles:
//!
//! - An [`AngleUnit`] is the size of one unit in radians. Five are predefined: [`RADIANS`], [`DEGREES`],
//!   [`HOURS`], [`ARCMIN`] and [`ARCSEC`].
//! - An [`Angle`] is a value in radians. It is made by multiplying a number by a unit and read back by
//!   dividing by a unit.
//! - [`parse_unit`] turns unit names from configuration or command lines into units.
//!
//! # Quick start
//!
//! ```rust
//! use galsim_angle::{Angle, ARCMIN, DEGREES, HOURS, RADIANS};
//!
//! let theta = 90.0 * DEGREES;
//! assert_eq!(theta.rad(), theta / RADIANS);
//! assert!((theta / ARCMIN - 5400.0).abs() < 1e-9);
//!
//! let mut ra = 23.0 * HOURS;
//! ra += 2.0 * HOURS;
//! let ra = ra.wrap();
//! assert!((ra / HOURS - 1.0).abs() < 1e-12);
//!
//! let total: Angle = [10.0 * DEGREES, 20.0 * DEGREES].iter().sum();
//! assert!((total / DEGREES - 30.0).abs() < 1e-12);
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Units other than plane angles (no solid angles).
//! - Exact or arbitrary-precision arithmetic; everything is `f64`.
//! - Locale-aware formatting.
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Angle`] and [`AngleUnit`], the
//!   [`serde_with_unit`] helper and the TOML [`config`] loader.
//!
//! # Panics and errors
//!
//! Arithmetic never panics and never returns `Result`; IEEE-754 `NaN` and infinities propagate.
//! Parsing text is the only fallible operation and reports a [`ParseError`].

#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod parse;
mod unit;

#[cfg(feature = "serde")]
mod serde_support;

#[cfg(feature = "serde")]
pub mod config;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::{angles_from_values, values_in_unit, wrap_all, Angle};
pub use parse::{parse_angle, parse_unit, ParseError, ParseResult};
pub use unit::{AngleUnit, ARCMIN, ARCSEC, DEGREES, HOURS, RADIANS};

#[cfg(feature = "serde")]
pub use serde_support::serde_with_unit;
