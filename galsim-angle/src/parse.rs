//! Reading units and angles from text.
//!
//! This is the only place in the crate where errors originate. Unit names are matched
//! case-insensitively by *prefix*, so `"deg"`, `"Degrees"` and even `"degrades"` all mean degrees.

use crate::angle::Angle;
use crate::unit::{AngleUnit, ARCMIN, ARCSEC, DEGREES, HOURS, RADIANS};
use log::trace;
use std::num::ParseFloatError;
use std::str::FromStr;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for parsing units and angles from text
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown Angle unit: {0}")]
    UnknownUnit(String),

    #[error("Missing angle unit in '{0}'")]
    MissingUnit(String),

    #[error("Invalid angle value in '{input}': {source}")]
    InvalidValue {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

// Checked in order; the first matching prefix wins.
const UNIT_PREFIXES: [(&str, AngleUnit); 6] = [
    ("rad", RADIANS),
    ("deg", DEGREES),
    ("hour", HOURS),
    ("hr", HOURS),
    ("arcmin", ARCMIN),
    ("arcsec", ARCSEC),
];

/// Converts a unit name into the corresponding predefined [`AngleUnit`].
///
/// Leading and trailing whitespace is ignored and matching is ASCII case-insensitive. A name matches
/// when it *starts with* one of `rad`, `deg`, `hour`, `hr`, `arcmin` or `arcsec`, tried in that order.
///
/// # Errors
///
/// Returns [`ParseError::UnknownUnit`] holding `name` exactly as given when nothing matches.
///
/// ```rust
/// use galsim_angle::{parse_unit, ParseError, DEGREES, HOURS};
///
/// assert_eq!(parse_unit("  Degrees ").unwrap(), DEGREES);
/// assert_eq!(parse_unit("hr").unwrap(), HOURS);
/// assert_eq!(
///     parse_unit("furlongs"),
///     Err(ParseError::UnknownUnit("furlongs".to_string()))
/// );
/// ```
pub fn parse_unit(name: &str) -> ParseResult<AngleUnit> {
    let normalized = name.trim().to_ascii_lowercase();
    for (prefix, unit) in UNIT_PREFIXES {
        if normalized.starts_with(prefix) {
            trace!("Resolved angle unit '{}' via prefix '{}'", name, prefix);
            return Ok(unit);
        }
    }
    Err(ParseError::UnknownUnit(name.to_string()))
}

/// Parses an angle written as `"<value> <unit>"`, e.g. `"45 deg"` or `"-1.5 hours"`.
///
/// The text is split at its last run of whitespace. The left part must parse as an `f64` and the
/// right part as a unit name (see [`parse_unit`]).
///
/// # Errors
///
/// * [`ParseError::MissingUnit`] when there is no whitespace-separated unit.
/// * [`ParseError::InvalidValue`] when the number does not parse.
/// * [`ParseError::UnknownUnit`] when the unit does not parse.
///
/// ```rust
/// use galsim_angle::{parse_angle, DEGREES};
/// let theta = parse_angle("450 degrees").unwrap().wrap();
/// assert!((theta / DEGREES - 90.0).abs() < 1e-12);
/// ```
pub fn parse_angle(text: &str) -> ParseResult<Angle> {
    let (value, unit) = text
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| ParseError::MissingUnit(text.to_string()))?;

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|source| ParseError::InvalidValue {
            input: text.to_string(),
            source,
        })?;
    let unit = parse_unit(unit)?;

    Ok(value * unit)
}

impl FromStr for AngleUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit(s)
    }
}

impl FromStr for Angle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_angle(s)
    }
}
