//! Serde support for [`Angle`] and [`AngleUnit`].
//!
//! * `Angle` serializes compactly as its value in radians.
//! * `AngleUnit` serializes as its name (`"degrees"`, ...) when it is one of the predefined units and as
//!   its scale in radians otherwise. It deserializes from either form; names go through
//!   [`parse_unit`](crate::parse_unit).
//! * [`serde_with_unit`] is an opt-in, self-describing form for configuration files.

use crate::angle::Angle;
use crate::parse::{parse_angle, parse_unit};
use crate::unit::{AngleUnit, RADIANS};
use core::fmt;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rad().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let radians = f64::deserialize(deserializer)?;
        Ok(radians * RADIANS)
    }
}

impl Serialize for AngleUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_f64(self.value()),
        }
    }
}

impl<'de> Deserialize<'de> for AngleUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnitVisitor;

        impl<'de> Visitor<'de> for UnitVisitor {
            type Value = AngleUnit;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an angle unit name or a scale in radians")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<AngleUnit, E> {
                parse_unit(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<AngleUnit, E> {
                Ok(AngleUnit::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<AngleUnit, E> {
                Ok(AngleUnit::new(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<AngleUnit, E> {
                Ok(AngleUnit::new(v as f64))
            }
        }

        deserializer.deserialize_any(UnitVisitor)
    }
}

/// Serde helper module for angles that carry their unit.
///
/// Use this with the `#[serde(with = "...")]` attribute for configuration files and other
/// human-edited data.
///
/// # Examples
///
/// ```rust
/// use galsim_angle::{Angle, DEGREES};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Shear {
///     #[serde(with = "galsim_angle::serde_with_unit")]
///     beta: Angle,  // {"value": 0.523..., "unit": "radians"}
///
///     theta: Angle, // 0.523... (compact)
/// }
///
/// let shear: Shear = serde_json::from_str(r#"{"beta": "30 deg", "theta": 0.5}"#).unwrap();
/// assert!((shear.beta / DEGREES - 30.0).abs() < 1e-12);
/// ```
pub mod serde_with_unit {
    use super::*;
    use serde::de::MapAccess;
    use serde::ser::SerializeStruct;

    /// Serializes an angle as a struct with `value` (in radians) and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 1.5707963267948966, "unit": "radians"}
    /// ```
    pub fn serialize<S>(angle: &Angle, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Angle", 2)?;
        state.serialize_field("value", &angle.rad())?;
        state.serialize_field("unit", "radians")?;
        state.end()
    }

    /// Deserializes an angle from any of:
    ///
    /// * a struct with `value` and optional `unit` fields (`unit` defaults to radians);
    /// * an angle string such as `"45 deg"`;
    /// * a bare number, taken as radians.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Angle, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct AngleVisitor;

        impl<'de> Visitor<'de> for AngleVisitor {
            type Value = Angle;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an angle as {value, unit}, \"<value> <unit>\" or radians")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Angle, E> {
                Ok(v * RADIANS)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Angle, E> {
                Ok(v as f64 * RADIANS)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Angle, E> {
                Ok(v as f64 * RADIANS)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Angle, E> {
                parse_angle(v).map_err(E::custom)
            }

            fn visit_map<V>(self, mut map: V) -> Result<Angle, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = match unit {
                    Some(name) => parse_unit(&name).map_err(de::Error::custom)?,
                    None => RADIANS,
                };

                Ok(value * unit)
            }
        }

        deserializer.deserialize_any(AngleVisitor)
    }
}
