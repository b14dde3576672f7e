//! Loading named angles from TOML configuration.
//!
//! A configuration is a flat table of names to angles. Each entry can be written in any form that
//! [`serde_with_unit`](crate::serde_with_unit) accepts:
//!
//! ```toml
//! pixel_scale = "0.27 arcsec"
//! position_angle = { value = 30, unit = "degrees" }
//! rotation = 0.5          # radians
//! ```

use crate::angle::Angle;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Named angles, ordered by name.
pub type AngleTable = BTreeMap<String, Angle>;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read angle configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse angle configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Deserialize)]
#[serde(transparent)]
struct AngleEntry(#[serde(with = "crate::serde_with_unit")] Angle);

/// Parses a TOML document of named angles.
///
/// # Errors
///
/// Returns [`ConfigError::Toml`] when the document is not valid TOML or an entry is not a valid
/// angle; unit-name problems are reported with the parser's message.
///
/// ```rust
/// use galsim_angle::config::load_angle_table;
/// use galsim_angle::DEGREES;
///
/// let table = load_angle_table(r#"beta = "45 deg""#).unwrap();
/// assert!((table["beta"] / DEGREES - 45.0).abs() < 1e-12);
/// ```
pub fn load_angle_table(text: &str) -> ConfigResult<AngleTable> {
    let entries: BTreeMap<String, AngleEntry> = toml::from_str(text)?;
    debug!("Loaded {} angle entries from configuration", entries.len());
    Ok(entries
        .into_iter()
        .map(|(name, AngleEntry(angle))| (name, angle))
        .collect())
}

/// Reads and parses a TOML file of named angles. See [`load_angle_table`].
pub fn load_angle_table_file(path: impl AsRef<Path>) -> ConfigResult<AngleTable> {
    let path = path.as_ref();
    debug!("Reading angle configuration from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_angle_table(&text)
}
