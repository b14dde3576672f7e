//! Integration-level smoke tests for the public `galsim_angle` API.

use galsim_angle::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::PI;

#[test]
fn smoke_test_construction() {
    let theta = 90.0 * DEGREES;
    assert_abs_diff_eq!(theta.rad(), 1.5707963267948966, epsilon = 1e-15);
    assert_eq!(theta.to_string(), "1.5707963267948966 radians");
    assert_eq!(format!("{:?}", theta), "1.5707963267948966 * radians");
}

#[test]
fn smoke_test_wrap() {
    let theta = (450.0 * DEGREES).wrap();
    assert_abs_diff_eq!(theta / DEGREES, 90.0, epsilon = 1e-12);
}

#[test]
fn smoke_test_parse() {
    assert_eq!(parse_unit("DEG"), Ok(DEGREES));
    assert_eq!(parse_unit("deg"), Ok(DEGREES));
    assert_eq!(parse_unit("  Degrees "), Ok(DEGREES));
    assert_eq!(parse_unit("degrades"), Ok(DEGREES));
    assert_eq!(
        parse_unit("furlongs"),
        Err(ParseError::UnknownUnit("furlongs".to_string()))
    );
}

#[test]
fn pixel_scale_conversion() {
    // 0.27 arcsec pixels, 4096 pixels across
    let pixel = 0.27 * ARCSEC;
    let field = pixel * 4096.0;
    assert_relative_eq!(field / ARCMIN, 18.432, max_relative = 1e-12);
}

#[test]
fn right_ascension_difference_across_zero() {
    // 23h30m and 0h30m are one hour apart the short way
    let a = 23.5 * HOURS;
    let b = 0.5 * HOURS;
    let diff = (b - a).wrap();
    assert_abs_diff_eq!(diff / HOURS, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!((a - b).wrap() / HOURS, -1.0, epsilon = 1e-12);
}

#[test]
fn custom_unit() {
    let gradian = AngleUnit::new(2.0 * PI / 400.0);
    let right = 100.0 * gradian;
    assert_abs_diff_eq!(right / DEGREES, 90.0, epsilon = 1e-12);
    assert_eq!(gradian.to_string(), format!("AngleUnit({:?})", 2.0 * PI / 400.0));
}

#[test]
fn units_from_command_line_style_input() {
    let args = ["12.5", "arcmin"];
    let value: f64 = args[0].parse().unwrap();
    let unit: AngleUnit = args[1].parse().unwrap();
    assert_abs_diff_eq!((value * unit) / ARCSEC, 750.0, epsilon = 1e-9);
}

#[test]
fn elementwise_over_collections() {
    let decs = angles_from_values(&[-30.0, 0.0, 30.0, 60.0], DEGREES);
    let offset = 15.0 * ARCMIN;
    let shifted: Vec<Angle> = decs.iter().map(|&d| d + offset).collect();
    let values = values_in_unit(&shifted, DEGREES);
    for (orig, new) in [-30.0, 0.0, 30.0, 60.0].iter().zip(values) {
        assert_abs_diff_eq!(new - orig, 0.25, epsilon = 1e-12);
    }
}

#[cfg(feature = "serde")]
#[test]
fn config_table_roundtrip_through_toml() {
    let table = config::load_angle_table(
        r#"
        dec = "-32 degrees"
        ra = { value = 13.4, unit = "hours" }
        "#,
    )
    .unwrap();
    assert_abs_diff_eq!(table["dec"] / DEGREES, -32.0, epsilon = 1e-12);
    assert_abs_diff_eq!(table["ra"] / HOURS, 13.4, epsilon = 1e-12);

    let compact = toml::to_string(&table).unwrap();
    let back: std::collections::BTreeMap<String, Angle> = toml::from_str(&compact).unwrap();
    assert_eq!(back, table);
}

#[cfg(feature = "serde")]
#[test]
fn config_table_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "beta = \"0.5 rad\"").unwrap();
    let table = config::load_angle_table_file(file.path()).unwrap();
    assert_eq!(table["beta"].rad(), 0.5);
}
