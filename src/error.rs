//! Error types for the solar power engine.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the engine's entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric input lies outside the domain the formulas are defined on.
    #[error("invalid {name} {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// A civil date or time that does not exist on the calendar.
    #[error("invalid time point {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidTimePoint {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },

    /// The sun is at the zenith or nadir, so its azimuth is undefined.
    #[error("azimuth undefined: sun at zenith or nadir (zenith {zenith}°)")]
    DegenerateGeometry { zenith: f64 },
}

impl Error {
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected,
        }
    }
}

/// Checks `value` lies in the closed interval `[min, max]`. NaN never does.
///
/// # Errors
/// Returns `InvalidParameter` naming `name` otherwise.
pub fn check_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, value, expected))
    }
}

pub fn check_latitude(latitude: f64) -> Result<()> {
    check_range("latitude", latitude, -90.0, 90.0, "between -90° and 90°")
}

pub fn check_longitude(longitude: f64) -> Result<()> {
    check_range("longitude", longitude, -180.0, 180.0, "between -180° and 180°")
}

pub fn check_meridian(meridian: f64) -> Result<()> {
    check_range(
        "standard meridian",
        meridian,
        -180.0,
        180.0,
        "between -180° and 180°",
    )
}

pub fn check_day_of_year(day_of_year: i32) -> Result<()> {
    if (1..=366).contains(&day_of_year) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "day of year",
            f64::from(day_of_year),
            "between 1 and 366",
        ))
    }
}

/// Checks a sampling interval in minutes divides a day evenly.
pub fn check_interval(interval_minutes: i32) -> Result<()> {
    if interval_minutes > 0 && 1440 % interval_minutes == 0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "sample interval",
            f64::from(interval_minutes),
            "minutes in (0, 1440] dividing a day evenly",
        ))
    }
}

pub fn check_zenith(zenith: f64) -> Result<()> {
    check_range("zenith angle", zenith, 0.0, 180.0, "between 0° and 180°")
}

/// Checks `value` is finite and not negative.
pub fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    check_range(name, value, 0.0, f64::MAX, "finite and >= 0")
}

pub fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    check_range(name, value, 0.0, 1.0, "between 0 and 1")
}
