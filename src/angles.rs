use std::f64::consts::PI;

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{SiteLocation, SolarAngles, TimePoint};

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Angular frequency of the yearly Fourier series, `2π/366`.
pub const YEAR_ANGLE: f64 = 2.0 * PI / 366.0;

/// `sin θz` below this counts as sun at zenith or nadir.
const DEGENERATE_SIN_ZENITH: f64 = 1e-9;

// (constant, [cos k=1..3], [sin k=1..3])
const DECLINATION_SERIES: (f64, [f64; 3], [f64; 3]) = (
    0.33281,
    [-22.9840, -0.3499, -0.1398],
    [3.78720, 0.03205, 0.0717],
);

const EQUATION_OF_TIME_SERIES: (f64, [f64; 3], [f64; 3]) = (
    0.00037,
    [0.43177, -3.1650, 0.07272],
    [-7.3764, -9.3893, -0.24498],
);

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

/// Builds a [`TimePoint`], rejecting dates and times that do not exist.
pub fn time_point(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<TimePoint> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(Error::InvalidTimePoint {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
}

fn fourier_series(n: i32, (c0, cos_terms, sin_terms): (f64, [f64; 3], [f64; 3])) -> f64 {
    let mut sum = c0;
    for (k, (a, b)) in cos_terms.iter().zip(sin_terms).enumerate() {
        let x = YEAR_ANGLE * (k + 1) as f64 * n as f64;
        sum += a * x.cos() + b * x.sin();
    }
    sum
}

/// Solar declination in degrees for day-of-year `n` (1..=366).
pub fn solar_declination(n: i32) -> f64 {
    fourier_series(n, DECLINATION_SERIES)
}

/// Equation of time in minutes for day-of-year `n` (1..=366).
pub fn equation_of_time(n: i32) -> f64 {
    fourier_series(n, EQUATION_OF_TIME_SERIES)
}

/// True solar time in hours for a civil clock reading.
pub fn true_solar_time(time: &TimePoint, longitude: f64, standard_meridian: f64, eot: f64) -> f64 {
    let clock_hours =
        time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;
    clock_hours + (standard_meridian - longitude) / DEGREES_PER_HOUR + eot / 60.0
}

/// Hour angle in radians; zero at true solar noon, negative in the morning.
///
/// Solar times outside [0, 24) wrap onto the same day, so the result always
/// lies in [-π, π).
pub fn hour_angle(solar_time: f64) -> f64 {
    let omega = PI * (solar_time - 12.0) / 12.0;
    (omega + PI).rem_euclid(2.0 * PI) - PI
}

fn sin_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * hour_angle.cos()
}

/// Zenith angle in degrees. `hour_angle` is radians.
pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let cos_zenith = sin_altitude(latitude, declination, hour_angle);
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

/// Altitude in degrees, computed directly rather than as `90 - zenith`.
pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let sin_alt = sin_altitude(latitude, declination, hour_angle);
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

/// Hour angle (radians) at which the sun crosses the east-west line,
/// `arccos(tan δ / tan φ)`.
///
/// `None` when `|δ| >= |φ|`: the sun then stays on one side of the
/// east-west line all day.
pub fn east_west_hour_angle(latitude: f64, declination: f64) -> Option<f64> {
    if declination.abs() >= latitude.abs() {
        return None;
    }
    let ratio = deg_to_rad(declination).tan() / deg_to_rad(latitude).tan();
    if ratio.is_finite() && ratio.abs() <= 1.0 {
        Some(ratio.acos())
    } else {
        None
    }
}

/// Sunset hour angle in radians, `arccos(-tan φ · tan δ)`.
///
/// Clamped to `0` during polar night and `π` under the midnight sun, so
/// `2·ωs` is always the length of the day in radians.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let cos_ws = -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan();
    cos_ws.clamp(-1.0, 1.0).acos()
}

/// First-stage azimuth `arcsin(cos δ · sin ω / sin θz)` in degrees.
///
/// # Errors
/// `DegenerateGeometry` when the sun is at the zenith or nadir.
pub fn modified_azimuth(declination: f64, hour_angle: f64, zenith: f64) -> Result<f64> {
    let sin_zenith = deg_to_rad(zenith).sin();
    if sin_zenith.abs() < DEGENERATE_SIN_ZENITH {
        return Err(Error::DegenerateGeometry { zenith });
    }
    let sin_az = deg_to_rad(declination).cos() * hour_angle.sin() / sin_zenith;
    Ok(rad_to_deg(sin_az.clamp(-1.0, 1.0).asin()))
}

fn sign_coefficient(non_negative: bool) -> f64 {
    if non_negative {
        1.0
    } else {
        -1.0
    }
}

/// Solar azimuth in degrees, south-origin, negative east, in [-180, 180].
///
/// A sun at the zenith or nadir has no azimuth; 0° is returned for it.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64, zenith: f64) -> f64 {
    let gamma = match modified_azimuth(declination, hour_angle, zenith) {
        Ok(gamma) => gamma,
        Err(err) => {
            debug!("{err}; using azimuth 0°");
            return 0.0;
        }
    };

    // C1 flips once the sun is past the east-west line
    let c1 = match east_west_hour_angle(latitude, declination) {
        Some(ew) => sign_coefficient(hour_angle.abs() < ew),
        None => 1.0,
    };
    let c2 = sign_coefficient(latitude - declination >= 0.0);
    let c3 = sign_coefficient(hour_angle >= 0.0);

    c1 * c2 * gamma + 90.0 * c3 * (1.0 - c1 * c2)
}

/// Converts a south-origin azimuth to compass bearing (0° north, clockwise).
pub fn compass_azimuth(azimuth: f64) -> f64 {
    normalize_angle(azimuth + 180.0)
}

/// Standard meridian in degrees implied by a UTC offset in seconds.
///
/// Offsets beyond ±12 h (UTC+13, UTC+14) fold back across the antimeridian.
pub fn meridian_from_offset(offset_seconds: i32) -> f64 {
    let meridian = offset_seconds as f64 / 240.0;
    if meridian > 180.0 {
        meridian - 360.0
    } else if meridian < -180.0 {
        meridian + 360.0
    } else {
        meridian
    }
}

fn angles_unchecked(site: &SiteLocation, time: &TimePoint) -> SolarAngles {
    let n = day_of_year(time.date());
    let decl = solar_declination(n);
    let eot = equation_of_time(n);
    let tsv = true_solar_time(time, site.longitude, site.standard_meridian, eot);
    let omega = hour_angle(tsv);
    let zenith = solar_zenith_angle(site.latitude, decl, omega);
    let altitude = solar_altitude(site.latitude, decl, omega);
    let azimuth = solar_azimuth(site.latitude, decl, omega, zenith);
    trace!("{time}: decl={decl:.3} eot={eot:.3} omega={omega:.4} zenith={zenith:.3} azimuth={azimuth:.3}");
    SolarAngles {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        solar_time: tsv,
        hour_angle: omega,
        zenith,
        altitude,
        azimuth,
    }
}

/// Sun position for a civil local time at `site`.
///
/// # Errors
/// `InvalidParameter` if the site's coordinates are out of range.
pub fn solar_angles(site: &SiteLocation, time: &TimePoint) -> Result<SolarAngles> {
    site.validate()?;
    Ok(angles_unchecked(site, time))
}

/// Sun position for a zoned timestamp; the standard meridian follows the
/// timestamp's UTC offset.
pub fn solar_angles_zoned<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> Result<SolarAngles> {
    let meridian = meridian_from_offset(dt.offset().fix().local_minus_utc());
    let site = SiteLocation::new(latitude, longitude, meridian);
    solar_angles(&site, &dt.naive_local())
}
