use chrono::{Datelike, Duration, NaiveDate};
use log::info;
use rayon::prelude::*;

use crate::angles;
use crate::error::{self, Error, Result};
use crate::irradiance;
use crate::types::{
    DailyAstronomy, DaySimulation, DaySummary, SampleResult, SimulationConfig, SunriseSunset,
    TimePoint,
};

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    1440 / interval_minutes
}

/// Sunrise and sunset in true-solar-time minutes, symmetric about solar noon.
///
/// Polar night collapses both to noon; the midnight sun spans the whole day.
pub fn estimate_sunrise_sunset(latitude: f64, day_of_year: i32) -> SunriseSunset {
    let ws = angles::sunset_hour_angle(latitude, angles::solar_declination(day_of_year));
    let half_day_minutes = angles::rad_to_deg(ws) / angles::DEGREES_PER_HOUR * 60.0;
    SunriseSunset {
        sunrise: (720.0 - half_day_minutes).round() as i32,
        sunset: (720.0 + half_day_minutes).round() as i32,
    }
}

/// Civil time points covering `date` from midnight, one per interval.
///
/// # Errors
/// `InvalidParameter` unless the interval divides a day evenly.
pub fn day_time_points(date: NaiveDate, interval_minutes: i32) -> Result<Vec<TimePoint>> {
    error::check_interval(interval_minutes)?;
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    Ok((0..intervals_per_day(interval_minutes))
        .map(|i| midnight + Duration::minutes(i64::from(i * interval_minutes)))
        .collect())
}

/// Runs the full pipeline for a single time point.
pub fn evaluate_sample(config: &SimulationConfig, time: TimePoint) -> Result<SampleResult> {
    let solar = angles::solar_angles(&config.site, &time)?;
    let irradiance =
        irradiance::clear_sky_irradiance(solar.zenith, solar.day_of_year, &config.clear_sky)?;
    let (plane_of_array, power) = irradiance::plane_of_array_power(
        &irradiance,
        solar.zenith,
        solar.azimuth,
        &config.panel,
    )?;
    Ok(SampleResult {
        time,
        angles: solar,
        irradiance,
        plane_of_array,
        power,
    })
}

/// Evaluates each time point in order on the calling thread.
pub fn simulate(config: &SimulationConfig, times: &[TimePoint]) -> Result<Vec<SampleResult>> {
    config.validate()?;
    info!("simulating {} samples", times.len());
    times
        .iter()
        .map(|&time| evaluate_sample(config, time))
        .collect()
}

/// Like [`simulate`], spreading samples across the rayon pool. Results keep
/// the input order.
pub fn simulate_parallel(
    config: &SimulationConfig,
    times: &[TimePoint],
) -> Result<Vec<SampleResult>> {
    config.validate()?;
    info!("simulating {} samples in parallel", times.len());
    times
        .par_iter()
        .map(|&time| evaluate_sample(config, time))
        .collect()
}

fn summarize(
    config: &SimulationConfig,
    date: NaiveDate,
    samples: &[SampleResult],
) -> DaySummary {
    let interval_hours = config.interval_minutes as f64 / 60.0;
    let peak = samples
        .iter()
        .filter(|s| s.power > 0.0)
        .max_by(|a, b| a.power.total_cmp(&b.power));

    DaySummary {
        date,
        sunrise_sunset: estimate_sunrise_sunset(config.site.latitude, angles::day_of_year(date)),
        daylight_samples: samples.iter().filter(|s| s.angles.is_daylight()).count(),
        peak_power: peak.map_or(0.0, |s| s.power),
        peak_time: peak.map(|s| s.time),
        energy: samples.iter().map(|s| s.power * interval_hours).sum(),
    }
}

/// Simulates one civil day at the configured interval.
pub fn simulate_day(config: &SimulationConfig, date: NaiveDate) -> Result<DaySimulation> {
    let times = day_time_points(date, config.interval_minutes)?;
    let samples = simulate(config, &times)?;
    Ok(DaySimulation {
        summary: summarize(config, date, &samples),
        samples,
    })
}

/// Declination and equation of time for every day of `year`.
pub fn yearly_series(year: i32) -> Result<Vec<DailyAstronomy>> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(Error::InvalidTimePoint {
        year,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    })?;
    Ok(first
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(|date| {
            let n = angles::day_of_year(date);
            DailyAstronomy {
                date,
                day_of_year: n,
                declination: angles::solar_declination(n),
                equation_of_time: angles::equation_of_time(n),
            }
        })
        .collect())
}
