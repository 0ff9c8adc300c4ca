//! Solar position, clear-sky irradiance and photovoltaic power estimation.
//!
//! Each time sample flows through the same closed-form chain: declination
//! and equation of time, true solar time and hour angle, zenith/altitude/
//! azimuth, clear-sky horizontal irradiance, transposition onto the panel
//! plane, and finally power. Samples are independent, so a run can be
//! evaluated sequentially or in parallel with identical results.

pub mod angles;
pub mod error;
pub mod irradiance;
pub mod simulation;
pub mod types;

pub use angles::{
    compass_azimuth, day_of_year, deg_to_rad, east_west_hour_angle, equation_of_time, hour_angle,
    meridian_from_offset, modified_azimuth, normalize_angle, rad_to_deg, solar_altitude,
    solar_angles, solar_angles_zoned, solar_azimuth, solar_declination, solar_zenith_angle,
    sunset_hour_angle, time_point, true_solar_time, DEGREES_PER_HOUR, YEAR_ANGLE,
};

pub use error::{Error, Result};

pub use irradiance::{
    air_mass, angle_of_incidence, clear_sky_irradiance, estimate_power,
    extraterrestrial_irradiance, plane_of_array, plane_of_array_power,
};

pub use simulation::{
    day_time_points, estimate_sunrise_sunset, evaluate_sample, intervals_per_day, simulate,
    simulate_day, simulate_parallel, yearly_series,
};

pub use types::{
    ClearSkyParams, DailyAstronomy, DaySimulation, DaySummary, IrradianceComponents, PanelConfig,
    PlaneOfArrayResult, SampleResult, SimulationConfig, SiteLocation, SolarAngles, SunriseSunset,
    TimePoint,
};
