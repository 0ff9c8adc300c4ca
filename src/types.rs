use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{self, Result};

/// Civil local date-time of a sample. The calendar it belongs to is the
/// one implied by the site's standard meridian.
pub type TimePoint = NaiveDateTime;

/// Observer position. Longitudes and the standard meridian are east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub standard_meridian: f64,
}

impl SiteLocation {
    pub fn new(latitude: f64, longitude: f64, standard_meridian: f64) -> Self {
        Self {
            latitude,
            longitude,
            standard_meridian,
        }
    }

    pub fn validate(&self) -> Result<()> {
        error::check_latitude(self.latitude)?;
        error::check_longitude(self.longitude)?;
        error::check_meridian(self.standard_meridian)
    }
}

/// Sun position for one time point.
///
/// Angles are degrees except `hour_angle`, which is radians. `azimuth` is
/// south-origin: 0° south, negative east, positive west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    pub day_of_year: i32,
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// True solar time in hours.
    pub solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

impl SolarAngles {
    pub fn is_daylight(&self) -> bool {
        self.zenith < 90.0
    }
}

/// Horizontal-plane irradiance in W/m². All zero at night.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IrradianceComponents {
    pub dni: f64,
    pub dhi: f64,
    pub ghi: f64,
}

impl IrradianceComponents {
    pub fn validate(&self) -> Result<()> {
        error::check_non_negative("DNI", self.dni)?;
        error::check_non_negative("DHI", self.dhi)?;
        error::check_non_negative("GHI", self.ghi)
    }
}

/// Tunable constants of the clear-sky model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearSkyParams {
    pub beam_transmittance: f64,
    pub diffuse_coefficient: f64,
    /// W/m².
    pub solar_constant: f64,
}

impl Default for ClearSkyParams {
    fn default() -> Self {
        Self {
            beam_transmittance: 0.7,
            diffuse_coefficient: 0.75,
            solar_constant: 1367.0,
        }
    }
}

impl ClearSkyParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.beam_transmittance > 0.0 && self.beam_transmittance <= 1.0) {
            return Err(error::Error::invalid_parameter(
                "beam transmittance",
                self.beam_transmittance,
                "in (0, 1]",
            ));
        }
        error::check_fraction("diffuse coefficient", self.diffuse_coefficient)?;
        if !(self.solar_constant > 0.0 && self.solar_constant.is_finite()) {
            return Err(error::Error::invalid_parameter(
                "solar constant",
                self.solar_constant,
                "finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Panel geometry and electrical characteristics.
///
/// `azimuth` shares the solar azimuth convention: 0° faces south,
/// -90° east, 90° west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub tilt: f64,
    pub azimuth: f64,
    pub reflectance: f64,
    pub efficiency: f64,
    /// m².
    pub area: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tilt: 0.0,
            azimuth: 0.0,
            reflectance: 0.2,
            efficiency: 0.18,
            area: 1.0,
        }
    }
}

impl PanelConfig {
    pub fn new(tilt: f64, azimuth: f64) -> Self {
        Self {
            tilt,
            azimuth,
            ..Self::default()
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn with_reflectance(mut self, reflectance: f64) -> Self {
        self.reflectance = reflectance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        error::check_range("tilt", self.tilt, 0.0, 180.0, "between 0° and 180°")?;
        error::check_range(
            "panel azimuth",
            self.azimuth,
            -180.0,
            180.0,
            "between -180° and 180°",
        )?;
        error::check_fraction("ground reflectance", self.reflectance)?;
        error::check_fraction("efficiency", self.efficiency)?;
        error::check_non_negative("area", self.area)
    }
}

/// Irradiance on the tilted plane in W/m².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneOfArrayResult {
    pub total: f64,
    pub beam: f64,
    pub diffuse: f64,
    pub reflected: f64,
    /// Angle of incidence in degrees.
    pub aoi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunriseSunset {
    /// True-solar-time minutes after midnight.
    pub sunrise: i32,
    pub sunset: i32,
}

/// Read-only inputs shared by every sample of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub site: SiteLocation,
    pub panel: PanelConfig,
    pub clear_sky: ClearSkyParams,
    pub interval_minutes: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            site: SiteLocation::new(40.741895, -73.989308, -75.0),
            panel: PanelConfig::default(),
            clear_sky: ClearSkyParams::default(),
            interval_minutes: 60,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        self.site.validate()?;
        self.panel.validate()?;
        self.clear_sky.validate()?;
        error::check_interval(self.interval_minutes)
    }
}

/// Output of the full pipeline for one time point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResult {
    pub time: TimePoint,
    pub angles: SolarAngles,
    pub irradiance: IrradianceComponents,
    pub plane_of_array: PlaneOfArrayResult,
    /// Watts.
    pub power: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub sunrise_sunset: SunriseSunset,
    pub daylight_samples: usize,
    pub peak_power: f64,
    pub peak_time: Option<TimePoint>,
    /// Watt-hours.
    pub energy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySimulation {
    pub summary: DaySummary,
    pub samples: Vec<SampleResult>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAstronomy {
    pub date: NaiveDate,
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
}
