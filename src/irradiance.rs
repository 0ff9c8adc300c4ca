//! Clear-sky irradiance, plane-of-array transposition and power.
//!
//! Zenith and azimuth inputs are degrees; the azimuth convention is the
//! south-origin one produced by [`crate::angles::solar_azimuth`].

use log::debug;

use crate::angles::{deg_to_rad, rad_to_deg};
use crate::error::{self, Result};
use crate::types::{ClearSkyParams, IrradianceComponents, PanelConfig, PlaneOfArrayResult};

/// Extraterrestrial normal irradiance in W/m², corrected for Earth-Sun distance.
pub fn extraterrestrial_irradiance(day_of_year: i32, solar_constant: f64) -> f64 {
    let eccentricity = 1.0 + 0.033 * deg_to_rad(360.0 * day_of_year as f64 / 365.0).cos();
    solar_constant * eccentricity
}

/// Kasten-Young relative air mass. Infinite once the sun is below the horizon.
pub fn air_mass(zenith: f64) -> f64 {
    if zenith >= 90.0 {
        return f64::INFINITY;
    }
    1.0 / (deg_to_rad(zenith).cos() + 0.50572 * (96.07995 - zenith).powf(-1.6364))
}

/// Clear-sky beam, diffuse and global horizontal irradiance.
///
/// # Errors
/// `InvalidParameter` for a zenith outside [0, 180], a day outside
/// [1, 366] or out-of-range model constants.
pub fn clear_sky_irradiance(
    zenith: f64,
    day_of_year: i32,
    params: &ClearSkyParams,
) -> Result<IrradianceComponents> {
    error::check_zenith(zenith)?;
    error::check_day_of_year(day_of_year)?;
    params.validate()?;

    if zenith >= 90.0 {
        debug!("sun below horizon (zenith {zenith:.2}°), no irradiance");
        return Ok(IrradianceComponents::default());
    }

    let i0n = extraterrestrial_irradiance(day_of_year, params.solar_constant);
    let transmitted = params.beam_transmittance.powf(air_mass(zenith));

    let dni = i0n * transmitted;
    let dhi = params.diffuse_coefficient * i0n * (1.0 - transmitted);
    let ghi = dhi + dni * deg_to_rad(zenith).cos();

    Ok(IrradianceComponents { dni, dhi, ghi })
}

/// Angle of incidence in degrees between the beam and the panel normal.
pub fn angle_of_incidence(zenith: f64, sun_azimuth: f64, tilt: f64, panel_azimuth: f64) -> f64 {
    let z = deg_to_rad(zenith);
    let beta = deg_to_rad(tilt);
    let cos_aoi =
        z.cos() * beta.cos() + z.sin() * beta.sin() * deg_to_rad(sun_azimuth - panel_azimuth).cos();
    rad_to_deg(cos_aoi.clamp(-1.0, 1.0).acos())
}

/// Transposes horizontal irradiance onto the panel plane using isotropic
/// sky and ground models.
pub fn plane_of_array(
    irradiance: &IrradianceComponents,
    zenith: f64,
    sun_azimuth: f64,
    panel: &PanelConfig,
) -> PlaneOfArrayResult {
    let aoi = angle_of_incidence(zenith, sun_azimuth, panel.tilt, panel.azimuth);
    let cos_tilt = deg_to_rad(panel.tilt).cos();

    // sun behind the plane contributes no beam
    let beam = irradiance.dni * deg_to_rad(aoi).cos().max(0.0);
    let diffuse = irradiance.dhi * (1.0 + cos_tilt) / 2.0;
    let reflected = irradiance.ghi * panel.reflectance * (1.0 - cos_tilt) / 2.0;

    PlaneOfArrayResult {
        total: beam + diffuse + reflected,
        beam,
        diffuse,
        reflected,
        aoi,
    }
}

/// Electrical power in watts for a plane-of-array irradiance.
pub fn estimate_power(panel: &PanelConfig, poa_total: f64) -> f64 {
    panel.efficiency * panel.area * poa_total
}

/// Plane-of-array irradiance and the resulting power.
///
/// # Errors
/// `InvalidParameter` for negative irradiance, an out-of-range zenith or
/// solar azimuth, or an invalid panel.
pub fn plane_of_array_power(
    irradiance: &IrradianceComponents,
    zenith: f64,
    sun_azimuth: f64,
    panel: &PanelConfig,
) -> Result<(PlaneOfArrayResult, f64)> {
    irradiance.validate()?;
    error::check_zenith(zenith)?;
    error::check_range(
        "solar azimuth",
        sun_azimuth,
        -180.0,
        180.0,
        "between -180° and 180°",
    )?;
    panel.validate()?;

    let poa = plane_of_array(irradiance, zenith, sun_azimuth, panel);
    Ok((poa, estimate_power(panel, poa.total)))
}
