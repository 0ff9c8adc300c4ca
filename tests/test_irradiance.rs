use solar_power::irradiance::*;
use solar_power::types::{ClearSkyParams, IrradianceComponents, PanelConfig};
use solar_power::Error;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn clear_sky(zenith: f64, n: i32) -> IrradianceComponents {
    clear_sky_irradiance(zenith, n, &ClearSkyParams::default()).unwrap()
}

// ── Extraterrestrial ──

#[test]
fn test_extraterrestrial_range() {
    for n in 1..=366 {
        let i0n = extraterrestrial_irradiance(n, 1367.0);
        assert!((1367.0 * 0.966..=1367.0 * 1.034).contains(&i0n), "day {}: {}", n, i0n);
    }
}

#[test]
fn test_extraterrestrial_scales_with_solar_constant() {
    assert_approx!(
        extraterrestrial_irradiance(100, 1361.0) / extraterrestrial_irradiance(100, 1367.0),
        1361.0 / 1367.0,
        1e-12
    );
}

// ── Air mass ──

#[test]
fn test_air_mass_known_values() {
    assert_approx!(air_mass(60.0), 1.994, 0.01);
    assert_approx!(air_mass(85.0), 10.3, 0.1);
}

#[test]
fn test_air_mass_monotonic_below_horizon() {
    let mut previous = air_mass(0.0);
    for step in 1..900 {
        let m = air_mass(step as f64 * 0.1);
        assert!(m > previous, "zenith {}: {} <= {}", step as f64 * 0.1, m, previous);
        previous = m;
    }
}

#[test]
fn test_air_mass_infinite_at_night() {
    assert!(air_mass(90.0).is_infinite());
    assert!(air_mass(120.0).is_infinite());
}

// ── Clear sky ──

#[test]
fn test_clear_sky_overhead_sun() {
    // air mass is one at the zenith up to the Kasten-Young fit
    let n = 172;
    let irr = clear_sky(0.0, n);
    let expected = extraterrestrial_irradiance(n, 1367.0) * 0.7;
    assert_approx!(irr.dni, expected, 0.5);
    assert_approx!(irr.ghi, irr.dni + irr.dhi, 1e-9);
}

#[test]
fn test_clear_sky_known_values() {
    let irr = clear_sky(30.0, 172);
    assert_approx!(irr.dni, 876.36, 0.05);
    assert_approx!(irr.dhi, 334.70, 0.05);
    assert_approx!(irr.ghi, 1093.65, 0.05);
}

#[test]
fn test_clear_sky_night_is_exactly_zero() {
    for zenith in [90.0, 90.0001, 120.0, 180.0] {
        let irr = clear_sky(zenith, 1);
        assert_eq!((irr.dni, irr.dhi, irr.ghi), (0.0, 0.0, 0.0));
    }
}

#[test]
fn test_clear_sky_dni_vanishes_at_horizon() {
    let irr = clear_sky(89.9, 172);
    assert!(irr.dni < 0.01, "dni={}", irr.dni);
    assert!(irr.dni >= 0.0 && irr.dhi >= 0.0 && irr.ghi >= 0.0);
}

#[test]
fn test_clear_sky_custom_params() {
    let params = ClearSkyParams {
        beam_transmittance: 1.0,
        diffuse_coefficient: 0.0,
        solar_constant: 1000.0,
    };
    let irr = clear_sky_irradiance(45.0, 91, &params).unwrap();
    assert_approx!(irr.dni, extraterrestrial_irradiance(91, 1000.0), 1e-9);
    assert_eq!(irr.dhi, 0.0);
}

#[test]
fn test_clear_sky_rejects_bad_inputs() {
    let defaults = ClearSkyParams::default();
    assert!(clear_sky_irradiance(-1.0, 1, &defaults).is_err());
    assert!(clear_sky_irradiance(181.0, 1, &defaults).is_err());
    assert!(clear_sky_irradiance(30.0, 0, &defaults).is_err());
    assert!(clear_sky_irradiance(30.0, 367, &defaults).is_err());
    let bad = ClearSkyParams {
        beam_transmittance: 0.0,
        ..defaults
    };
    assert!(matches!(
        clear_sky_irradiance(30.0, 1, &bad),
        Err(Error::InvalidParameter { name: "beam transmittance", .. })
    ));
}

// ── Angle of incidence ──

#[test]
fn test_aoi_panel_facing_sun() {
    assert_approx!(angle_of_incidence(30.0, 0.0, 30.0, 0.0), 0.0, 1e-4);
    assert_approx!(angle_of_incidence(50.0, -90.0, 50.0, -90.0), 0.0, 1e-4);
}

#[test]
fn test_aoi_flat_panel_equals_zenith() {
    for &(zenith, azimuth) in &[(10.0, 0.0), (45.0, -120.0), (80.0, 170.0)] {
        assert_approx!(angle_of_incidence(zenith, azimuth, 0.0, 35.0), zenith, 1e-9);
    }
}

// ── Plane of array ──

#[test]
fn test_flat_panel_poa_equals_ghi() {
    let irr = clear_sky(35.0, 200);
    let panel = PanelConfig::new(0.0, 0.0).with_reflectance(0.9);
    let poa = plane_of_array(&irr, 35.0, -40.0, &panel);
    assert_approx!(poa.diffuse, irr.dhi, 1e-9);
    assert_eq!(poa.reflected, 0.0);
    assert_approx!(poa.total, irr.ghi, 1e-9);
}

#[test]
fn test_panel_facing_away_gets_no_beam() {
    let irr = clear_sky(60.0, 200);
    // sun in the south-east, panel steeply tilted facing north-west
    let panel = PanelConfig::new(80.0, 135.0);
    let poa = plane_of_array(&irr, 60.0, -45.0, &panel);
    assert!(poa.aoi > 90.0, "aoi={}", poa.aoi);
    assert_eq!(poa.beam, 0.0);
    assert_approx!(poa.total, poa.diffuse + poa.reflected, 1e-9);
    assert!(poa.diffuse > 0.0 && poa.reflected > 0.0);
}

#[test]
fn test_tilted_panel_facing_sun() {
    let irr = clear_sky(30.0, 172);
    let poa = plane_of_array(&irr, 30.0, 0.0, &PanelConfig::new(30.0, 0.0));
    assert_approx!(poa.beam, irr.dni, 1e-6);
    assert_approx!(poa.total, 1203.29, 0.05);
}

#[test]
fn test_vertical_panel_view_factors() {
    let irr = IrradianceComponents {
        dni: 0.0,
        dhi: 100.0,
        ghi: 400.0,
    };
    let poa = plane_of_array(&irr, 40.0, 0.0, &PanelConfig::new(90.0, 0.0).with_reflectance(0.25));
    assert_approx!(poa.diffuse, 50.0, 1e-9);
    assert_approx!(poa.reflected, 50.0, 1e-9);
}

// ── Power ──

#[test]
fn test_power_scales_with_area_and_efficiency() {
    let panel = PanelConfig::new(20.0, 0.0).with_area(1.6).with_efficiency(0.2);
    assert_approx!(estimate_power(&panel, 1000.0), 320.0, 1e-9);
    assert_eq!(estimate_power(&panel.with_area(0.0), 1000.0), 0.0);
    assert_eq!(estimate_power(&panel.with_efficiency(0.0), 1000.0), 0.0);
}

#[test]
fn test_plane_of_array_power_entry_point() {
    let irr = clear_sky(30.0, 172);
    let panel = PanelConfig::new(30.0, 0.0).with_area(2.0).with_efficiency(0.15);
    let (poa, power) = plane_of_array_power(&irr, 30.0, 0.0, &panel).unwrap();
    assert_approx!(power, 0.15 * 2.0 * poa.total, 1e-9);
}

#[test]
fn test_plane_of_array_power_at_night_is_zero() {
    let irr = clear_sky(100.0, 172);
    let (poa, power) = plane_of_array_power(&irr, 100.0, 150.0, &PanelConfig::new(30.0, 0.0)).unwrap();
    assert_eq!(poa.total, 0.0);
    assert_eq!(power, 0.0);
}

#[test]
fn test_plane_of_array_power_rejects_invalid_panel() {
    let irr = clear_sky(30.0, 172);
    let cases = [
        PanelConfig::new(-5.0, 0.0),
        PanelConfig::new(190.0, 0.0),
        PanelConfig::new(30.0, 200.0),
        PanelConfig::new(30.0, 0.0).with_area(-1.0),
        PanelConfig::new(30.0, 0.0).with_efficiency(1.5),
        PanelConfig::new(30.0, 0.0).with_reflectance(-0.1),
    ];
    for panel in cases {
        assert!(
            matches!(
                plane_of_array_power(&irr, 30.0, 0.0, &panel),
                Err(Error::InvalidParameter { .. })
            ),
            "{:?}",
            panel
        );
    }
}

#[test]
fn test_plane_of_array_power_rejects_negative_irradiance() {
    let irr = IrradianceComponents {
        dni: -1.0,
        dhi: 0.0,
        ghi: 0.0,
    };
    assert!(plane_of_array_power(&irr, 30.0, 0.0, &PanelConfig::default()).is_err());
}
