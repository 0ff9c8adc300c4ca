use chrono::{Datelike, NaiveDate};

use solar_power::angles::compass_azimuth;
use solar_power::simulation::{simulate_day, yearly_series};
use solar_power::types::{PanelConfig, SimulationConfig, SiteLocation};

fn main() -> solar_power::Result<()> {
    env_logger::init();

    let config = SimulationConfig {
        site: SiteLocation::new(40.741895, -73.989308, -75.0),
        panel: PanelConfig::new(35.0, 0.0).with_area(1.7).with_efficiency(0.2),
        ..Default::default()
    };
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let day = simulate_day(&config, date)?;

    println!("=== Clear-Sky PV Simulation ===");
    println!(
        "Site: {:.4}°, {:.4}° (meridian {:.1}°)",
        config.site.latitude, config.site.longitude, config.site.standard_meridian
    );
    println!(
        "Panel: tilt {:.1}°, azimuth {:.1}°, {:.2} m², efficiency {:.0}%",
        config.panel.tilt,
        config.panel.azimuth,
        config.panel.area,
        config.panel.efficiency * 100.0
    );
    println!("Date: {}", date);
    println!();
    println!(
        "{:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "time", "zenith", "compass", "DNI", "DHI", "GHI", "POA", "power"
    );
    for s in &day.samples {
        println!(
            "{:>5} {:>8.2} {:>8.2} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            s.time.format("%H:%M"),
            s.angles.zenith,
            compass_azimuth(s.angles.azimuth),
            s.irradiance.dni,
            s.irradiance.dhi,
            s.irradiance.ghi,
            s.plane_of_array.total,
            s.power
        );
    }
    println!();

    let summary = &day.summary;
    println!(
        "Sunrise/sunset (solar time): {:02}:{:02} / {:02}:{:02}",
        summary.sunrise_sunset.sunrise / 60,
        summary.sunrise_sunset.sunrise % 60,
        summary.sunrise_sunset.sunset / 60,
        summary.sunrise_sunset.sunset % 60
    );
    println!("Daylight samples: {}", summary.daylight_samples);
    match summary.peak_time {
        Some(t) => println!("Peak power: {:.1} W at {}", summary.peak_power, t.format("%H:%M")),
        None => println!("Peak power: none"),
    }
    println!("Daily energy: {:.0} Wh", summary.energy);
    println!();

    println!("--- Declination / Equation of Time, first of each month ---");
    for d in yearly_series(2025)?.iter().filter(|d| d.date.day() == 1) {
        println!(
            "{}  decl {:>7.2}°  EoT {:>6.2} min",
            d.date, d.declination, d.equation_of_time
        );
    }

    Ok(())
}
