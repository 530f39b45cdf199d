//! Reference values from published soaring and meteorology tables
//!
//! Downstream tools compare against these numbers, so they are pinned here
//! through the public API only.

use velitherm_core::{
    adiabatic_cooling, air_density, altitude_from_standard_pressure, dew_point, fl_from_pressure,
    gamma_moist, lcl, pressure_from_fl, pressure_from_standard_altitude, specific_humidity,
    water_vapor_saturation_pressure, AirSample, GAMMA, P0, T0,
};

// ===== TOLERANCES =====

/// Altitudes are quoted to the meter
const ALTITUDE_TOLERANCE_M: f64 = 1.0;

/// Densities are quoted to three decimals
const DENSITY_TOLERANCE: f64 = 1e-3;

#[test]
fn standard_altitude_of_898_hpa() {
    let altitude = altitude_from_standard_pressure(898.746, P0);
    assert!((altitude - 1000.0).abs() < ALTITUDE_TOLERANCE_M, "got {altitude}");
}

#[test]
fn saturation_pressure_at_20c() {
    let psat = water_vapor_saturation_pressure(20.0);
    assert!((psat - 23.38).abs() < 0.1, "got {psat}");
}

#[test]
fn dry_air_density_at_35c() {
    let rho = air_density(0.0, 1013.25, 35.0);
    assert!((rho - 1.1455).abs() < DENSITY_TOLERANCE, "got {rho}");
}

#[test]
fn condensation_level_25_over_4() {
    let base = lcl(25.0, 4.0);
    assert!((base - 2660.0).abs() < ALTITUDE_TOLERANCE_M, "got {base}");
}

#[test]
fn moist_lapse_rate_at_minus_40() {
    let rate = gamma_moist(-40.0, 1000.0);
    assert!((rate - 9.5e-3).abs() < 1e-3, "got {rate}");
}

#[test]
fn dry_lapse_rate_from_adiabatic_expansion() {
    let rate = (T0
        - adiabatic_cooling(
            T0,
            pressure_from_standard_altitude(100.0, P0),
            pressure_from_standard_altitude(0.0, P0),
        ))
        / 100.0;
    assert!((rate - GAMMA).abs() < 1e-5, "got {rate}");
}

#[test]
fn flight_levels_ignore_qnh() {
    // FL65 is the same isobar whatever the day's sea-level pressure
    let pressure = pressure_from_fl(65.0);
    assert_eq!(pressure, pressure_from_standard_altitude(6500.0 / 3.28084, P0));
    assert!((fl_from_pressure(pressure) - 65.0).abs() < 1e-9);
}

#[test]
fn thermal_day_briefing() {
    // 28°C, 45% at a 440m airfield: base around 1650m above ground
    let sample = AirSample::new(28.0, 962.0, 45.0);
    sample.validate().unwrap();

    let td = dew_point(45.0, 28.0);
    assert_eq!(sample.dew_point(), td);
    assert!((sample.cloud_base() - 1652.5).abs() < 1.0);
    assert!((sample.pressure_altitude() - 437.0).abs() < 5.0);
    assert!(sample.specific_humidity() > specific_humidity(45.0, P0, 28.0));
}
