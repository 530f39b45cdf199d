//! Domain-checked versions of every formula
//!
//! Same names, same argument order, same results as the crate-root formulas,
//! but inputs are checked first and the output is a [`ThermoResult`]:
//!
//! - NaN or infinite input → [`ThermoError::InvalidValue`]
//! - pressure ≤ 0 → [`ThermoError::NonPositivePressure`]
//! - temperature ≤ absolute zero → [`ThermoError::BelowAbsoluteZero`]
//! - argument outside a formula's mathematical domain →
//!   [`ThermoError::OutOfRange`]
//! - anything else that still evaluates to NaN/∞ →
//!   [`ThermoError::NonFiniteResult`]
//!
//! Inputs outside the *calibrated* range of an empirical fit (Magnus–Tetens
//! below -40°C, a standard-atmosphere pressure of 100 hPa, 105% RH...) are
//! accepted and logged as warnings. They are physically meaningful, just less
//! accurate.
//!
//! ```
//! use velitherm_core::{checked, ThermoError};
//!
//! let td = checked::dew_point(60.0, 25.0)?;
//! let base = checked::lcl(25.0, td)?;
//! assert!(base > 1000.0);
//!
//! assert!(matches!(
//!     checked::dew_point(0.0, 25.0),
//!     Err(ThermoError::OutOfRange { .. })
//! ));
//! # Ok::<(), ThermoError>(())
//! ```

use crate::{
    adiabatic,
    atmosphere,
    constants::{
        atmosphere::{
            MAGNUS_TEMP_MAX_C, MAGNUS_TEMP_MIN_C, STANDARD_ATMOSPHERE_CEILING_M,
            STANDARD_PRESSURE_MAX_HPA, STANDARD_PRESSURE_MIN_HPA,
        },
        units::FEET_PER_FLIGHT_LEVEL,
        FEET_PER_METER,
    },
    density,
    errors::ThermoResult,
    moisture,
    utils::{
        check_above, check_below, check_finite, check_pressure, check_result, check_temperature,
        warn_outside,
    },
};

/// Mixing ratio is undefined once vapor makes up the whole mass (g/kg)
const SPECIFIC_HUMIDITY_LIMIT: f64 = 1000.0;

fn warn_standard_pressure(pressure: f64) {
    warn_outside(
        "standard atmosphere pressure",
        pressure,
        STANDARD_PRESSURE_MIN_HPA,
        STANDARD_PRESSURE_MAX_HPA,
    );
}

fn warn_magnus(temp: f64) {
    warn_outside("saturation temperature", temp, MAGNUS_TEMP_MIN_C, MAGNUS_TEMP_MAX_C);
}

fn warn_humidity(relative_humidity: f64) {
    warn_outside("relative humidity", relative_humidity, 0.0, 100.0);
}

/// Checked [`crate::altitude_from_standard_pressure`]
pub fn altitude_from_standard_pressure(pressure: f64, pressure0: f64) -> ThermoResult<f64> {
    let pressure = check_pressure(pressure)?;
    let pressure0 = check_pressure(pressure0)?;
    warn_standard_pressure(pressure);

    check_result(
        "standard altitude",
        atmosphere::altitude_from_standard_pressure(pressure, pressure0),
    )
}

/// Checked [`crate::pressure_from_standard_altitude`]
///
/// Altitudes at or above the 44330m ceiling are rejected.
pub fn pressure_from_standard_altitude(altitude: f64, pressure0: f64) -> ThermoResult<f64> {
    let altitude = check_below(altitude, STANDARD_ATMOSPHERE_CEILING_M)?;
    let pressure0 = check_pressure(pressure0)?;

    check_result(
        "standard pressure",
        atmosphere::pressure_from_standard_altitude(altitude, pressure0),
    )
}

/// Checked [`crate::altitude_from_pressure`]
pub fn altitude_from_pressure(pressure: f64, pressure0: f64, temp: f64) -> ThermoResult<f64> {
    let pressure = check_pressure(pressure)?;
    let pressure0 = check_pressure(pressure0)?;
    let temp = check_temperature(temp)?;

    check_result(
        "hypsometric altitude",
        atmosphere::altitude_from_pressure(pressure, pressure0, temp),
    )
}

/// Checked [`crate::pressure_from_altitude`]
pub fn pressure_from_altitude(altitude: f64, pressure0: f64, temp: f64) -> ThermoResult<f64> {
    let altitude = check_finite(altitude)?;
    let pressure0 = check_pressure(pressure0)?;
    let temp = check_temperature(temp)?;

    check_result(
        "hypsometric pressure",
        atmosphere::pressure_from_altitude(altitude, pressure0, temp),
    )
}

/// Checked [`crate::pressure_from_fl`]
pub fn pressure_from_fl(fl: f64) -> ThermoResult<f64> {
    let ceiling = STANDARD_ATMOSPHERE_CEILING_M * FEET_PER_METER / FEET_PER_FLIGHT_LEVEL;
    let fl = check_below(fl, ceiling)?;

    check_result("flight level pressure", atmosphere::pressure_from_fl(fl))
}

/// Checked [`crate::fl_from_pressure`]
pub fn fl_from_pressure(pressure: f64) -> ThermoResult<f64> {
    let pressure = check_pressure(pressure)?;
    warn_standard_pressure(pressure);

    check_result("flight level", atmosphere::fl_from_pressure(pressure))
}

/// Checked [`crate::water_vapor_saturation_pressure`]
pub fn water_vapor_saturation_pressure(temp: f64) -> ThermoResult<f64> {
    let temp = check_temperature(temp)?;
    warn_magnus(temp);

    check_result(
        "saturation pressure",
        moisture::water_vapor_saturation_pressure(temp),
    )
}

/// Checked [`crate::relative_humidity`]
pub fn relative_humidity(specific_humidity: f64, pressure: f64, temp: f64) -> ThermoResult<f64> {
    let specific_humidity = check_finite(specific_humidity)?;
    let pressure = check_pressure(pressure)?;
    let temp = check_temperature(temp)?;
    warn_magnus(temp);

    check_result(
        "relative humidity",
        moisture::relative_humidity(specific_humidity, pressure, temp),
    )
}

/// Checked [`crate::specific_humidity`]
pub fn specific_humidity(relative_humidity: f64, pressure: f64, temp: f64) -> ThermoResult<f64> {
    let relative_humidity = check_finite(relative_humidity)?;
    let pressure = check_pressure(pressure)?;
    let temp = check_temperature(temp)?;
    warn_humidity(relative_humidity);
    warn_magnus(temp);

    check_result(
        "specific humidity",
        moisture::specific_humidity(relative_humidity, pressure, temp),
    )
}

/// Checked [`crate::mixing_ratio`]
///
/// Specific humidity must stay below 1000 g/kg.
pub fn mixing_ratio(specific_humidity: f64) -> ThermoResult<f64> {
    let specific_humidity = check_below(specific_humidity, SPECIFIC_HUMIDITY_LIMIT)?;

    check_result("mixing ratio", moisture::mixing_ratio(specific_humidity))
}

/// Checked [`crate::specific_humidity_from_mixing_ratio`]
pub fn specific_humidity_from_mixing_ratio(mixing_ratio: f64) -> ThermoResult<f64> {
    let mixing_ratio = check_finite(mixing_ratio)?;

    check_result(
        "specific humidity",
        moisture::specific_humidity_from_mixing_ratio(mixing_ratio),
    )
}

/// Checked [`crate::dew_point`]
///
/// Relative humidity must be strictly positive.
pub fn dew_point(relative_humidity: f64, temp: f64) -> ThermoResult<f64> {
    let relative_humidity = check_above(relative_humidity, 0.0)?;
    let temp = check_temperature(temp)?;
    warn_humidity(relative_humidity);

    check_result("dew point", moisture::dew_point(relative_humidity, temp))
}

/// Checked [`crate::relative_humidity_from_dew_point`]
pub fn relative_humidity_from_dew_point(dew_point: f64, temp: f64) -> ThermoResult<f64> {
    let dew_point = check_temperature(dew_point)?;
    let temp = check_temperature(temp)?;

    check_result(
        "relative humidity",
        moisture::relative_humidity_from_dew_point(dew_point, temp),
    )
}

/// Checked [`crate::air_density`]
pub fn air_density(relative_humidity: f64, pressure: f64, temp: f64) -> ThermoResult<f64> {
    let relative_humidity = check_finite(relative_humidity)?;
    let pressure = check_pressure(pressure)?;
    let temp = check_temperature(temp)?;
    warn_humidity(relative_humidity);
    warn_magnus(temp);

    check_result(
        "air density",
        density::air_density(relative_humidity, pressure, temp),
    )
}

/// Checked [`crate::lcl`]
///
/// A dew point above the air temperature is physically impossible and is
/// logged, the (negative) result is still returned.
pub fn lcl(temp: f64, dew_point: f64) -> ThermoResult<f64> {
    let temp = check_temperature(temp)?;
    let dew_point = check_temperature(dew_point)?;
    if dew_point > temp {
        log_warn!("Dew point {} above air temperature {}", dew_point, temp);
    }

    check_result("condensation level", adiabatic::lcl(temp, dew_point))
}

/// Checked [`crate::gamma_moist`]
///
/// The pressure must exceed the saturation vapor pressure at `temp`,
/// otherwise the saturation mixing ratio is negative or infinite.
pub fn gamma_moist(temp: f64, pressure: f64) -> ThermoResult<f64> {
    let temp = check_temperature(temp)?;
    let pressure = check_pressure(pressure)?;
    check_above(pressure, adiabatic::saturation_vapor_pressure(temp))?;

    check_result("moist lapse rate", adiabatic::gamma_moist(temp, pressure))
}

/// Checked [`crate::adiabatic_expansion`]
pub fn adiabatic_expansion(volume0: f64, pressure: f64, pressure0: f64) -> ThermoResult<f64> {
    let volume0 = check_finite(volume0)?;
    let pressure = check_pressure(pressure)?;
    let pressure0 = check_pressure(pressure0)?;

    check_result(
        "adiabatic volume",
        adiabatic::adiabatic_expansion(volume0, pressure, pressure0),
    )
}

/// Checked [`crate::adiabatic_cooling`]
pub fn adiabatic_cooling(temp0: f64, pressure: f64, pressure0: f64) -> ThermoResult<f64> {
    let temp0 = check_temperature(temp0)?;
    let pressure = check_pressure(pressure)?;
    let pressure0 = check_pressure(pressure0)?;

    check_result(
        "adiabatic temperature",
        adiabatic::adiabatic_cooling(temp0, pressure, pressure0),
    )
}
