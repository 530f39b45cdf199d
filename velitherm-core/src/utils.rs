//! Input checks shared by the checked formulas and [`AirSample`](crate::AirSample)
//!
//! Hard failures return a [`ThermoError`]. Soft limits (the calibrated range
//! of an empirical fit) only log a warning, the value is still usable.

use crate::{
    constants::K,
    errors::{ThermoError, ThermoResult},
    traits::Validatable,
};

/// Reject NaN and infinity
pub fn check_finite(value: f64) -> ThermoResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(ThermoError::InvalidValue)
    }
}

/// Pressure must be a finite, strictly positive number
pub fn check_pressure(pressure: f64) -> ThermoResult<f64> {
    let pressure = check_finite(pressure)?;
    if pressure <= 0.0 {
        return Err(ThermoError::NonPositivePressure { pressure });
    }
    Ok(pressure)
}

/// Temperature must be a finite number above absolute zero
pub fn check_temperature(temp: f64) -> ThermoResult<f64> {
    let temp = check_finite(temp)?;
    if temp - K <= 0.0 {
        return Err(ThermoError::BelowAbsoluteZero { temp });
    }
    Ok(temp)
}

/// Check if a value is above `min`, bound excluded
pub fn check_above(value: f64, min: f64) -> ThermoResult<f64> {
    let value = check_finite(value)?;
    if value <= min {
        Err(ThermoError::OutOfRange { value, min, max: f64::INFINITY })
    } else {
        Ok(value)
    }
}

/// Check if a value is below `max`, bound excluded
pub fn check_below(value: f64, max: f64) -> ThermoResult<f64> {
    let value = check_finite(value)?;
    if value >= max {
        Err(ThermoError::OutOfRange { value, min: f64::NEG_INFINITY, max })
    } else {
        Ok(value)
    }
}

/// Warn when `value` leaves the calibrated range of a fit
pub fn warn_outside(quantity: &'static str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        log_warn!("{}: {} outside calibrated range [{}, {}]", quantity, value, min, max);
    }
}

/// Turn a non-finite formula output into an error naming the quantity
pub fn check_result(quantity: &'static str, value: f64) -> ThermoResult<f64> {
    if value.is_valid() {
        log_debug!("{} = {}", quantity, value);
        Ok(value)
    } else {
        Err(ThermoError::NonFiniteResult { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_check() {
        assert_eq!(check_pressure(1013.25), Ok(1013.25));
        assert_eq!(
            check_pressure(0.0),
            Err(ThermoError::NonPositivePressure { pressure: 0.0 })
        );
        assert_eq!(check_pressure(f64::NAN), Err(ThermoError::InvalidValue));
    }

    #[test]
    fn temperature_check() {
        assert!(check_temperature(-273.0).is_ok());
        assert_eq!(
            check_temperature(-273.15),
            Err(ThermoError::BelowAbsoluteZero { temp: -273.15 })
        );
    }

    #[test]
    fn range_check() {
        assert!(check_above(5.0, 0.0).is_ok());
        assert_eq!(
            check_above(0.0, 0.0),
            Err(ThermoError::OutOfRange { value: 0.0, min: 0.0, max: f64::INFINITY })
        );
        assert!(check_above(-1.0, 0.0).is_err());
        assert_eq!(check_above(f64::NAN, 0.0), Err(ThermoError::InvalidValue));
        assert!(check_below(10.0, 10.0).is_err());
        assert!(check_below(9.9, 10.0).is_ok());
    }

    #[test]
    fn result_check() {
        assert_eq!(check_result("altitude", 12.0), Ok(12.0));
        assert_eq!(
            check_result("altitude", f64::INFINITY),
            Err(ThermoError::NonFiniteResult { quantity: "altitude" })
        );
    }
}
