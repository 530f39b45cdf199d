//! Error types for the checked formula layer
//!
//! The raw formulas never fail: out-of-domain inputs come back as NaN or
//! infinity. [`crate::checked`] turns those situations into a `ThermoError`
//! before evaluating anything.
//!
//! Errors are `Copy` and carry no heap data (`&'static str` only) so they can
//! travel through interrupt handlers and fixed-size queues on embedded targets.
//!
//! ```
//! use velitherm_core::{checked, ThermoError};
//!
//! match checked::altitude_from_standard_pressure(-5.0, 1013.25) {
//!     Err(ThermoError::NonPositivePressure { pressure }) => assert_eq!(pressure, -5.0),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for checked formula evaluation
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Domain errors of the checked formulas
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThermoError {
    /// Input is NaN or infinite
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Pressure at or below zero, logarithm and division undefined
    #[error("Pressure {pressure} hPa must be positive")]
    NonPositivePressure {
        /// The offending pressure in hPa
        pressure: f64,
    },

    /// Temperature at or below absolute zero
    #[error("Temperature {temp}°C is not above absolute zero")]
    BelowAbsoluteZero {
        /// The offending temperature in °C
        temp: f64,
    },

    /// Value outside the domain of a formula
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected input
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },

    /// Inputs passed the checks but the formula still produced NaN or infinity
    #[error("Non-finite result computing {quantity}")]
    NonFiniteResult {
        /// Name of the quantity being computed
        quantity: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermoError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue => defmt::write!(fmt, "Invalid value"),
            Self::NonPositivePressure { pressure } => {
                defmt::write!(fmt, "Pressure {} hPa not positive", pressure)
            }
            Self::BelowAbsoluteZero { temp } => {
                defmt::write!(fmt, "Temperature {} below absolute zero", temp)
            }
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max)
            }
            Self::NonFiniteResult { quantity } => {
                defmt::write!(fmt, "Non-finite {}", quantity)
            }
        }
    }
}
