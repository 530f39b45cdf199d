//! Closed-form atmospheric thermodynamics for soaring flight
//!
//! Pressure/altitude conversions, humidity and dew point, air density,
//! adiabatic lapse rates and flight levels. Every formula is a pure function
//! of a handful of `f64` scalars in the fixed unit convention:
//!
//! | Quantity          | Unit  |
//! |-------------------|-------|
//! | pressure          | hPa   |
//! | temperature       | °C    |
//! | altitude          | m     |
//! | relative humidity | %     |
//! | specific humidity | g/kg  |
//!
//! The raw formulas do not check their inputs. A negative pressure or a
//! temperature below absolute zero yields NaN or infinity, exactly like the
//! underlying `pow`/`exp`/`log`. Use [`checked`] when the inputs come from a
//! sensor and a typed error is more useful than a NaN.
//!
//! ```
//! use velitherm_core::{altitude_from_standard_pressure, lcl, dew_point, P0};
//!
//! // Altimeter set to standard pressure
//! let altitude = altitude_from_standard_pressure(898.746, P0);
//! assert!((altitude - 1000.0).abs() < 1.0);
//!
//! // Cumulus base from a surface observation of 25°C / 26% RH
//! let td = dew_point(26.0, 25.0);
//! let cloud_base = lcl(25.0, td);
//! assert!(cloud_base > 2500.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod adiabatic;
pub mod atmosphere;
pub mod checked;
pub mod constants;
pub mod density;
pub mod errors;
pub mod moisture;
pub mod sample;
pub mod traits;

mod utils;

// Public API
pub use constants::{CP, ELR, FEET_PER_METER, G, GAMMA, K, L, MD, MV, P0, R, RD, RV, T0};
pub use errors::{ThermoError, ThermoResult};
pub use traits::Validatable;
pub use sample::AirSample;

pub use atmosphere::{
    altitude_from_pressure, altitude_from_standard_pressure, fl_from_pressure,
    pressure_from_altitude, pressure_from_fl, pressure_from_standard_altitude,
};
pub use moisture::{
    dew_point, mixing_ratio, relative_humidity, relative_humidity_from_dew_point,
    specific_humidity, specific_humidity_from_mixing_ratio, water_vapor_saturation_pressure,
};
pub use density::air_density;
pub use adiabatic::{adiabatic_cooling, adiabatic_expansion, gamma_moist, lcl};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
