//! Water vapor: saturation, humidity and dew point
//!
//! ## Background
//!
//! Warm air can hold more water vapor than cold air. The saturation vapor
//! pressure grows roughly exponentially, doubling every 10°C:
//!
//! ```text
//! RH = e / Psat(T) × 100%
//! ```
//!
//! Moisture content is expressed in three ways:
//! - **relative humidity** (%), depends on temperature
//! - **specific humidity** (g/kg), vapor mass per mass of moist air
//! - **mixing ratio** (g/kg), vapor mass per mass of dry air
//!
//! The dew point is the temperature to which the air must be cooled at
//! constant pressure to reach saturation. It never exceeds the air
//! temperature, and their spread drives the cloud base (see
//! [`lcl`](crate::lcl)).
//!
//! ```
//! use velitherm_core::{dew_point, relative_humidity_from_dew_point};
//!
//! let td = dew_point(60.0, 25.0);
//! assert!((td - 16.69).abs() < 0.01);
//! assert!((relative_humidity_from_dew_point(td, 25.0) - 60.0).abs() < 1e-9);
//! ```

mod dew_point;
mod humidity;
mod saturation;

pub use dew_point::{dew_point, relative_humidity_from_dew_point};
pub use humidity::{
    mixing_ratio, relative_humidity, specific_humidity, specific_humidity_from_mixing_ratio,
};
pub use saturation::water_vapor_saturation_pressure;
