//! Flight level conversions
//!
//! A flight level is a pressure altitude, independent of the day's actual
//! sea-level pressure, so both directions are pinned to [`P0`].

use super::standard::{altitude_from_standard_pressure, pressure_from_standard_altitude};
use crate::constants::{units::FEET_PER_FLIGHT_LEVEL, FEET_PER_METER, P0};

/// Pressure (hPa) of flight level `fl`.
pub fn pressure_from_fl(fl: f64) -> f64 {
    pressure_from_standard_altitude(fl * FEET_PER_FLIGHT_LEVEL / FEET_PER_METER, P0)
}

/// Flight level of the isobar `pressure` (hPa).
///
/// The result is fractional; rounding to an assignable level is left to the
/// caller.
pub fn fl_from_pressure(pressure: f64) -> f64 {
    altitude_from_standard_pressure(pressure, P0) * FEET_PER_METER / FEET_PER_FLIGHT_LEVEL
}
