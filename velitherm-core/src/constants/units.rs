//! Unit conversion factors

/// Feet per meter (ft/m).
pub const FEET_PER_METER: f64 = 3.28084;

/// Feet per flight level: FL100 is 10000ft of pressure altitude.
pub const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;
