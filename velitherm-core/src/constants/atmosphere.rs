//! Reference atmosphere and calibration limits

/// Absolute zero in Celsius (°C).
///
/// Added to a Celsius temperature with a minus sign to obtain Kelvin:
/// `temp - K`.
pub const K: f64 = -273.15;

/// Standard sea-level pressure (hPa).
///
/// Source: International Standard Atmosphere (ISA)
pub const P0: f64 = 1013.25;

/// Standard sea-level temperature (°C).
///
/// Source: International Standard Atmosphere (ISA)
pub const T0: f64 = 15.0;

/// Altitude at which the barometric formula base `1 - h/44330` reaches zero (m).
///
/// Equal to the scale altitude of the formula. The standard-atmosphere pair
/// is undefined above it.
pub const STANDARD_ATMOSPHERE_CEILING_M: f64 = crate::atmosphere::standard::SCALE_ALTITUDE_M;

/// Lowest pressure the standard-atmosphere fit is meant for (hPa), ≈ 11800m.
pub const STANDARD_PRESSURE_MIN_HPA: f64 = 200.0;

/// Highest pressure the standard-atmosphere fit is meant for (hPa).
pub const STANDARD_PRESSURE_MAX_HPA: f64 = 1050.0;

/// Lower calibration limit of the Magnus–Tetens saturation fit (°C).
pub const MAGNUS_TEMP_MIN_C: f64 = -40.0;

/// Upper calibration limit of the Magnus–Tetens saturation fit (°C).
pub const MAGNUS_TEMP_MAX_C: f64 = 50.0;
