//! Dew point from the Magnus approximation
//!
//! Uses the Sonntag (1990) coefficients, which differ slightly from the
//! Magnus–Tetens set of [`water_vapor_saturation_pressure`]:
//!
//! ```text
//! γ(T, RH) = ln(RH/100) + b×T/(c + T)
//! Td = c×γ / (b - γ)
//! ```
//!
//! [`water_vapor_saturation_pressure`]: super::water_vapor_saturation_pressure

const SONNTAG_B: f64 = 17.62;
const SONNTAG_C: f64 = 243.12;

/// Dew point (°C) of air at `temp` (°C) with `relative_humidity` (%).
///
/// Zero humidity has no dew point and gives NaN.
pub fn dew_point(relative_humidity: f64, temp: f64) -> f64 {
    let gamma = libm::log(relative_humidity / 100.0) + SONNTAG_B * temp / (SONNTAG_C + temp);
    SONNTAG_C * gamma / (SONNTAG_B - gamma)
}

/// Relative humidity (%) of air at `temp` (°C) with dew point `dew_point` (°C).
///
/// Inverse of [`dew_point`].
pub fn relative_humidity_from_dew_point(dew_point: f64, temp: f64) -> f64 {
    let gamma = dew_point * SONNTAG_B / (dew_point + SONNTAG_C);
    libm::exp(gamma - SONNTAG_B * temp / (SONNTAG_C + temp)) * 100.0
}
