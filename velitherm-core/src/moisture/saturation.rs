//! Saturation vapor pressure over water

/// Saturation vapor pressure at 0°C (hPa)
const MAGNUS_E0: f64 = 6.1078;
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.3;

/// Saturation pressure (hPa) of water vapor at `temp` (°C).
///
/// Magnus–Tetens approximation:
///
/// ```text
/// Psat = 6.1078 × exp(17.27 × T / (T + 237.3))
/// ```
///
/// Accurate from about -40°C to +50°C. Outside that range the result is
/// returned as computed.
pub fn water_vapor_saturation_pressure(temp: f64) -> f64 {
    MAGNUS_E0 * libm::exp(MAGNUS_A * temp / (temp + MAGNUS_B))
}
