//! Hypsometric equation for a real atmosphere
//!
//! Results are returned at full precision. Altitudes are not rounded to
//! whole meters, so a round trip reproduces the input pressure.

use crate::constants::K;

/// Rd/g of dry air (m/K)
const HYPSOMETRIC_COEFFICIENT: f64 = 29.3;

/// Altitude (m) of `pressure` (hPa) given the day's sea-level pressure
/// `pressure0` (hPa) and the mean column temperature `temp` (°C).
pub fn altitude_from_pressure(pressure: f64, pressure0: f64, temp: f64) -> f64 {
    HYPSOMETRIC_COEFFICIENT * (temp - K) * libm::log(pressure0 / pressure)
}

/// Pressure (hPa) at `altitude` (m) given the day's sea-level pressure
/// `pressure0` (hPa) and the mean column temperature `temp` (°C).
///
/// Exact inverse of [`altitude_from_pressure`].
pub fn pressure_from_altitude(altitude: f64, pressure0: f64, temp: f64) -> f64 {
    pressure0 / libm::exp(altitude / (HYPSOMETRIC_COEFFICIENT * (temp - K)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{altitude_from_standard_pressure, P0, T0};

    #[test]
    fn agrees_with_standard_atmosphere_low_down() {
        // Both models should be within a few meters near 1000m on a standard day
        let hypsometric = altitude_from_pressure(898.746, P0, T0);
        let standard = altitude_from_standard_pressure(898.746, P0);
        assert!((hypsometric - standard).abs() < 30.0);
    }

    #[test]
    fn warm_column_is_taller() {
        let cold = altitude_from_pressure(700.0, P0, -10.0);
        let warm = altitude_from_pressure(700.0, P0, 25.0);
        assert!(warm > cold);
    }

    #[test]
    fn not_rounded() {
        let altitude = altitude_from_pressure(900.0, 1020.0, 12.0);
        assert_ne!(altitude, libm::round(altitude));
    }

    #[test]
    fn round_trip() {
        for (pressure0, temp) in [(P0, T0), (990.0, -5.0), (1030.0, 30.0)] {
            for pressure in [1000.0, 850.0, 500.0, 250.0] {
                let altitude = altitude_from_pressure(pressure, pressure0, temp);
                let back = pressure_from_altitude(altitude, pressure0, temp);
                assert!((back - pressure).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn zero_pressure_is_infinite() {
        assert!(altitude_from_pressure(0.0, P0, T0).is_infinite());
    }
}
