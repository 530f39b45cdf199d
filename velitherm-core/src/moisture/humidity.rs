//! Relative humidity, specific humidity and mixing ratio
//!
//! The 622 factor (Mv/Md × 1000) is spelled `6.22` in one direction and
//! `0.622 × 1000` in the other. Both forms are kept as written so results
//! match published reference tables to the last decimal.

use super::saturation::water_vapor_saturation_pressure;

/// Relative humidity (%) of air with `specific_humidity` (g/kg) at
/// `pressure` (hPa) and `temp` (°C).
///
/// Not clamped: supersaturated input gives more than 100%.
pub fn relative_humidity(specific_humidity: f64, pressure: f64, temp: f64) -> f64 {
    specific_humidity / (6.22 * water_vapor_saturation_pressure(temp) / pressure)
}

/// Specific humidity (g/kg) of air with `relative_humidity` (%) at
/// `pressure` (hPa) and `temp` (°C).
pub fn specific_humidity(relative_humidity: f64, pressure: f64, temp: f64) -> f64 {
    relative_humidity / 100.0 * (0.622 * water_vapor_saturation_pressure(temp) / pressure) * 1000.0
}

/// Mixing ratio (g/kg) from specific humidity (g/kg).
pub fn mixing_ratio(specific_humidity: f64) -> f64 {
    specific_humidity / (1.0 - specific_humidity / 1000.0)
}

/// Specific humidity (g/kg) from mixing ratio (g/kg).
///
/// Exact inverse of [`mixing_ratio`].
pub fn specific_humidity_from_mixing_ratio(mixing_ratio: f64) -> f64 {
    mixing_ratio / (1.0 + mixing_ratio / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{P0, T0};

    #[test]
    fn saturated_standard_day() {
        // 15°C saturated at sea level holds about 10.5 g/kg
        let q = specific_humidity(100.0, P0, T0);
        assert!((q - 10.47).abs() < 0.01);
    }

    #[test]
    fn relative_and_specific_are_inverse() {
        for rh in [10.0, 45.0, 80.0, 100.0] {
            let q = specific_humidity(rh, 850.0, 8.0);
            assert!((relative_humidity(q, 850.0, 8.0) - rh).abs() < 1e-9);
        }
    }

    #[test]
    fn dry_air() {
        assert_eq!(specific_humidity(0.0, P0, T0), 0.0);
        assert_eq!(relative_humidity(0.0, P0, T0), 0.0);
        assert_eq!(mixing_ratio(0.0), 0.0);
    }

    #[test]
    fn mixing_ratio_exceeds_specific_humidity() {
        assert!(mixing_ratio(10.0) > 10.0);
        assert!((mixing_ratio(10.0) - 10.101).abs() < 1e-3);
    }

    #[test]
    fn mixing_ratio_round_trip() {
        for q in [0.5, 5.0, 12.0, 25.0, 50.0] {
            assert!((specific_humidity_from_mixing_ratio(mixing_ratio(q)) - q).abs() < 1e-12);
        }
    }
}
