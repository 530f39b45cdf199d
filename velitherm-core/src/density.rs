//! Density of moist air
//!
//! ## Physics Background
//!
//! Moist air is a mixture of two ideal gases. By Dalton's law the total
//! pressure splits into partial pressures, and each constituent obeys the
//! ideal gas law on its own:
//!
//! ```text
//! Pv = RH/100 × Psat(T)
//! Pd = P - Pv
//! ρ  = (Pd×Md + Pv×Mv) / (R×T)
//! ```
//!
//! Water vapor (18 g/mol) is lighter than dry air (29 g/mol), so by
//! Avogadro's law humid air is *less* dense than dry air at the same
//! pressure and temperature. This is part of why humid air masses make
//! better thermals.

use crate::constants::{K, MD, MV, R};
use crate::moisture::water_vapor_saturation_pressure;

/// hPa → Pa
const PA_PER_HPA: f64 = 100.0;

/// Density (kg/m³) of air with `relative_humidity` (%) at `pressure` (hPa)
/// and `temp` (°C).
pub fn air_density(relative_humidity: f64, pressure: f64, temp: f64) -> f64 {
    let psat = water_vapor_saturation_pressure(temp);
    let pv = relative_humidity / 100.0 * psat;
    let pd = pressure - pv;
    PA_PER_HPA * (pd * MD + pv * MV) / (R * (temp - K))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{P0, T0};

    #[test]
    fn dry_hot_day() {
        let rho = air_density(0.0, 1013.25, 35.0);
        assert!((rho - 1.1455).abs() < 1e-3);
    }

    #[test]
    fn standard_day() {
        // ISA sea-level density is 1.225 kg/m³
        let rho = air_density(0.0, P0, T0);
        assert!((rho - 1.225).abs() < 1e-3);
    }

    #[test]
    fn humid_air_is_lighter() {
        let dry = air_density(0.0, P0, 30.0);
        let humid = air_density(100.0, P0, 30.0);
        assert!(humid < dry);
    }

    #[test]
    fn thinner_aloft() {
        assert!(air_density(50.0, 700.0, 0.0) < air_density(50.0, P0, 0.0));
    }
}
