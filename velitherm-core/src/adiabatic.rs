//! Rising air parcels: lapse rates, cloud base and adiabatic expansion
//!
//! ## Physics Background
//!
//! A parcel of air rising in a thermal expands as the ambient pressure drops.
//! Without heat exchange with its surroundings (adiabatic) the expansion work
//! cools it:
//!
//! ```text
//! V = V₀ × (P₀/P)^(1/γ)
//! T = T₀ × (P/P₀)^((γ-1)/γ)        (Kelvin, γ = Cp/Cv = 1.4)
//! ```
//!
//! In the lower atmosphere this works out to the dry adiabatic lapse rate,
//! [`GAMMA`](crate::GAMMA) ≈ 9.8°C per 1000m. Once the parcel reaches its
//! dew point, condensation releases latent heat and the rate drops to the
//! moist adiabatic lapse rate, between ~4°C/1000m in warm air and almost the
//! dry rate in very cold air.
//!
//! The altitude where condensation starts is the lifted condensation level,
//! the base of the cumulus clouds a glider pilot climbs under.
//!
//! ```
//! use velitherm_core::{lcl, gamma_moist, GAMMA};
//!
//! assert!((lcl(25.0, 4.0) - 2660.7).abs() < 1.0);
//! assert!(gamma_moist(20.0, 1000.0) < GAMMA);
//! ```

use crate::constants::{physics::HCR, G, K};

/// Espy's constant as refined by Stull (m/°C)
const ESPY_COEFFICIENT: f64 = 126.7;

/// Lifted condensation level (m above the surface) of a parcel with
/// surface temperature `temp` (°C) and dew point `dew_point` (°C).
///
/// Espy's equation, no pressure dependence.
pub fn lcl(temp: f64, dew_point: f64) -> f64 {
    ESPY_COEFFICIENT * (temp - dew_point)
}

/// Moist adiabatic lapse rate (°C/m) of saturated air at `temp` (°C) and
/// `pressure` (hPa).
///
/// Uses its own Clausius–Clapeyron fit for the saturation pressure (Stull,
/// *Practical Meteorology*), not the Magnus–Tetens fit of
/// [`water_vapor_saturation_pressure`](crate::water_vapor_saturation_pressure).
/// The coefficients below are calibrated together.
pub fn gamma_moist(temp: f64, pressure: f64) -> f64 {
    let t_k = temp - K;
    let es = saturation_vapor_pressure(temp);
    let rs = 0.622 * es / (pressure - es);
    G * 1e-3 * (1.0 + 8711.0 * rs / t_k) / (1.0 + 1.35e7 * rs / (t_k * t_k))
}

/// Clausius–Clapeyron saturation vapor pressure (hPa) at `temp` (°C), the
/// fit [`gamma_moist`] is calibrated with.
pub(crate) fn saturation_vapor_pressure(temp: f64) -> f64 {
    6.113 * libm::exp(5423.0 * (-1.0 / K - 1.0 / (temp - K)))
}

/// Volume of a parcel of initial volume `volume0` expanded adiabatically from
/// `pressure0` to `pressure` (hPa). Any volume unit.
pub fn adiabatic_expansion(volume0: f64, pressure: f64, pressure0: f64) -> f64 {
    volume0 * libm::pow(pressure0 / pressure, 1.0 / HCR)
}

/// Temperature (°C) of a parcel at `temp0` (°C) expanded adiabatically from
/// `pressure0` to `pressure` (hPa).
pub fn adiabatic_cooling(temp0: f64, pressure: f64, pressure0: f64) -> f64 {
    (temp0 - K) * libm::pow(pressure / pressure0, (HCR - 1.0) / HCR) + K
}
