//! Surface observation of an air mass
//!
//! [`AirSample`] bundles the three readings a weather station or a
//! variometer reports, and derives what a soaring pilot wants from them.
//!
//! ```
//! use velitherm_core::AirSample;
//!
//! // Morning METAR: 24°C, dew point 9°C, QNH 1018
//! let sample = AirSample::from_dew_point(24.0, 1018.0, 9.0);
//! sample.validate()?;
//!
//! assert!((sample.cloud_base() - 1900.5).abs() < 1.0);
//! assert!(sample.relative_humidity < 50.0);
//! # Ok::<(), velitherm_core::ThermoError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    adiabatic,
    atmosphere,
    constants::{P0, T0},
    density,
    errors::ThermoResult,
    moisture,
    utils::{check_above, check_pressure, check_temperature, warn_outside},
};

/// Temperature, pressure and humidity at one point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirSample {
    /// Air temperature (°C)
    pub temp: f64,

    /// Static pressure (hPa)
    pub pressure: f64,

    /// Relative humidity (%)
    pub relative_humidity: f64,
}

impl Default for AirSample {
    /// Dry standard atmosphere at sea level
    fn default() -> Self {
        Self {
            temp: T0,
            pressure: P0,
            relative_humidity: 0.0,
        }
    }
}

impl AirSample {
    /// Create a sample from temperature (°C), pressure (hPa) and relative humidity (%)
    pub fn new(temp: f64, pressure: f64, relative_humidity: f64) -> Self {
        Self {
            temp,
            pressure,
            relative_humidity,
        }
    }

    /// Create a sample from a dew point (°C) instead of a relative humidity
    pub fn from_dew_point(temp: f64, pressure: f64, dew_point: f64) -> Self {
        Self::new(
            temp,
            pressure,
            moisture::relative_humidity_from_dew_point(dew_point, temp),
        )
    }

    /// Check every derived quantity of the sample is defined
    ///
    /// Relative humidity must be strictly positive: perfectly dry air has no
    /// dew point and no cloud base. Humidity above 100% (fog,
    /// supersaturation) is accepted with a warning.
    pub fn validate(&self) -> ThermoResult<()> {
        check_temperature(self.temp)?;
        check_pressure(self.pressure)?;
        let rh = check_above(self.relative_humidity, 0.0)?;
        warn_outside("relative humidity", rh, 0.0, 100.0);
        Ok(())
    }

    /// Dew point (°C)
    pub fn dew_point(&self) -> f64 {
        moisture::dew_point(self.relative_humidity, self.temp)
    }

    /// Partial pressure of water vapor (hPa)
    pub fn vapor_pressure(&self) -> f64 {
        self.relative_humidity / 100.0 * moisture::water_vapor_saturation_pressure(self.temp)
    }

    /// Specific humidity (g/kg)
    pub fn specific_humidity(&self) -> f64 {
        moisture::specific_humidity(self.relative_humidity, self.pressure, self.temp)
    }

    /// Mixing ratio (g/kg)
    pub fn mixing_ratio(&self) -> f64 {
        moisture::mixing_ratio(self.specific_humidity())
    }

    /// Air density (kg/m³)
    pub fn density(&self) -> f64 {
        density::air_density(self.relative_humidity, self.pressure, self.temp)
    }

    /// Height (m) above the sample where a lifted parcel condenses
    pub fn cloud_base(&self) -> f64 {
        adiabatic::lcl(self.temp, self.dew_point())
    }

    /// Moist adiabatic lapse rate (°C/m) at the sample
    pub fn gamma_moist(&self) -> f64 {
        adiabatic::gamma_moist(self.temp, self.pressure)
    }

    /// Pressure altitude (m): what an altimeter set to 1013.25 hPa shows
    pub fn pressure_altitude(&self) -> f64 {
        atmosphere::altitude_from_standard_pressure(self.pressure, P0)
    }

    /// Flight level of the sample, unrounded
    pub fn flight_level(&self) -> f64 {
        atmosphere::fl_from_pressure(self.pressure)
    }
}
