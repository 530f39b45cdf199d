//! ICAO standard-atmosphere barometric formula

/// Scale altitude of the standard atmosphere (m)
pub(crate) const SCALE_ALTITUDE_M: f64 = 44330.0;

/// Barometric exponent of the standard atmosphere
const BAROMETRIC_EXPONENT: f64 = 5.255;

/// Altitude (m) of the isobar `pressure` (hPa) in the standard atmosphere.
///
/// `pressure0` is the sea-level pressure the altimeter is set to, normally
/// [`P0`](crate::P0) or the local QNH. Strictly decreasing in `pressure`.
///
/// No bounds checking: the fit is meant for roughly 1050 to 200 hPa.
pub fn altitude_from_standard_pressure(pressure: f64, pressure0: f64) -> f64 {
    SCALE_ALTITUDE_M * (1.0 - libm::pow(pressure / pressure0, 1.0 / BAROMETRIC_EXPONENT))
}

/// Pressure (hPa) at `altitude` (m) in the standard atmosphere.
///
/// Exact inverse of [`altitude_from_standard_pressure`]. Undefined (NaN) at
/// and above 44330m where the base of the power turns negative.
pub fn pressure_from_standard_altitude(altitude: f64, pressure0: f64) -> f64 {
    pressure0 * libm::pow(1.0 - altitude / SCALE_ALTITUDE_M, BAROMETRIC_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::P0;

    #[test]
    fn thousand_meters() {
        let altitude = altitude_from_standard_pressure(898.746, P0);
        assert!((altitude - 1000.0).abs() < 1.0);
    }

    #[test]
    fn sea_level_is_zero() {
        assert_eq!(altitude_from_standard_pressure(P0, P0), 0.0);
        assert_eq!(pressure_from_standard_altitude(0.0, P0), P0);
    }

    #[test]
    fn qnh_shifts_the_reference() {
        // With a high QNH the same isobar sits higher
        let low = altitude_from_standard_pressure(900.0, 1000.0);
        let high = altitude_from_standard_pressure(900.0, 1030.0);
        assert!(high > low);
    }

    #[test]
    fn round_trip() {
        for pressure in [1050.0, 1013.25, 850.0, 700.0, 500.0, 300.0, 200.0] {
            let altitude = altitude_from_standard_pressure(pressure, P0);
            let back = pressure_from_standard_altitude(altitude, P0);
            assert!((back - pressure).abs() < 1e-9, "{pressure} -> {altitude} -> {back}");
        }
    }

    #[test]
    fn above_ceiling_is_nan() {
        assert!(pressure_from_standard_altitude(50000.0, P0).is_nan());
    }

    #[test]
    fn ceiling_is_where_pressure_vanishes() {
        use crate::constants::atmosphere::STANDARD_ATMOSPHERE_CEILING_M;

        assert_eq!(STANDARD_ATMOSPHERE_CEILING_M, SCALE_ALTITUDE_M);
        assert_eq!(pressure_from_standard_altitude(STANDARD_ATMOSPHERE_CEILING_M, P0), 0.0);
        assert!(pressure_from_standard_altitude(STANDARD_ATMOSPHERE_CEILING_M + 1.0, P0).is_nan());
    }

    #[test]
    fn negative_pressure_is_nan() {
        assert!(altitude_from_standard_pressure(-10.0, P0).is_nan());
    }
}
