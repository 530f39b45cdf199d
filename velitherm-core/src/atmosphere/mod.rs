//! Pressure ↔ altitude conversions
//!
//! ## Two models
//!
//! ### Standard atmosphere (QNH)
//!
//! The ICAO barometric formula assumes a fixed temperature profile:
//!
//! ```text
//! h = 44330 × (1 - (P/P₀)^(1/5.255))
//! P = P₀ × (1 - h/44330)^5.255
//! ```
//!
//! This is what an altimeter does. It ignores the real temperature of the day,
//! which is exactly why it is used: every aircraft makes the same error.
//!
//! ### Hypsometric (QFF)
//!
//! The hypsometric equation integrates the hydrostatic equation through an
//! isothermal column at the mean temperature of the layer:
//!
//! ```text
//! h = 29.3 × T(K) × ln(P₀/P)
//! ```
//!
//! With the real sea-level pressure and column temperature of the day, it
//! gives the geometric altitude rather than the altimeter reading.
//!
//! ### Flight levels
//!
//! A flight level is a standard-atmosphere altitude in hundreds of feet,
//! always referenced to [`P0`](crate::P0) whatever the actual sea-level
//! pressure.

mod flight_level;
mod hypsometric;
pub(crate) mod standard;

pub use flight_level::{fl_from_pressure, pressure_from_fl};
pub use hypsometric::{altitude_from_pressure, pressure_from_altitude};
pub use standard::{altitude_from_standard_pressure, pressure_from_standard_altitude};
