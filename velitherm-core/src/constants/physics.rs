//! Physical constants of dry air and water vapor
//!
//! Values follow the conventions of soaring meteorology (Stull, *Practical
//! Meteorology*). Several formulas in this crate are empirical fits that were
//! calibrated against exactly these values, so changing one shifts results.

/// Standard gravity (m/s²).
///
/// Source: CGPM 1901, ISO 80000-3
pub const G: f64 = 9.80665;

/// Specific heat of dry air at constant pressure (J/(kg·K)).
pub const CP: f64 = 1003.5;

/// Latent heat of vaporization of water at 0°C (J/kg).
pub const L: f64 = 2.501e6;

/// Dry adiabatic lapse rate (°C/m).
///
/// Rate at which an unsaturated rising parcel cools, ≈ 9.76°C per 1000m.
pub const GAMMA: f64 = 0.00976;

/// Environmental lapse rate (°C/m).
///
/// Mean tropospheric temperature decrease of the standard atmosphere.
///
/// Source: ICAO Doc 7488
pub const ELR: f64 = 0.0065;

/// Specific gas constant of dry air (J/(kg·K)).
pub const RD: f64 = 287.058;

/// Specific gas constant of water vapor (J/(kg·K)).
pub const RV: f64 = 461.495;

/// Molar mass of dry air (kg/mol).
pub const MD: f64 = 0.0289652;

/// Molar mass of water vapor (kg/mol).
pub const MV: f64 = 0.018016;

/// Universal gas constant (J/(K·mol)).
pub const R: f64 = 8.31446;

/// Heat capacity ratio of air, Cp/Cv of a diatomic gas.
pub const HCR: f64 = 1.4;
