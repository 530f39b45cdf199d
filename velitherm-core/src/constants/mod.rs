//! Physical constants for atmospheric thermodynamics
//!
//! Constants are grouped by domain:
//! - **Physics**: gravity, gas constants, molar masses, heat capacities
//! - **Atmosphere**: reference state of the standard atmosphere and the
//!   calibration limits of the empirical fits
//! - **Units**: conversion factors
//!
//! All values are fixed at compile time. The common ones are re-exported at
//! the crate root under their short meteorological names (`G`, `CP`, `P0`, ...).

/// Fundamental physical constants of dry air and water vapor.
pub mod physics;

/// Standard-atmosphere reference state and formula calibration limits.
pub mod atmosphere;

/// Unit conversion factors.
pub mod units;

pub use physics::{CP, ELR, G, GAMMA, L, MD, MV, R, RD, RV};
pub use atmosphere::{K, P0, T0};
pub use units::FEET_PER_METER;
