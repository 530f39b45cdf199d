//! Shared traits

/// Trait for values that can be checked before entering a formula
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(5.0f32.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
