use crate::core::data::complex::Complex;

/// Where an orbit of the Gaussian Collatz engine came to rest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OrbitOutcome {
    /// The iteration budget ran out while the orbit stayed inside the bailout radius.
    Bounded(Complex),
    /// The orbit left the bailout radius after `at_iteration` steps (1-based).
    Escaped { point: Complex, at_iteration: u32 },
}

impl OrbitOutcome {
    #[must_use]
    pub fn resting_point(&self) -> Complex {
        match *self {
            Self::Bounded(point) => point,
            Self::Escaped { point, .. } => point,
        }
    }

    #[must_use]
    pub fn is_escaped(&self) -> bool {
        matches!(self, Self::Escaped { .. })
    }

    #[must_use]
    pub fn escaped_at(&self) -> Option<u32> {
        match *self {
            Self::Bounded(_) => None,
            Self::Escaped { at_iteration, .. } => Some(at_iteration),
        }
    }
}
