use crate::core::data::complex::Complex;
use crate::core::data::orbit_outcome::OrbitOutcome;

pub trait OrbitEngine {
    fn run(&self, start: Complex) -> OrbitOutcome;
}
