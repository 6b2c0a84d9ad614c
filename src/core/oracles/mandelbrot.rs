use tracing::warn;

use crate::core::data::complex::Complex;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::errors::EngineConfigError;

/// Bounded-orbit membership test for the Mandelbrot set.
///
/// Iteration budget and escape radius are fixed when the oracle is built; callers only
/// choose the scale applied to each tested point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotOracle {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl Default for MandelbrotOracle {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            max_iterations: config.mandelbrot_iteration_budget,
            escape_radius_squared: config.mandelbrot_escape_radius_squared,
        }
    }
}

impl MandelbrotOracle {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineConfigError> {
        config.validate()?;

        Ok(Self {
            max_iterations: config.mandelbrot_iteration_budget,
            escape_radius_squared: config.mandelbrot_escape_radius_squared,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Whether `z * scale`, used as the parameter `c`, keeps `w <- w² + c` bounded.
    #[must_use]
    pub fn is_in_mandelbrot(&self, z: Complex, scale: f64) -> bool {
        self.escape_time(z.scale(scale)) == self.max_iterations
    }

    /// 0-based index of the iteration whose result first leaves the escape radius,
    /// or the iteration budget when the orbit of `c` stays bounded.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> u32 {
        let mut w = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            w = w * w + c;

            if !w.is_finite() {
                warn!(c = %c, iteration, "Mandelbrot iterate became non-finite");
                return iteration;
            }

            if w.magnitude_squared() > self.escape_radius_squared {
                return iteration;
            }
        }

        self.max_iterations
    }
}
