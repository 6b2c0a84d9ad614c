use serde::{Deserialize, Serialize};

use crate::core::data::sink_key::{MAX_SINK_DECIMALS, SinkPrecision};
use crate::core::engine::errors::EngineConfigError;

pub const DEFAULT_ITERATION_BUDGET: u32 = 100;
pub const DEFAULT_BAILOUT_MAGNITUDE_SQUARED: f64 = 1_000_000.0;
pub const DEFAULT_MANDELBROT_ITERATION_BUDGET: u32 = 100;
pub const DEFAULT_MANDELBROT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Numeric constants shared by the engine, the Mandelbrot oracle and the HC lens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub iteration_budget: u32,
    pub bailout_magnitude_squared: f64,
    pub mandelbrot_iteration_budget: u32,
    pub mandelbrot_escape_radius_squared: f64,
    pub epsilon: f64,
    pub sink_precision: SinkPrecision,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            bailout_magnitude_squared: DEFAULT_BAILOUT_MAGNITUDE_SQUARED,
            mandelbrot_iteration_budget: DEFAULT_MANDELBROT_ITERATION_BUDGET,
            mandelbrot_escape_radius_squared: DEFAULT_MANDELBROT_ESCAPE_RADIUS_SQUARED,
            epsilon: DEFAULT_EPSILON,
            sink_precision: SinkPrecision::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.mandelbrot_iteration_budget == 0 {
            return Err(EngineConfigError::ZeroMandelbrotIterations);
        }

        if !(self.bailout_magnitude_squared.is_finite() && self.bailout_magnitude_squared > 0.0) {
            return Err(EngineConfigError::InvalidBailout(self.bailout_magnitude_squared));
        }

        if !(self.mandelbrot_escape_radius_squared.is_finite()
            && self.mandelbrot_escape_radius_squared > 0.0)
        {
            return Err(EngineConfigError::InvalidEscapeRadius(
                self.mandelbrot_escape_radius_squared,
            ));
        }

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(EngineConfigError::InvalidEpsilon(self.epsilon));
        }

        match self.sink_precision {
            SinkPrecision::Decimals(decimals) if decimals > MAX_SINK_DECIMALS => {
                return Err(EngineConfigError::SinkDecimalsTooLarge {
                    got: decimals,
                    max: MAX_SINK_DECIMALS,
                });
            }
            _ => {}
        }

        Ok(())
    }
}
