use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::errors::EngineConfigError;
use crate::core::engine::gaussian_collatz::{AffineParameters, GaussianCollatz};
use crate::core::engine::parity::ParityRule;

pub const DEFAULT_SAMPLE_SIZE: u32 = 1000;
pub const DEFAULT_SCALES: [f64; 3] = [0.001, 0.0001, 0.00001];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("sweep needs at least one beta value")]
    NoBetas,

    #[error("sweep needs at least one Mandelbrot scale")]
    NoScales,

    #[error("sample size must be greater than zero")]
    ZeroSampleSize,

    #[error("Mandelbrot scale must be finite, got {0}")]
    NonFiniteScale(f64),

    #[error("engine parameter {name} must be finite, got {value}")]
    NonFiniteParameter { name: String, value: Complex },

    #[error("invalid engine config: {0}")]
    EngineConfig(#[from] EngineConfigError),
}

/// A labelled value of the additive offset `beta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaSpec {
    pub label: String,
    pub value: Complex,
}

impl BetaSpec {
    #[must_use]
    pub fn from_value(value: Complex) -> Self {
        Self {
            label: value.to_string(),
            value,
        }
    }
}

/// Grid of `beta` values crossed with Mandelbrot scales, run over the integer
/// starting points `1..=sample_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepPlan {
    pub alpha: Complex,
    pub betas: Vec<BetaSpec>,
    pub scales: Vec<f64>,
    pub sample_size: u32,
    pub parity: ParityRule,
    pub config: EngineConfig,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            alpha: Complex::new(3.0, 0.0),
            betas: vec![
                BetaSpec::from_value(Complex::new(1.0, 0.0)),
                BetaSpec::from_value(Complex::new(2.0, 0.0)),
                BetaSpec::from_value(Complex::new(1.0, 1.0)),
            ],
            scales: DEFAULT_SCALES.to_vec(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            parity: ParityRule::default(),
            config: EngineConfig::default(),
        }
    }
}

impl SweepPlan {
    pub fn validate(&self) -> Result<(), SweepError> {
        self.config.validate()?;

        if self.betas.is_empty() {
            return Err(SweepError::NoBetas);
        }
        if self.scales.is_empty() {
            return Err(SweepError::NoScales);
        }
        if self.sample_size == 0 {
            return Err(SweepError::ZeroSampleSize);
        }
        if let Some(&scale) = self.scales.iter().find(|scale| !scale.is_finite()) {
            return Err(SweepError::NonFiniteScale(scale));
        }
        if !self.alpha.is_finite() {
            return Err(SweepError::NonFiniteParameter {
                name: "alpha".to_string(),
                value: self.alpha,
            });
        }
        if let Some(beta) = self.betas.iter().find(|beta| !beta.value.is_finite()) {
            return Err(SweepError::NonFiniteParameter {
                name: format!("beta {}", beta.label),
                value: beta.value,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn samples(&self) -> Vec<Complex> {
        (1..=i64::from(self.sample_size))
            .map(Complex::from_integer)
            .collect()
    }

    pub fn engine_for(&self, beta: &BetaSpec) -> Result<GaussianCollatz, SweepError> {
        let params = AffineParameters {
            alpha: self.alpha,
            beta: beta.value,
        };

        Ok(GaussianCollatz::new(params, self.parity, self.config)?)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.betas.len() * self.scales.len()
    }
}
