use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::actions::run_sweep::ports::orbit_engine::OrbitEngine;
use crate::core::data::complex::Complex;
use crate::core::data::orbit_outcome::OrbitOutcome;
use crate::core::engine::config::EngineConfig;
use crate::core::engine::errors::EngineConfigError;
use crate::core::engine::parity::ParityRule;

/// Multiplicative factor `alpha` and additive offset `beta` of the odd branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineParameters {
    pub alpha: Complex,
    pub beta: Complex,
}

/// Collatz-like iteration over the Gaussian plane.
///
/// Even points (under the engine's [`ParityRule`]) are mapped to
/// `((re + im) / 2, (im - re) / 2)`, odd points to `alpha * z + beta`.
/// Parameters are fixed for the lifetime of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianCollatz {
    params: AffineParameters,
    parity: ParityRule,
    config: EngineConfig,
}

impl GaussianCollatz {
    pub fn new(
        params: AffineParameters,
        parity: ParityRule,
        config: EngineConfig,
    ) -> Result<Self, EngineConfigError> {
        config.validate()?;

        Ok(Self {
            params,
            parity,
            config,
        })
    }

    #[must_use]
    pub fn with_defaults(alpha: Complex, beta: Complex) -> Self {
        Self {
            params: AffineParameters { alpha, beta },
            parity: ParityRule::default(),
            config: EngineConfig::default(),
        }
    }

    #[must_use]
    pub fn alpha(&self) -> Complex {
        self.params.alpha
    }

    #[must_use]
    pub fn beta(&self) -> Complex {
        self.params.beta
    }

    #[must_use]
    pub fn parity(&self) -> ParityRule {
        self.parity
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn is_even(&self, z: Complex) -> bool {
        self.parity.is_even(z)
    }

    #[must_use]
    pub fn step(&self, z: Complex) -> Complex {
        if self.is_even(z) {
            Complex {
                real: (z.real + z.imag) / 2.0,
                imag: (z.imag - z.real) / 2.0,
            }
        } else {
            self.params.alpha * z + self.params.beta
        }
    }

    /// Iterates from `start` for at most `iterations` steps.
    ///
    /// Stops at the first step whose result lies outside the bailout radius. A non-finite
    /// step result is logged and reported as an escape at that step.
    #[must_use]
    pub fn run_experiment(&self, start: Complex, iterations: u32) -> OrbitOutcome {
        let mut current = start;

        for iteration in 1..=iterations {
            current = self.step(current);

            if !current.is_finite() {
                warn!(
                    alpha = %self.params.alpha,
                    beta = %self.params.beta,
                    start = %start,
                    iteration,
                    "orbit produced a non-finite value"
                );
                return OrbitOutcome::Escaped {
                    point: current,
                    at_iteration: iteration,
                };
            }

            if current.magnitude_squared() > self.config.bailout_magnitude_squared {
                return OrbitOutcome::Escaped {
                    point: current,
                    at_iteration: iteration,
                };
            }
        }

        OrbitOutcome::Bounded(current)
    }
}

impl OrbitEngine for GaussianCollatz {
    fn run(&self, start: Complex) -> OrbitOutcome {
        self.run_experiment(start, self.config.iteration_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_engine(parity: ParityRule) -> GaussianCollatz {
        GaussianCollatz::new(
            AffineParameters {
                alpha: Complex::new(3.0, 0.0),
                beta: Complex::new(1.0, 0.0),
            },
            parity,
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            mandelbrot_iteration_budget: 0,
            ..EngineConfig::default()
        };
        let engine = GaussianCollatz::new(
            AffineParameters {
                alpha: Complex::new(3.0, 0.0),
                beta: Complex::new(1.0, 0.0),
            },
            ParityRule::default(),
            config,
        );

        assert_eq!(engine, Err(EngineConfigError::ZeroMandelbrotIterations));
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let engine = reference_engine(ParityRule::AbsoluteSum);

        for start in [
            Complex::new(7.0, 0.0),
            Complex::new(-2.5, 3.25),
            Complex::ZERO,
        ] {
            assert_eq!(engine.run_experiment(start, 0), OrbitOutcome::Bounded(start));
        }
    }

    #[test]
    fn test_even_step_is_half_rotation_of_raw_components() {
        let engine = reference_engine(ParityRule::AbsoluteSum);
        let z = Complex::new(-3.0, 1.0);

        assert!(engine.is_even(z));
        assert_eq!(engine.step(z), Complex::new(-1.0, 2.0));
    }

    #[test]
    fn test_odd_step_is_affine_map() {
        let engine = GaussianCollatz::with_defaults(Complex::new(2.0, 1.0), Complex::new(1.0, -1.0));
        let z = Complex::new(3.0, 0.0);

        // (2 + i)(3) + (1 - i) = 7 + 2i
        assert!(!engine.is_even(z));
        assert_eq!(engine.step(z), Complex::new(7.0, 2.0));

        // (2 + i)(1 + 2i) + (1 - i) = 0 + 5i + 1 - i = 1 + 4i
        let w = Complex::new(1.0, 2.0);
        assert!(!engine.is_even(w));
        assert_eq!(engine.step(w), Complex::new(1.0, 4.0));
    }

    #[test]
    fn test_parity_rule_picks_the_branch() {
        let z = Complex::new(-0.5, 2.5);
        let sum_based = reference_engine(ParityRule::SumBased);
        let absolute = reference_engine(ParityRule::AbsoluteSum);

        assert_eq!(sum_based.step(z), Complex::new(1.0, 1.5));
        assert_eq!(absolute.step(z), Complex::new(-0.5, 7.5));
    }

    #[test]
    fn test_reference_orbit_escapes() {
        let engine = reference_engine(ParityRule::AbsoluteSum);
        let outcome = engine.run_experiment(Complex::new(7.0, 0.0), 100);

        assert_eq!(
            outcome,
            OrbitOutcome::Escaped {
                point: Complex::new(1465.0, -1347.0),
                at_iteration: 38,
            }
        );
    }

    #[test]
    fn test_reference_orbit_bounded_with_small_budget() {
        let engine = reference_engine(ParityRule::AbsoluteSum);
        let outcome = engine.run_experiment(Complex::new(7.0, 0.0), 5);

        assert_eq!(outcome, OrbitOutcome::Bounded(Complex::new(-16.0, -17.0)));
    }

    #[test]
    fn test_run_is_deterministic() {
        let engine = reference_engine(ParityRule::AbsoluteSum);
        let start = Complex::new(7.0, 0.0);

        let first = engine.run(start).resting_point();
        let second = engine.run(start).resting_point();

        assert_eq!(first.real.to_bits(), second.real.to_bits());
        assert_eq!(first.imag.to_bits(), second.imag.to_bits());
    }

    #[test]
    fn test_run_uses_configured_budget() {
        let config = EngineConfig {
            iteration_budget: 5,
            ..EngineConfig::default()
        };
        let engine = GaussianCollatz::new(
            AffineParameters {
                alpha: Complex::new(3.0, 0.0),
                beta: Complex::new(1.0, 0.0),
            },
            ParityRule::AbsoluteSum,
            config,
        )
        .unwrap();

        assert_eq!(
            engine.run(Complex::new(7.0, 0.0)),
            OrbitOutcome::Bounded(Complex::new(-16.0, -17.0))
        );
    }

    #[test]
    fn test_bailout_is_checked_after_every_step() {
        let config = EngineConfig {
            bailout_magnitude_squared: 100.0,
            ..EngineConfig::default()
        };
        let engine = GaussianCollatz::new(
            AffineParameters {
                alpha: Complex::new(3.0, 0.0),
                beta: Complex::new(1.0, 0.0),
            },
            ParityRule::AbsoluteSum,
            config,
        )
        .unwrap();

        // 7 -> 22 escapes on the first step
        assert_eq!(
            engine.run_experiment(Complex::new(7.0, 0.0), 100),
            OrbitOutcome::Escaped {
                point: Complex::new(22.0, 0.0),
                at_iteration: 1,
            }
        );
    }

    #[test]
    fn test_non_finite_step_is_reported_as_escape() {
        let engine = GaussianCollatz::with_defaults(Complex::new(f64::MAX, 0.0), Complex::ZERO);
        let outcome = engine.run_experiment(Complex::new(3.0, 0.0), 10);

        assert_eq!(outcome.escaped_at(), Some(1));
        assert!(!outcome.resting_point().is_finite());
    }
}
