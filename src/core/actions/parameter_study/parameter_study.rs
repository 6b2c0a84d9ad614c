use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::engine::config::EngineConfig;
use crate::core::engine::errors::EngineConfigError;
use crate::core::integer_collatz::generalized::{CollatzRule, DEFAULT_MAX_ITERATIONS};
use crate::core::integer_collatz::metrics::{CollatzMetrics, measure_collatz_behavior};
use crate::core::oracles::mandelbrot::MandelbrotOracle;
use crate::core::transforms::parameter_mapping::ParameterMapping;
use crate::core::util::pearson::pearson;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterStudyError {
    #[error("parameter study needs at least one sample")]
    NoSamples,

    #[error("largest parameter value must be at least 2, got {0}")]
    ParameterRangeTooSmall(i64),

    #[error("fixed multiplier must be positive, got {0}")]
    NonPositiveMultiplier(i64),

    #[error("start count must be at least 2, got {0}")]
    StartCountTooSmall(i64),

    #[error("invalid engine config: {0}")]
    EngineConfig(#[from] EngineConfigError),
}

/// Random `(a, b, c)` rules whose convergence rate is compared with the Mandelbrot
/// escape time of each mapped parameter point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterStudyConfig {
    pub samples: u32,
    pub max_param_value: i64,
    /// Pins the multiplier `b` instead of drawing it.
    pub fixed_multiplier: Option<i64>,
    /// Convergence is measured over the starting values `1..start_count`.
    pub start_count: i64,
    pub max_iterations: u32,
    pub seed: u64,
}

impl Default for ParameterStudyConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            max_param_value: 20,
            fixed_multiplier: None,
            start_count: 500,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: 2,
        }
    }
}

impl ParameterStudyConfig {
    pub fn validate(&self) -> Result<(), ParameterStudyError> {
        if self.samples == 0 {
            return Err(ParameterStudyError::NoSamples);
        }
        if self.max_param_value < 2 {
            return Err(ParameterStudyError::ParameterRangeTooSmall(
                self.max_param_value,
            ));
        }
        match self.fixed_multiplier {
            Some(multiplier) if multiplier <= 0 => {
                return Err(ParameterStudyError::NonPositiveMultiplier(multiplier));
            }
            _ => {}
        }
        if self.start_count < 2 {
            return Err(ParameterStudyError::StartCountTooSmall(self.start_count));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStudyRow {
    pub divisor: i64,
    pub multiplier: i64,
    pub adder: i64,
    pub metrics: CollatzMetrics,
    /// Escape time per mapping, aligned with [`ParameterMapping::ALL`]. `None` when the
    /// mapping is undefined for this rule.
    pub escape_times: Vec<Option<u32>>,
}

impl ParameterStudyRow {
    #[must_use]
    pub fn escape_time(&self, mapping: ParameterMapping) -> Option<u32> {
        ParameterMapping::ALL
            .iter()
            .position(|&m| m == mapping)
            .and_then(|index| self.escape_times.get(index).copied().flatten())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingCorrelation {
    pub mapping: ParameterMapping,
    /// Pearson r of convergence rate against escape time, `None` when undefined.
    pub r: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStudyReport {
    pub rows: Vec<ParameterStudyRow>,
    /// Largest `|r|` first whatever its sign, undefined correlations last.
    pub correlations: Vec<MappingCorrelation>,
}

pub fn run_parameter_study(
    study: &ParameterStudyConfig,
    engine_config: &EngineConfig,
) -> Result<ParameterStudyReport, ParameterStudyError> {
    study.validate()?;
    let oracle = MandelbrotOracle::new(engine_config)?;
    let mut rng = StdRng::seed_from_u64(study.seed);

    let rows: Vec<ParameterStudyRow> = (0..study.samples)
        .map(|index| {
            let divisor = rng.gen_range(2..=study.max_param_value);
            let multiplier = match study.fixed_multiplier {
                Some(multiplier) => multiplier,
                None => rng.gen_range(1..=study.max_param_value),
            };
            let adder = rng.gen_range(1..=study.max_param_value);

            let row = study_row(study, &oracle, divisor, multiplier, adder);
            debug!(
                sample = index + 1,
                divisor,
                multiplier,
                adder,
                convergence_rate = row.metrics.convergence_rate,
                "parameter study sample"
            );
            row
        })
        .collect();

    let correlations = correlate(&rows);

    Ok(ParameterStudyReport { rows, correlations })
}

fn study_row(
    study: &ParameterStudyConfig,
    oracle: &MandelbrotOracle,
    divisor: i64,
    multiplier: i64,
    adder: i64,
) -> ParameterStudyRow {
    let rule = CollatzRule {
        divisor: i128::from(divisor),
        multiplier: i128::from(multiplier),
        adder: i128::from(adder),
    };
    let metrics = measure_collatz_behavior(rule, 1..i128::from(study.start_count), study.max_iterations);

    let escape_times = ParameterMapping::ALL
        .iter()
        .map(|mapping| match mapping.map(divisor, multiplier, adder) {
            Ok(point) => Some(oracle.escape_time(point)),
            Err(error) => {
                warn!(%mapping, divisor, multiplier, adder, %error, "mapping undefined");
                None
            }
        })
        .collect();

    ParameterStudyRow {
        divisor,
        multiplier,
        adder,
        metrics,
        escape_times,
    }
}

fn correlate(rows: &[ParameterStudyRow]) -> Vec<MappingCorrelation> {
    let mut correlations: Vec<MappingCorrelation> = ParameterMapping::ALL
        .iter()
        .map(|&mapping| {
            let (rates, times): (Vec<f64>, Vec<f64>) = rows
                .iter()
                .filter_map(|row| {
                    row.escape_time(mapping)
                        .map(|time| (row.metrics.convergence_rate, f64::from(time)))
                })
                .unzip();

            MappingCorrelation {
                mapping,
                r: pearson(&rates, &times),
            }
        })
        .collect();

    correlations.sort_by(|a, b| match (a.r, b.r) {
        (Some(x), Some(y)) => y.abs().total_cmp(&x.abs()),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    correlations
}
