use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::actions::run_sweep::aggregate::{
    HcLens, SampleRecord, SweepAggregate, aggregate_records, scan_samples,
};
use crate::core::actions::run_sweep::sweep_plan::{BetaSpec, SweepError, SweepPlan};
use crate::core::data::complex::Complex;
use crate::core::oracles::mandelbrot::MandelbrotOracle;
use crate::core::transforms::hc::DEFAULT_HC_CONSTANT;

pub const DEFAULT_GALAXY_SCALE: f64 = 0.0001;

/// A single `(beta, scale)` cell kept at per-sample resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyScanConfig {
    pub beta: BetaSpec,
    pub scale: f64,
    /// Adds the HC image of every resting point to the rows.
    pub hc_lens: bool,
    pub hc_constant: f64,
}

impl Default for GalaxyScanConfig {
    fn default() -> Self {
        Self {
            beta: BetaSpec::from_value(Complex::new(1.0, 1.0)),
            scale: DEFAULT_GALAXY_SCALE,
            hc_lens: true,
            hc_constant: DEFAULT_HC_CONSTANT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyScan {
    pub records: Vec<SampleRecord>,
    pub aggregate: SweepAggregate,
}

/// Runs the plan's alpha, parity and samples through one `beta` at one scale,
/// keeping every per-sample row.
pub fn run_galaxy_scan(plan: &SweepPlan, scan: &GalaxyScanConfig) -> Result<GalaxyScan, SweepError> {
    plan.validate()?;
    if !scan.scale.is_finite() {
        return Err(SweepError::NonFiniteScale(scan.scale));
    }
    if !scan.beta.value.is_finite() {
        return Err(SweepError::NonFiniteParameter {
            name: format!("beta {}", scan.beta.label),
            value: scan.beta.value,
        });
    }
    if !scan.hc_constant.is_finite() {
        return Err(SweepError::NonFiniteParameter {
            name: "hc_constant".to_string(),
            value: Complex::new(scan.hc_constant, 0.0),
        });
    }

    let engine = plan.engine_for(&scan.beta)?;
    let oracle = MandelbrotOracle::new(&plan.config)?;
    let lens = scan.hc_lens.then_some(HcLens {
        c_const: scan.hc_constant,
        epsilon: plan.config.epsilon,
    });

    let records = scan_samples(&engine, &oracle, scan.scale, &plan.samples(), lens);
    let aggregate = aggregate_records(
        &scan.beta.label,
        scan.beta.value,
        scan.scale,
        &records,
        plan.config.sink_precision,
    );

    info!(
        beta = %scan.beta.label,
        scale = scan.scale,
        samples = records.len(),
        unique_sinks = aggregate.unique_sink_count(),
        "galaxy scan complete"
    );

    Ok(GalaxyScan { records, aggregate })
}
