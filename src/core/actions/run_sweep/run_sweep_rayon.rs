use rayon::prelude::*;
use tracing::debug;

use crate::core::actions::run_sweep::aggregate::{SweepAggregate, aggregate_cell};
use crate::core::actions::run_sweep::sweep_plan::{SweepError, SweepPlan};
use crate::core::engine::gaussian_collatz::GaussianCollatz;
use crate::core::oracles::mandelbrot::MandelbrotOracle;

/// Runs the sweep with one rayon task per `(beta, scale)` cell.
///
/// Cells share no state, so the rows come back in the same beta-major order as
/// [`run_sweep`](crate::core::actions::run_sweep::run_sweep::run_sweep).
pub fn run_sweep_rayon(plan: &SweepPlan) -> Result<Vec<SweepAggregate>, SweepError> {
    plan.validate()?;

    let oracle = MandelbrotOracle::new(&plan.config)?;
    let samples = plan.samples();
    let engines: Vec<GaussianCollatz> = plan
        .betas
        .iter()
        .map(|beta| plan.engine_for(beta))
        .collect::<Result<_, _>>()?;

    let cells: Vec<(usize, f64)> = (0..plan.betas.len())
        .flat_map(|beta_index| plan.scales.iter().map(move |&scale| (beta_index, scale)))
        .collect();

    let rows = cells
        .into_par_iter()
        .map(|(beta_index, scale)| {
            let beta = &plan.betas[beta_index];
            let aggregate = aggregate_cell(
                &engines[beta_index],
                &oracle,
                &beta.label,
                beta.value,
                scale,
                &samples,
                plan.config.sink_precision,
            );

            debug!(
                beta = %beta.label,
                scale,
                matches = aggregate.matches,
                unique_sinks = aggregate.unique_sink_count(),
                "sweep cell complete"
            );
            aggregate
        })
        .collect();

    Ok(rows)
}
