use tracing::debug;

use crate::core::actions::run_sweep::aggregate::{SweepAggregate, aggregate_cell};
use crate::core::actions::run_sweep::sweep_plan::{SweepError, SweepPlan};
use crate::core::oracles::mandelbrot::MandelbrotOracle;

/// Runs every `(beta, scale)` cell of the plan, beta-major and scale-minor.
pub fn run_sweep(plan: &SweepPlan) -> Result<Vec<SweepAggregate>, SweepError> {
    plan.validate()?;

    let oracle = MandelbrotOracle::new(&plan.config)?;
    let samples = plan.samples();
    let mut rows = Vec::with_capacity(plan.cell_count());

    for beta in &plan.betas {
        let engine = plan.engine_for(beta)?;

        for &scale in &plan.scales {
            let aggregate = aggregate_cell(
                &engine,
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
            rows.push(aggregate);
        }
    }

    Ok(rows)
}
