use std::ops::Range;

use rayon::prelude::*;

use crate::core::integer_collatz::generalized::{CollatzRule, CollatzStatus, generalized_collatz};

/// Share of starting values per termination status for one rule.
///
/// `divergence_rate` also counts runs that hit the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollatzMetrics {
    pub convergence_rate: f64,
    pub divergence_rate: f64,
    pub cycle_rate: f64,
    pub avg_steps_to_one: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct StatusCounts {
    converged: u64,
    cycled: u64,
    other: u64,
    converged_steps: u64,
}

impl StatusCounts {
    fn merge(self, other: Self) -> Self {
        Self {
            converged: self.converged + other.converged,
            cycled: self.cycled + other.cycled,
            other: self.other + other.other,
            converged_steps: self.converged_steps + other.converged_steps,
        }
    }
}

/// Runs the rule for every starting value in `starts`.
pub fn measure_collatz_behavior(
    rule: CollatzRule,
    starts: Range<i128>,
    max_iterations: u32,
) -> CollatzMetrics {
    let total = starts.end.saturating_sub(starts.start).max(0) as f64;
    if total == 0.0 {
        return CollatzMetrics::default();
    }

    let starts: Vec<i128> = starts.collect();
    let counts = starts
        .into_par_iter()
        .map(|start| {
            let mut counts = StatusCounts::default();
            match generalized_collatz(start, rule, max_iterations) {
                Ok(run) if run.status == CollatzStatus::Converged => {
                    counts.converged = 1;
                    counts.converged_steps = run.sequence.len() as u64;
                }
                Ok(run) if run.status == CollatzStatus::Cycled => counts.cycled = 1,
                _ => counts.other = 1,
            }
            counts
        })
        .reduce(StatusCounts::default, StatusCounts::merge);

    let avg_steps_to_one = if counts.converged > 0 {
        counts.converged_steps as f64 / counts.converged as f64
    } else {
        0.0
    };

    CollatzMetrics {
        convergence_rate: counts.converged as f64 / total,
        divergence_rate: counts.other as f64 / total,
        cycle_rate: counts.cycled as f64 / total,
        avg_steps_to_one,
    }
}
