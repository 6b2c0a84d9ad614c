use std::collections::HashSet;

use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1_000_000;
pub const DIVERGENCE_LIMIT: i128 = 1_000_000_000_000_000_000_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollatzInputError {
    #[error("starting value must be positive, got {0}")]
    NonPositiveStart(i128),

    #[error("divisor must be positive, got {0}")]
    NonPositiveDivisor(i128),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollatzStatus {
    /// Reached 1.
    Converged,
    /// Exceeded [`DIVERGENCE_LIMIT`] or overflowed.
    Diverged,
    /// Revisited a value.
    Cycled,
    /// Ran out of iterations.
    MaxIterations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatzRun {
    pub sequence: Vec<i128>,
    pub status: CollatzStatus,
}

/// The integer rule `(a, b, c)`: divide by `a` when divisible, otherwise `b n + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollatzRule {
    pub divisor: i128,
    pub multiplier: i128,
    pub adder: i128,
}

impl CollatzRule {
    pub const STANDARD: Self = Self {
        divisor: 2,
        multiplier: 3,
        adder: 1,
    };

    /// Next value, or `None` when the odd branch overflows.
    ///
    /// Outside the standard `3n + 1` rule the odd branch divides out every factor of the
    /// divisor while the result stays positive.
    fn next(&self, current: i128) -> Option<i128> {
        if current % self.divisor == 0 {
            return Some(current / self.divisor);
        }

        let mut numerator = self
            .multiplier
            .checked_mul(current)?
            .checked_add(self.adder)?;

        if *self != Self::STANDARD {
            while numerator > 0 && numerator % self.divisor == 0 {
                numerator /= self.divisor;
            }
        }

        Some(numerator)
    }
}

pub fn generalized_collatz(
    start: i128,
    rule: CollatzRule,
    max_iterations: u32,
) -> Result<CollatzRun, CollatzInputError> {
    if start <= 0 {
        return Err(CollatzInputError::NonPositiveStart(start));
    }
    if rule.divisor <= 0 {
        return Err(CollatzInputError::NonPositiveDivisor(rule.divisor));
    }

    let mut sequence = vec![start];
    let mut visited = HashSet::from([start]);
    let mut current = start;

    for _ in 0..max_iterations {
        let next = match rule.next(current) {
            Some(next) if current <= DIVERGENCE_LIMIT => next,
            _ => {
                return Ok(CollatzRun {
                    sequence,
                    status: CollatzStatus::Diverged,
                });
            }
        };

        sequence.push(next);
        // revisits take precedence over reaching 1
        if !visited.insert(next) {
            return Ok(CollatzRun {
                sequence,
                status: CollatzStatus::Cycled,
            });
        }
        if next == 1 {
            return Ok(CollatzRun {
                sequence,
                status: CollatzStatus::Converged,
            });
        }
        current = next;
    }

    Ok(CollatzRun {
        sequence,
        status: CollatzStatus::MaxIterations,
    })
}
