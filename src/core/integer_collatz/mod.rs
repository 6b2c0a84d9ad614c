//! Generalized integer Collatz rules `(a, b, c)` and their convergence statistics.

pub mod generalized;
pub mod metrics;
