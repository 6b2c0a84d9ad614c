//! The Gaussian Collatz iteration: parity rule, branch transform and bailout loop.

pub mod config;
pub mod errors;
pub mod gaussian_collatz;
pub mod parity;
