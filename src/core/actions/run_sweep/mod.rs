//! Sweeps of the Gaussian Collatz engine over `beta` values and Mandelbrot scales.

pub mod aggregate;
pub mod galaxy_scan;
pub mod ports;
pub mod run_sweep;
pub mod run_sweep_rayon;
pub mod sweep_plan;
