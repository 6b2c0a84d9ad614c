pub mod parameter_study;
pub mod run_sweep;
