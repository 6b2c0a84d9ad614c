pub mod cli_sweep;
pub mod experiment_config;
