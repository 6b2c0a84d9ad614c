mod controllers;
mod core;
mod logging;
mod presenters;
mod storage;

pub use controllers::cli::sweep::cli_sweep::CliSweepController;
pub use controllers::cli::sweep::experiment_config::{ConfigError, ExperimentConfig};
pub use controllers::ports::sweep_presenter::SweepPresenterPort;
pub use logging::{InitError, init_tracing};
pub use presenters::file::csv::CsvFilePresenter;

pub use crate::core::actions::parameter_study::parameter_study::{
    MappingCorrelation, ParameterStudyConfig, ParameterStudyError, ParameterStudyReport,
    ParameterStudyRow, run_parameter_study,
};
pub use crate::core::actions::run_sweep::aggregate::{HcLens, SampleRecord, SweepAggregate};
pub use crate::core::actions::run_sweep::galaxy_scan::{GalaxyScan, GalaxyScanConfig, run_galaxy_scan};
pub use crate::core::actions::run_sweep::ports::orbit_engine::OrbitEngine;
pub use crate::core::actions::run_sweep::run_sweep::run_sweep;
pub use crate::core::actions::run_sweep::run_sweep_rayon::run_sweep_rayon;
pub use crate::core::actions::run_sweep::sweep_plan::{BetaSpec, SweepError, SweepPlan};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::orbit_outcome::OrbitOutcome;
pub use crate::core::data::sink_key::{SinkKey, SinkPrecision};
pub use crate::core::engine::config::EngineConfig;
pub use crate::core::engine::errors::EngineConfigError;
pub use crate::core::engine::gaussian_collatz::{AffineParameters, GaussianCollatz};
pub use crate::core::engine::parity::ParityRule;
pub use crate::core::integer_collatz::generalized::{
    CollatzInputError, CollatzRule, CollatzRun, CollatzStatus, generalized_collatz,
};
pub use crate::core::integer_collatz::metrics::{CollatzMetrics, measure_collatz_behavior};
pub use crate::core::oracles::mandelbrot::MandelbrotOracle;
pub use crate::core::transforms::hc::apply_hc;
pub use crate::core::transforms::parameter_mapping::{ParameterMapping, ParameterMappingError};
pub use crate::core::util::pearson::pearson;
pub use storage::unique_path::unique_path;
