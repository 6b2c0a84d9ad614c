use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::actions::parameter_study::parameter_study::ParameterStudyConfig;
use crate::core::actions::run_sweep::galaxy_scan::GalaxyScanConfig;
use crate::core::actions::run_sweep::sweep_plan::SweepPlan;

pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything one run of the binary does. Missing fields take their defaults; set
/// `galaxy_scan` to `null` to skip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub output_dir: PathBuf,
    pub sweep: SweepPlan,
    pub galaxy_scan: Option<GalaxyScanConfig>,
    pub parameter_study: Option<ParameterStudyConfig>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sweep: SweepPlan::default(),
            galaxy_scan: Some(GalaxyScanConfig::default()),
            parameter_study: None,
        }
    }
}

impl ExperimentConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
