//! Configuration module

use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{RiskError, RiskResult};
use crate::logic::model::metadata::default_metadata_path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Trained model artifact
    pub model_path: PathBuf,

    /// Sidecar metadata JSON (optional file)
    pub metadata_path: PathBuf,

    /// env_logger filter, e.g. "info" or "heart_risk_core=debug"
    pub log_level: String,
}

/// Load `.env` into the process environment.
///
/// Runs before the logger exists, so nothing is logged here; the caller logs
/// the returned path once logging is up. A missing file is not an error.
pub fn load_dotenv() -> RiskResult<Option<PathBuf>> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(result: Result<PathBuf, dotenvy::Error>) -> RiskResult<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(RiskError::Config(format!("Failed to read .env: {}", e))),
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Call [`load_dotenv`] first for `.env` values to be visible.
    pub fn from_env() -> RiskResult<Self> {
        let model_path = PathBuf::from(constants::get_model_path());
        let metadata_path = constants::get_metadata_path()
            .map(PathBuf::from)
            .unwrap_or_else(|| default_metadata_path(&model_path));

        Ok(Self {
            model_path,
            metadata_path,
            log_level: constants::get_log_level(),
        })
    }

    /// Config for an explicit model path, sidecar derived from it
    pub fn for_model(model_path: impl AsRef<Path>) -> Self {
        let model_path = model_path.as_ref().to_path_buf();
        Self {
            metadata_path: default_metadata_path(&model_path),
            model_path,
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
