//! Error handling
//!
//! Một enum lỗi duy nhất cho toàn bộ pipeline encode → vector → model → risk.

use thiserror::Error;

use crate::logic::features::LayoutMismatchError;

pub type RiskResult<T> = Result<T, RiskError>;

#[derive(Debug, Error)]
pub enum RiskError {
    // Input errors
    #[error("Invalid category for {field}: {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    // Model errors
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid feature vector: expected {expected} features, got {actual}")]
    InvalidFeatureVector { expected: usize, actual: usize },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    // Environment errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    /// Stable machine-readable code for the command layer
    pub fn code(&self) -> &'static str {
        match self {
            RiskError::InvalidCategory { .. } => "invalid_category",
            RiskError::OutOfRange { .. } => "out_of_range",
            RiskError::ModelUnavailable(_) => "model_unavailable",
            RiskError::InvalidFeatureVector { .. } => "invalid_feature_vector",
            RiskError::LayoutMismatch(_) => "layout_mismatch",
            RiskError::InvalidModelOutput(_) => "invalid_model_output",
            RiskError::Inference(_) => "inference_failed",
            RiskError::Config(_) => "config",
            RiskError::Io(_) => "io",
            RiskError::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_message() {
        let err = RiskError::InvalidCategory {
            field: "sex",
            value: "Other".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid category for sex: \"Other\"");
        assert_eq!(err.code(), "invalid_category");
    }

    #[test]
    fn test_feature_vector_message() {
        let err = RiskError::InvalidFeatureVector { expected: 25, actual: 21 };
        assert_eq!(
            err.to_string(),
            "Invalid feature vector: expected 25 features, got 21"
        );
    }
}
