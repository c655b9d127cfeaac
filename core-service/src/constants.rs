//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default model location, only edit this file.

/// Default model artifact (ONNX export of the trained classifier)
pub const DEFAULT_MODEL_PATH: &str = "heart_model.onnx";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Heart Attack Risk Prediction";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("HEART_MODEL_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
}

/// Sidecar metadata path, `None` = derive from the model path
pub fn get_metadata_path() -> Option<String> {
    std::env::var("HEART_MODEL_METADATA_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Get log filter from environment or use default
pub fn get_log_level() -> String {
    std::env::var("HEART_LOG_LEVEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
