use serde::{Deserialize, Serialize};

use crate::logic::risk::RiskThresholds;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub layout: LayoutStatus,
    pub model: ModelStatus,
    pub thresholds: RiskThresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutStatus {
    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub engine: String, // "onnx" | custom
    pub loaded: bool,
    pub model_path: Option<String>,
    pub checksum: Option<String>,
    pub loaded_at: Option<String>,
}
