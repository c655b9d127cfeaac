//! Inference Engine - ONNX Runtime Integration
//!
//! Load và chạy classifier đã train (export sang ONNX).
//! Model được load một lần lúc khởi động, sau đó chỉ đọc.

use std::path::Path;
use std::sync::Arc;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{Value, ValueType};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::metadata::{checksum, default_metadata_path, ModelInfo, SidecarMetadata};
use crate::error::{RiskError, RiskResult};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// Output name used by skl2onnx for class probabilities
pub const PROBABILITY_OUTPUT: &str = "probabilities";

/// Tolerance when checking that the pair sums to 1
const PROBABILITY_SUM_TOLERANCE: f32 = 1e-3;

// ============================================================================
// CLASS PROBABILITIES
// ============================================================================

/// Output of a binary classifier: [p_negative, p_positive]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub negative: f32,
    pub positive: f32,
}

impl ClassProbabilities {
    /// Build from the raw pair, `positive_index` picks the at-risk class
    pub fn from_pair(pair: &[f32], positive_index: usize) -> RiskResult<Self> {
        if pair.len() != 2 {
            return Err(RiskError::InvalidModelOutput(format!(
                "expected 2 class probabilities, got {}",
                pair.len()
            )));
        }
        if positive_index > 1 {
            return Err(RiskError::InvalidModelOutput(format!(
                "positive class index {} out of range",
                positive_index
            )));
        }

        for &p in pair {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(RiskError::InvalidModelOutput(format!(
                    "probability {} outside [0, 1]",
                    p
                )));
            }
        }

        let sum = pair[0] + pair[1];
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(RiskError::InvalidModelOutput(format!(
                "probabilities sum to {}, expected 1",
                sum
            )));
        }

        Ok(Self {
            negative: pair[1 - positive_index],
            positive: pair[positive_index],
        })
    }
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Seam to the opaque pre-trained classifier
///
/// Implementations must be deterministic for a given vector and must not
/// mutate observable state.
pub trait ProbabilityModel: Send + Sync {
    fn predict_probability(&self, features: &FeatureVector) -> RiskResult<ClassProbabilities>;

    /// Engine name for logs and reports
    fn engine(&self) -> &str {
        "custom"
    }
}

/// Handle shared by every prediction; loaded once, never replaced
pub type SharedModel = Arc<dyn ProbabilityModel>;

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime backed classifier
pub struct OnnxModel {
    // ort needs &mut Session to run
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    positive_class_index: usize,
    info: ModelInfo,
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("info", &self.info)
            .finish()
    }
}

impl OnnxModel {
    /// Load model and the sidecar next to it (`.json`), if any
    pub fn load(model_path: &Path) -> RiskResult<Self> {
        let metadata_path = default_metadata_path(model_path);
        Self::load_with_metadata(model_path, Some(&metadata_path))
    }

    /// Load model with an explicit sidecar path (`None` = no sidecar)
    pub fn load_with_metadata(model_path: &Path, metadata_path: Option<&Path>) -> RiskResult<Self> {
        log::info!("Loading ONNX model from: {}", model_path.display());
        let start_time = std::time::Instant::now();

        if !model_path.exists() {
            return Err(RiskError::ModelUnavailable(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let bytes = std::fs::read(model_path).map_err(|e| {
            RiskError::ModelUnavailable(format!("Failed to read {}: {}", model_path.display(), e))
        })?;
        let digest = checksum(&bytes);

        let sidecar = match metadata_path {
            Some(path) => SidecarMetadata::load_optional(path)?,
            None => None,
        }
        .unwrap_or_default();
        sidecar.validate()?;
        sidecar.verify_checksum(&digest)?;

        let session = Session::builder()
            .map_err(|e| RiskError::ModelUnavailable(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| RiskError::ModelUnavailable(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(&bytes)
            .map_err(|e| RiskError::ModelUnavailable(format!("Failed to load model: {}", e)))?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| RiskError::ModelUnavailable("No input defined".to_string()))?;
        let input_name = input.name.clone();

        // Last dimension is the feature axis: [batch, features]
        let input_width = match &input.input_type {
            ValueType::Tensor { shape, .. } => shape.last().copied(),
            other => {
                return Err(RiskError::ModelUnavailable(format!(
                    "Input '{}' is not a tensor: {:?}",
                    input_name, other
                )))
            }
        };
        check_input_width(input_width)?;

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name == PROBABILITY_OUTPUT)
            .or_else(|| session.outputs.last())
            .map(|o| o.name.clone())
            .ok_or_else(|| RiskError::ModelUnavailable("No output defined".to_string()))?;

        let info = ModelInfo {
            model_path: model_path.display().to_string(),
            engine: "onnx".to_string(),
            size_bytes: bytes.len() as u64,
            checksum: digest,
            feature_count: FEATURE_COUNT,
            positive_class_index: sidecar.positive_class_index(),
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "ONNX model loaded in {} ms ({} bytes, sha256 {}, input '{}', output '{}')",
            start_time.elapsed().as_millis(),
            info.size_bytes,
            &info.checksum[..12],
            input_name,
            output_name
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            positive_class_index: info.positive_class_index,
            info,
        })
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }
}

/// Reject a model whose fixed feature axis differs from the layout.
///
/// Dynamic (`-1`) or unknown widths are accepted; ONNX Runtime checks them
/// at run time.
pub fn check_input_width(width: Option<i64>) -> RiskResult<()> {
    match width {
        Some(w) if w > 0 && w as usize != FEATURE_COUNT => Err(RiskError::InvalidFeatureVector {
            expected: FEATURE_COUNT,
            actual: w as usize,
        }),
        _ => Ok(()),
    }
}

impl ProbabilityModel for OnnxModel {
    fn predict_probability(&self, features: &FeatureVector) -> RiskResult<ClassProbabilities> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.as_slice().to_vec())
            .map_err(|e| RiskError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| RiskError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| RiskError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| RiskError::InvalidModelOutput(format!("No output '{}'", self.output_name)))?;

        // A ZipMap output (sequence of maps) fails here; export with zipmap disabled
        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| RiskError::InvalidModelOutput(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;
        let pair = data.get(..2).ok_or_else(|| {
            RiskError::InvalidModelOutput(format!("expected 2 values, got {}", data.len()))
        })?;

        ClassProbabilities::from_pair(pair, self.positive_class_index)
    }

    fn engine(&self) -> &str {
        "onnx"
    }
}

// ============================================================================
// TESTS
// ============================================================================
