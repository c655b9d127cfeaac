//! Model Module - AI/ML Inference Engine
//!
//! Tách logic inference khỏi phần encode/classify.
//! Classifier chỉ thấy trait `ProbabilityModel`, dễ swap model hoặc stub khi test.

pub mod inference;
pub mod metadata;

// Re-export common types
pub use inference::{ClassProbabilities, OnnxModel, ProbabilityModel, SharedModel};
pub use metadata::{ModelInfo, SidecarMetadata};
