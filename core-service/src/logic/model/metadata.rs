//! Model Metadata
//!
//! Thông tin đi kèm artifact: checksum, thời điểm load, layout mà model mong đợi.
//! Sidecar JSON là tùy chọn; nếu có thì phải khớp layout đã compile.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RiskError, RiskResult};
use crate::logic::features::{
    hash_layout, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};

/// Default index of the at-risk class in the probability pair
pub const DEFAULT_POSITIVE_CLASS_INDEX: usize = 1;

// ============================================================================
// LOADED MODEL INFO
// ============================================================================

/// Describes the artifact a model handle was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub engine: String,
    pub size_bytes: u64,
    /// SHA-256 of the artifact bytes, hex
    pub checksum: String,
    pub feature_count: usize,
    pub positive_class_index: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Hex SHA-256 of raw artifact bytes
pub fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

// ============================================================================
// SIDECAR METADATA
// ============================================================================

/// Optional JSON written next to the exported model
///
/// ```json
/// { "feature_count": 25, "feature_version": 1, "layout_hash": 123,
///   "feature_names": ["age", ...], "positive_class_index": 1 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarMetadata {
    pub feature_count: Option<usize>,
    pub feature_version: Option<u8>,
    pub layout_hash: Option<u32>,
    pub feature_names: Option<Vec<String>>,
    pub positive_class_index: Option<usize>,
    /// Expected SHA-256 of the model file
    pub checksum: Option<String>,
}

impl SidecarMetadata {
    pub fn from_file(path: &Path) -> RiskResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let metadata = serde_json::from_str(&content)?;
        Ok(metadata)
    }

    /// Read the sidecar if it exists; a missing file is not an error
    pub fn load_optional(path: &Path) -> RiskResult<Option<Self>> {
        if !path.exists() {
            log::debug!("No model metadata at {}", path.display());
            return Ok(None);
        }
        log::info!("Loading model metadata from: {}", path.display());
        Self::from_file(path).map(Some)
    }

    /// Check the declared layout against the compiled one
    pub fn validate(&self) -> RiskResult<()> {
        if let Some(count) = self.feature_count {
            if count != FEATURE_COUNT {
                return Err(RiskError::InvalidFeatureVector {
                    expected: FEATURE_COUNT,
                    actual: count,
                });
            }
        }

        if let Some(names) = &self.feature_names {
            if names.len() != FEATURE_COUNT {
                return Err(RiskError::InvalidFeatureVector {
                    expected: FEATURE_COUNT,
                    actual: names.len(),
                });
            }
            if names.iter().zip(FEATURE_LAYOUT).any(|(a, b)| a != b) {
                let version = self.feature_version.unwrap_or(FEATURE_VERSION);
                return Err(LayoutMismatchError {
                    expected_version: FEATURE_VERSION,
                    expected_hash: hash_layout(FEATURE_VERSION, FEATURE_LAYOUT),
                    actual_version: version,
                    actual_hash: hash_layout(version, names),
                }
                .into());
            }
        }

        if let (Some(version), Some(hash)) = (self.feature_version, self.layout_hash) {
            validate_layout(version, hash)?;
        }

        if let Some(index) = self.positive_class_index {
            if index > 1 {
                return Err(RiskError::Config(format!(
                    "positive_class_index must be 0 or 1, got {}",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Compare the declared checksum, if any
    pub fn verify_checksum(&self, actual: &str) -> RiskResult<()> {
        match &self.checksum {
            Some(expected) if !expected.eq_ignore_ascii_case(actual) => Err(
                RiskError::ModelUnavailable(format!(
                    "Checksum mismatch: expected {}, got {}",
                    expected, actual
                )),
            ),
            _ => Ok(()),
        }
    }

    pub fn positive_class_index(&self) -> usize {
        self.positive_class_index.unwrap_or(DEFAULT_POSITIVE_CLASS_INDEX)
    }
}

/// `heart_model.onnx` → `heart_model.json`
pub fn default_metadata_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout_hash;
    use std::io::Write;

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(
            checksum(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_default_metadata_path() {
        let path = default_metadata_path(Path::new("models/heart_model.onnx"));
        assert_eq!(path, PathBuf::from("models/heart_model.json"));
    }

    #[test]
    fn test_empty_sidecar_is_valid() {
        let meta = SidecarMetadata::default();
        assert!(meta.validate().is_ok());
        assert_eq!(meta.positive_class_index(), 1);
    }

    #[test]
    fn test_matching_layout() {
        let meta = SidecarMetadata {
            feature_count: Some(25),
            feature_version: Some(FEATURE_VERSION),
            layout_hash: Some(layout_hash()),
            feature_names: Some(FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        };
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_wrong_feature_count() {
        let meta = SidecarMetadata {
            feature_count: Some(21),
            ..Default::default()
        };
        assert!(matches!(
            meta.validate(),
            Err(RiskError::InvalidFeatureVector { expected: 25, actual: 21 })
        ));
    }

    #[test]
    fn test_reordered_names() {
        let mut names: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        names.swap(0, 1);
        let meta = SidecarMetadata {
            feature_names: Some(names),
            ..Default::default()
        };
        assert!(matches!(meta.validate(), Err(RiskError::LayoutMismatch(_))));
    }

    #[test]
    fn test_stale_layout_hash() {
        let meta = SidecarMetadata {
            feature_version: Some(FEATURE_VERSION),
            layout_hash: Some(layout_hash() ^ 1),
            ..Default::default()
        };
        assert!(matches!(meta.validate(), Err(RiskError::LayoutMismatch(_))));
    }

    #[test]
    fn test_bad_positive_index() {
        let meta = SidecarMetadata {
            positive_class_index: Some(2),
            ..Default::default()
        };
        assert!(matches!(meta.validate(), Err(RiskError::Config(_))));
    }

    #[test]
    fn test_verify_checksum() {
        let meta = SidecarMetadata {
            checksum: Some(checksum(b"model").to_uppercase()),
            ..Default::default()
        };
        assert!(meta.verify_checksum(&checksum(b"model")).is_ok());
        assert!(matches!(
            meta.verify_checksum(&checksum(b"other")),
            Err(RiskError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_load_optional() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(SidecarMetadata::load_optional(&missing).unwrap().is_none());

        let path = dir.path().join("heart_model.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"feature_count": 25, "positive_class_index": 1}}"#).unwrap();

        let meta = SidecarMetadata::load_optional(&path).unwrap().unwrap();
        assert_eq!(meta.feature_count, Some(25));
        assert!(meta.feature_names.is_none());
    }

    #[test]
    fn test_load_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heart_model.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SidecarMetadata::load_optional(&path), Err(RiskError::Json(_))));
    }
}
