//! Feature Vector - Core data structure for ML input
//!
//! **Versioned feature vector with layout validation**
//!
//! Uses centralized layout from `layout.rs` for:
//! - Consistent feature ordering
//! - Version tracking
//! - Layout hash for compatibility checks

use serde::{Deserialize, Serialize};

use super::layout::{
    is_placeholder, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};
use crate::error::{RiskError, RiskResult};
use crate::logic::encoding::{encode, CategoricalField};
use crate::logic::form::FormInputs;

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
///
/// Placeholder slots (21-24) can never be written through this API, so they
/// stay 0 for every vector built here. Deserialization goes through
/// `from_slice` as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureVector")]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from a raw slice, e.g. a replayed log row.
    ///
    /// Length must match exactly and placeholders must be zero; nothing is
    /// padded or truncated.
    pub fn from_slice(values: &[f32]) -> RiskResult<Self> {
        if values.len() != FEATURE_COUNT {
            return Err(RiskError::InvalidFeatureVector {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }

        let mut vector = Self::new();
        for (i, &v) in values.iter().enumerate() {
            if is_placeholder(i) {
                if v != 0.0 {
                    return Err(RiskError::InvalidFeatureVector {
                        expected: FEATURE_COUNT,
                        actual: values.len(),
                    });
                }
                continue;
            }
            vector.values[i] = v;
        }
        Ok(vector)
    }

    /// Assemble the model input from raw form values
    pub fn from_inputs(inputs: &FormInputs) -> RiskResult<Self> {
        let vector = FeatureVectorBuilder::new()
            .age(inputs.age as f32)
            .sex(&inputs.sex)?
            .cholesterol(inputs.cholesterol as f32)
            .heart_rate(inputs.heart_rate as f32)
            .diabetes(inputs.diabetes as f32)
            .smoking(inputs.smoking as f32)
            .obesity(inputs.obesity as f32)
            .alcohol(inputs.alcohol as f32)
            .exercise_hours(inputs.exercise_hours as f32)
            .diet(&inputs.diet)?
            .stress(inputs.stress as f32)
            .sedentary_hours(inputs.sedentary_hours)
            .bmi(inputs.bmi)
            .triglycerides(inputs.triglycerides as f32)
            .activity_days(inputs.activity_days as f32)
            .sleep_hours(inputs.sleep_hours as f32)
            .country(&inputs.country)?
            .continent(&inputs.continent)?
            .hemisphere(&inputs.hemisphere)?
            .systolic(inputs.systolic as f32)
            .diastolic(inputs.diastolic as f32)
            .build();

        Ok(vector)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index. Placeholders and out-of-range indices are refused.
    pub fn set(&mut self, index: usize, value: f32) -> bool {
        if index < FEATURE_COUNT && !is_placeholder(index) {
            self.values[index] = value;
            true
        } else {
            false
        }
    }

    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        match super::layout::feature_index(name) {
            Some(index) => self.set(index, value),
            None => false,
        }
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values.to_vec(),
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

/// Wire shape of a stored vector, checked before it becomes a `FeatureVector`
#[derive(Deserialize)]
struct RawFeatureVector {
    version: u8,
    layout_hash: u32,
    values: Vec<f32>,
}

impl TryFrom<RawFeatureVector> for FeatureVector {
    type Error = RiskError;

    fn try_from(raw: RawFeatureVector) -> Result<Self, Self::Error> {
        let mut vector = Self::from_slice(&raw.values)?;
        // Keep the declared layout so validate() still catches stale rows
        vector.version = raw.version;
        vector.layout_hash = raw.layout_hash;
        Ok(vector)
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<f32>> for FeatureVector {
    type Error = RiskError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

// ============================================================================
// BUILDER PATTERN
// ============================================================================

/// Builder for creating FeatureVector with named setters
///
/// Categorical setters take the raw label and encode it.
pub struct FeatureVectorBuilder {
    vector: FeatureVector,
}

macro_rules! numeric_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: f32) -> Self {
                self.vector.set_by_name(stringify!($name), value);
                self
            }
        )*
    };
}

macro_rules! categorical_setters {
    ($($name:ident => $field:expr),* $(,)?) => {
        $(
            pub fn $name(mut self, label: &str) -> RiskResult<Self> {
                let code = encode($field, label)?;
                self.vector.set_by_name(stringify!($name), code as f32);
                Ok(self)
            }
        )*
    };
}

impl FeatureVectorBuilder {
    pub fn new() -> Self {
        Self { vector: FeatureVector::new() }
    }

    numeric_setters!(
        age,
        cholesterol,
        heart_rate,
        diabetes,
        smoking,
        obesity,
        alcohol,
        exercise_hours,
        stress,
        sedentary_hours,
        bmi,
        triglycerides,
        activity_days,
        sleep_hours,
        systolic,
        diastolic,
    );

    categorical_setters!(
        sex => CategoricalField::Sex,
        diet => CategoricalField::Diet,
        country => CategoricalField::Country,
        continent => CategoricalField::Continent,
        hemisphere => CategoricalField::Hemisphere,
    );

    pub fn build(self) -> FeatureVector {
        self.vector
    }
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
