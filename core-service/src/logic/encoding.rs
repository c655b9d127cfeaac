//! Categorical Encoder
//!
//! Chuyển label dạng chuỗi (selectbox) sang integer code cho model.
//!
//! **CRITICAL: the tables below are part of the trained model's contract.**
//! The classifier was fitted with a label encoder that assigns codes in
//! lexicographic order of the labels, so every vocabulary is declared here
//! sorted and the code is the label's position. Reordering a table silently
//! corrupts predictions.

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

// ============================================================================
// VOCABULARIES (sorted = encoded order)
// ============================================================================

pub const SEX_LABELS: &[&str] = &["Female", "Male"];

pub const DIET_LABELS: &[&str] = &["Average", "Good", "Poor"];

pub const COUNTRY_LABELS: &[&str] = &[
    "Argentina", // 0
    "Canada",    // 1
    "France",    // 2
    "Germany",   // 3
    "India",     // 4
    "Thailand",  // 5
    "USA",       // 6
];

pub const CONTINENT_LABELS: &[&str] = &["Asia", "Europe", "North America", "South America"];

pub const HEMISPHERE_LABELS: &[&str] = &["Northern Hemisphere", "Southern Hemisphere"];

// ============================================================================
// FIELDS
// ============================================================================

/// Fixed-vocabulary form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    Sex,
    Diet,
    Country,
    Continent,
    Hemisphere,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::Sex,
        CategoricalField::Diet,
        CategoricalField::Country,
        CategoricalField::Continent,
        CategoricalField::Hemisphere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoricalField::Sex => "sex",
            CategoricalField::Diet => "diet",
            CategoricalField::Country => "country",
            CategoricalField::Continent => "continent",
            CategoricalField::Hemisphere => "hemisphere",
        }
    }

    /// Labels in encoded order
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            CategoricalField::Sex => SEX_LABELS,
            CategoricalField::Diet => DIET_LABELS,
            CategoricalField::Country => COUNTRY_LABELS,
            CategoricalField::Continent => CONTINENT_LABELS,
            CategoricalField::Hemisphere => HEMISPHERE_LABELS,
        }
    }
}

impl std::fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ENCODE
// ============================================================================

/// Encode a label of `field` into its trained integer code.
///
/// Matching is exact (case-sensitive), as the labels come from a selection
/// widget. Anything else is rejected instead of defaulted.
pub fn encode(field: CategoricalField, value: &str) -> RiskResult<u8> {
    field
        .vocabulary()
        .iter()
        .position(|&label| label == value)
        .map(|i| i as u8)
        .ok_or_else(|| RiskError::InvalidCategory {
            field: field.as_str(),
            value: value.to_string(),
        })
}

// ============================================================================
// TESTS
// ============================================================================
