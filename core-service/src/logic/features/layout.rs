//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The order below is the training-time column order of the classifier.
//! It is not documented anywhere else; the model only sees positions.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Demographics / vitals (0-3) ===
    "age",                   // 0
    "sex",                   // 1: encoded
    "cholesterol",           // 2
    "heart_rate",            // 3

    // === Risk flags (4-7) ===
    "diabetes",              // 4
    "smoking",               // 5
    "obesity",               // 6
    "alcohol",               // 7

    // === Lifestyle (8-15) ===
    "exercise_hours",        // 8
    "diet",                  // 9: encoded
    "stress",                // 10
    "sedentary_hours",       // 11
    "bmi",                   // 12
    "triglycerides",         // 13
    "activity_days",         // 14
    "sleep_hours",           // 15

    // === Geography (16-18) ===
    "country",               // 16: encoded
    "continent",             // 17: encoded
    "hemisphere",            // 18: encoded

    // === Blood pressure (19-20) ===
    "systolic",              // 19
    "diastolic",             // 20

    // === Placeholders (21-24), always 0 ===
    "feature4",              // 21
    "feature5",              // 22
    "feature6",              // 23
    "feature7",              // 24
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 25;

/// Features actually collected by the form
pub const REAL_FEATURE_COUNT: usize = 21;

/// Trailing placeholder slots the model expects but nobody fills
pub const PLACEHOLDER_COUNT: usize = FEATURE_COUNT - REAL_FEATURE_COUNT;

const _: () = assert!(FEATURE_LAYOUT.len() == FEATURE_COUNT);

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    hash_layout(FEATURE_VERSION, FEATURE_LAYOUT)
}

/// Hash any version + ordered name list the same way as the compiled layout
pub fn hash_layout<S: AsRef<str>>(version: u8, names: &[S]) -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[version]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a declared layout matches the compiled one
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

pub fn is_placeholder(index: usize) -> bool {
    (REAL_FEATURE_COUNT..FEATURE_COUNT).contains(&index)
}

// ============================================================================
// TESTS
// ============================================================================
