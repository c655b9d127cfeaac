//! Risk Bands & Thresholds
//!
//! Ngưỡng phân loại theo chuẩn y khoa (probability tính bằng %).
//! KHÔNG chứa logic classify - chỉ constants và config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Constants - không đổi lúc runtime)
// ============================================================================

/// At or above this = Borderline
pub const BORDERLINE_THRESHOLD: f32 = 5.0;

/// At or above this = Intermediate
pub const INTERMEDIATE_THRESHOLD: f32 = 7.5;

/// At or above this = High
pub const HIGH_THRESHOLD: f32 = 20.0;

/// Upper bound of the probability scale
pub const MAX_PROBABILITY: f32 = 100.0;

// ============================================================================
// EXPORTABLE VIEW
// ============================================================================

/// Band boundaries, for display/export only
///
/// Classification always uses the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub borderline_min: f32,
    pub intermediate_min: f32,
    pub high_min: f32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            borderline_min: BORDERLINE_THRESHOLD,
            intermediate_min: INTERMEDIATE_THRESHOLD,
            high_min: HIGH_THRESHOLD,
        }
    }
}
