//! Risk Types
//!
//! Core types cho risk classification.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Ordinal risk bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Borderline,
    Intermediate,
    High,
}

impl RiskLevel {
    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Borderline => "Borderline Risk",
            RiskLevel::Intermediate => "Intermediate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RiskLevel::Low => Severity::Success,
            RiskLevel::Borderline | RiskLevel::Intermediate => Severity::Warning,
            RiskLevel::High => Severity::Error,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",          // Green
            RiskLevel::Borderline => "#eab308",   // Yellow
            RiskLevel::Intermediate => "#f59e0b", // Amber
            RiskLevel::High => "#ef4444",         // Red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the result message is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Result of one prediction, discarded after display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Positive-class probability in percent (0 - 100)
    pub probability: f32,
    pub risk_level: RiskLevel,
}

impl RiskAssessment {
    /// "3.00%"
    pub fn probability_display(&self) -> String {
        format!("{:.2}%", self.probability)
    }

    /// Message as shown under the form
    pub fn message(&self) -> String {
        let sep = if self.risk_level == RiskLevel::High { '!' } else { '.' };
        format!(
            "{}{} Probability: {}",
            self.risk_level.label(),
            sep,
            self.probability_display()
        )
    }
}
