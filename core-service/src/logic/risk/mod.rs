//! Risk Module
//!
//! Phân loại nguy cơ từ probability của model.
//! Đây là CORE STEP - nơi quyết định Low/Borderline/Intermediate/High.
//!
//! ## Structure
//! - `types`: RiskLevel, RiskAssessment
//! - `rules`: band thresholds
//! - `classifier`: encode → vector → model → band
//!
//! ## Usage
//! ```ignore
//! use heart_risk_core::logic::risk::RiskClassifier;
//!
//! let classifier = RiskClassifier::new(model);
//! let assessment = classifier.assess(&inputs)?;
//! println!("{}", assessment.message());
//! ```

pub mod types;
pub mod rules;
pub mod classifier;

pub use types::{RiskAssessment, RiskLevel, Severity};

pub use rules::{
    RiskThresholds,
    BORDERLINE_THRESHOLD,
    INTERMEDIATE_THRESHOLD,
    HIGH_THRESHOLD,
};

pub use classifier::{assess, assess_vector, classify_probability, to_percentage, RiskClassifier};
