//! Risk Classifier
//!
//! Input: FormInputs (giá trị thô), Output: RiskAssessment.
//! Encode → vector → model → % → band. Không giữ state giữa các lần gọi.

use super::rules::{BORDERLINE_THRESHOLD, HIGH_THRESHOLD, INTERMEDIATE_THRESHOLD};
use super::types::{RiskAssessment, RiskLevel};
use crate::error::RiskResult;
use crate::logic::features::FeatureVector;
use crate::logic::form::FormInputs;
use crate::logic::model::{ProbabilityModel, SharedModel};

// ============================================================================
// BANDING
// ============================================================================

/// Map a percentage to its band.
///
/// Bands are left-closed, right-open and checked in ascending order, so a
/// boundary value belongs to the band it opens (5.0 → Borderline).
pub fn classify_probability(probability: f32) -> RiskLevel {
    if probability < BORDERLINE_THRESHOLD {
        RiskLevel::Low
    } else if probability < INTERMEDIATE_THRESHOLD {
        RiskLevel::Borderline
    } else if probability < HIGH_THRESHOLD {
        RiskLevel::Intermediate
    } else {
        RiskLevel::High
    }
}

/// Model probability (0-1) → percent
pub fn to_percentage(probability: f32) -> f32 {
    probability * 100.0
}

// ============================================================================
// ASSESS
// ============================================================================

/// One-shot assessment against any model
pub fn assess(model: &dyn ProbabilityModel, inputs: &FormInputs) -> RiskResult<RiskAssessment> {
    let vector = FeatureVector::from_inputs(inputs)?;
    assess_vector(model, &vector)
}

/// Assessment from an already assembled vector
pub fn assess_vector(model: &dyn ProbabilityModel, vector: &FeatureVector) -> RiskResult<RiskAssessment> {
    vector.validate()?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Features: {}", vector.to_log_entry());
    }

    let start_time = std::time::Instant::now();
    let probabilities = model.predict_probability(vector)?;
    let inference_time_us = start_time.elapsed().as_micros() as u64;

    let probability = to_percentage(probabilities.positive);
    let risk_level = classify_probability(probability);

    log::debug!(
        "Assessed via {}: p={:.4} -> {:.2}% ({}) in {} us",
        model.engine(),
        probabilities.positive,
        probability,
        risk_level,
        inference_time_us
    );

    Ok(RiskAssessment {
        probability,
        risk_level,
    })
}

/// Classifier bound to the process-wide model handle
#[derive(Clone)]
pub struct RiskClassifier {
    model: SharedModel,
}

impl RiskClassifier {
    pub fn new(model: SharedModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn ProbabilityModel {
        self.model.as_ref()
    }

    pub fn assess(&self, inputs: &FormInputs) -> RiskResult<RiskAssessment> {
        assess(self.model.as_ref(), inputs)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;
    use crate::logic::model::ClassProbabilities;
    use std::sync::Arc;

    /// Returns the same positive probability for every vector
    struct FixedModel(f32);

    impl ProbabilityModel for FixedModel {
        fn predict_probability(&self, _features: &FeatureVector) -> RiskResult<ClassProbabilities> {
            ClassProbabilities::from_pair(&[1.0 - self.0, self.0], 1)
        }
    }

    struct BrokenModel;

    impl ProbabilityModel for BrokenModel {
        fn predict_probability(&self, _features: &FeatureVector) -> RiskResult<ClassProbabilities> {
            Err(RiskError::ModelUnavailable("artifact missing".to_string()))
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_probability(0.0), RiskLevel::Low);
        assert_eq!(classify_probability(4.999), RiskLevel::Low);
        assert_eq!(classify_probability(5.0), RiskLevel::Borderline);
        assert_eq!(classify_probability(7.499), RiskLevel::Borderline);
        assert_eq!(classify_probability(7.5), RiskLevel::Intermediate);
        assert_eq!(classify_probability(19.999), RiskLevel::Intermediate);
        assert_eq!(classify_probability(20.0), RiskLevel::High);
        assert_eq!(classify_probability(100.0), RiskLevel::High);
    }

    #[test]
    fn test_bands_monotonic() {
        let mut previous = RiskLevel::Low;
        for i in 0..=1000 {
            let level = classify_probability(i as f32 / 10.0);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_assess_low() {
        let result = assess(&FixedModel(0.03), &FormInputs::default()).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.probability_display(), "3.00%");
    }

    #[test]
    fn test_assess_high() {
        let result = assess(&FixedModel(0.5), &FormInputs::default()).unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.probability_display(), "50.00%");
    }

    #[test]
    fn test_model_error_propagates() {
        let err = assess(&BrokenModel, &FormInputs::default()).unwrap_err();
        assert!(matches!(err, RiskError::ModelUnavailable(_)));
    }

    #[test]
    fn test_invalid_category_never_reaches_model() {
        let inputs = FormInputs {
            sex: "Unknown".to_string(),
            ..Default::default()
        };
        let err = assess(&BrokenModel, &inputs).unwrap_err();
        assert!(matches!(err, RiskError::InvalidCategory { field: "sex", .. }));
    }

    #[test]
    fn test_stale_vector_rejected() {
        let mut vector = FeatureVector::new();
        vector.layout_hash ^= 1;
        let err = assess_vector(&FixedModel(0.1), &vector).unwrap_err();
        assert!(matches!(err, RiskError::LayoutMismatch(_)));
    }

    #[test]
    fn test_assess_vector_direct() {
        let vector = FeatureVector::from_inputs(&FormInputs::default()).unwrap();
        let result = assess_vector(&FixedModel(0.06), &vector).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Borderline);
        assert_eq!(result.probability_display(), "6.00%");
    }

    #[test]
    fn test_classifier_shared_handle() {
        let classifier = RiskClassifier::new(Arc::new(FixedModel(0.1)));
        let other = classifier.clone();

        let a = classifier.assess(&FormInputs::default()).unwrap();
        let b = other.assess(&FormInputs::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.risk_level, RiskLevel::Intermediate);
        assert_eq!(classifier.model().engine(), "custom");
    }
}
