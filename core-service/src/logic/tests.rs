//! End-to-end tests: form → encoder → vector → stub model → risk band.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{RiskError, RiskResult};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use crate::logic::form::FormInputs;
use crate::logic::model::{ClassProbabilities, ProbabilityModel};
use crate::logic::risk::{RiskClassifier, RiskLevel};

/// Stub that records the last vector it was given
struct RecordingModel {
    positive: f32,
    last: Mutex<Option<Vec<f32>>>,
}

impl RecordingModel {
    fn new(positive: f32) -> Self {
        Self { positive, last: Mutex::new(None) }
    }
}

impl ProbabilityModel for RecordingModel {
    fn predict_probability(&self, features: &FeatureVector) -> RiskResult<ClassProbabilities> {
        *self.last.lock() = Some(features.as_slice().to_vec());
        ClassProbabilities::from_pair(&[1.0 - self.positive, self.positive], 1)
    }
}

/// Deterministic function of the input: scaled age
struct AgeModel;

impl ProbabilityModel for AgeModel {
    fn predict_probability(&self, features: &FeatureVector) -> RiskResult<ClassProbabilities> {
        let age = features.get_by_name("age").unwrap_or(0.0);
        let p = (age / 200.0).clamp(0.0, 1.0);
        ClassProbabilities::from_pair(&[1.0 - p, p], 1)
    }
}

/// Returns a malformed pair
struct TripleModel;

impl ProbabilityModel for TripleModel {
    fn predict_probability(&self, _features: &FeatureVector) -> RiskResult<ClassProbabilities> {
        ClassProbabilities::from_pair(&[0.2, 0.3, 0.5], 1)
    }
}

fn scenario_inputs() -> FormInputs {
    FormInputs {
        age: 50,
        sex: "Male".to_string(),
        cholesterol: 200,
        heart_rate: 70,
        exercise_hours: 5,
        diet: "Average".to_string(),
        stress: 5,
        sedentary_hours: 5.0,
        bmi: 25.0,
        triglycerides: 150,
        activity_days: 3,
        sleep_hours: 7,
        country: "USA".to_string(),
        continent: "North America".to_string(),
        hemisphere: "Northern Hemisphere".to_string(),
        systolic: 120,
        diastolic: 80,
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_low_risk() {
    let model = Arc::new(RecordingModel::new(0.03));
    let classifier = RiskClassifier::new(model.clone());

    let assessment = classifier.assess(&scenario_inputs()).unwrap();
    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert_eq!(assessment.risk_level.label(), "Low Risk");
    assert_eq!(assessment.probability_display(), "3.00%");

    let seen = model.last.lock().clone().unwrap();
    assert_eq!(seen.len(), FEATURE_COUNT);
    assert_eq!(
        &seen[..21],
        &[
            50.0f32, 1.0, 200.0, 70.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 5.0, 5.0, 25.0, 150.0, 3.0,
            7.0, 6.0, 2.0, 0.0, 120.0, 80.0,
        ]
    );
    assert_eq!(&seen[21..], &[0.0f32; 4]);
}

#[test]
fn test_idempotent_assessment() {
    let classifier = RiskClassifier::new(Arc::new(AgeModel));

    let first = classifier.assess(&scenario_inputs()).unwrap();
    for _ in 0..10 {
        assert_eq!(classifier.assess(&scenario_inputs()).unwrap(), first);
    }
    // 50 / 200 = 0.25 → 25%
    assert_eq!(first.risk_level, RiskLevel::High);
}

#[test]
fn test_bands_through_model() {
    let cases = [
        (0.0, RiskLevel::Low),
        (0.04, RiskLevel::Low),
        (0.06, RiskLevel::Borderline),
        (0.1, RiskLevel::Intermediate),
        (0.19, RiskLevel::Intermediate),
        (0.21, RiskLevel::High),
        (1.0, RiskLevel::High),
    ];

    for (p, expected) in cases {
        let classifier = RiskClassifier::new(Arc::new(RecordingModel::new(p)));
        let assessment = classifier.assess(&scenario_inputs()).unwrap();
        assert_eq!(assessment.risk_level, expected, "p = {}", p);
    }
}

#[test]
fn test_malformed_output_not_labelled() {
    let classifier = RiskClassifier::new(Arc::new(TripleModel));
    let err = classifier.assess(&scenario_inputs()).unwrap_err();
    assert!(matches!(err, RiskError::InvalidModelOutput(_)));
}
