//! Integration Tests for Feature Assembly
//!
//! Form → encoder → vector, kiểm tra đúng thứ tự training.

#[cfg(test)]
mod integration_tests {
    use crate::error::RiskError;
    use crate::logic::features::{FeatureVector, FEATURE_COUNT, REAL_FEATURE_COUNT};
    use crate::logic::form::FormInputs;

    fn scenario_inputs() -> FormInputs {
        FormInputs {
            age: 50,
            sex: "Male".to_string(),
            cholesterol: 200,
            heart_rate: 70,
            diabetes: 0,
            smoking: 0,
            obesity: 0,
            alcohol: 0,
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
        }
    }

    /// Thứ tự phải khớp đúng cột lúc train
    #[test]
    fn test_scenario_vector_order() {
        let vector = FeatureVector::from_inputs(&scenario_inputs()).unwrap();

        let expected: [f32; FEATURE_COUNT] = [
            50.0,  // age
            1.0,   // sex: Male
            200.0, // cholesterol
            70.0,  // heart_rate
            0.0, 0.0, 0.0, 0.0, // diabetes, smoking, obesity, alcohol
            5.0,   // exercise_hours
            0.0,   // diet: Average
            5.0,   // stress
            5.0,   // sedentary_hours
            25.0,  // bmi
            150.0, // triglycerides
            3.0,   // activity_days
            7.0,   // sleep_hours
            6.0,   // country: USA
            2.0,   // continent: North America
            0.0,   // hemisphere: Northern
            120.0, // systolic
            80.0,  // diastolic
            0.0, 0.0, 0.0, 0.0, // placeholders
        ];

        assert_eq!(vector.as_array(), &expected);
    }

    #[test]
    fn test_placeholders_always_zero() {
        let inputs = FormInputs {
            age: 90,
            diabetes: 1,
            smoking: 1,
            obesity: 1,
            alcohol: 1,
            bmi: 50.0,
            triglycerides: 800,
            country: "Thailand".to_string(),
            continent: "Asia".to_string(),
            hemisphere: "Southern Hemisphere".to_string(),
            ..scenario_inputs()
        };

        let vector = FeatureVector::from_inputs(&inputs).unwrap();
        assert_eq!(vector.len(), FEATURE_COUNT);
        assert!(vector.as_slice()[REAL_FEATURE_COUNT..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_unknown_label_stops_assembly() {
        let inputs = FormInputs {
            diet: "Excellent".to_string(),
            ..scenario_inputs()
        };

        match FeatureVector::from_inputs(&inputs) {
            Err(RiskError::InvalidCategory { field, value }) => {
                assert_eq!(field, "diet");
                assert_eq!(value, "Excellent");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_assembly_deterministic() {
        let a = FeatureVector::from_inputs(&scenario_inputs()).unwrap();
        let b = FeatureVector::from_inputs(&scenario_inputs()).unwrap();
        assert_eq!(a, b);
    }
}
