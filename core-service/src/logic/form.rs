//! Form Definition
//!
//! Định nghĩa tĩnh của form nhập liệu: field, kiểu, giới hạn, giá trị mặc định.
//! Renderer đọc `FORM_FIELDS`; `FormInputs` là giá trị thô người dùng gửi lên.

use serde::{Deserialize, Serialize};

use super::encoding::CategoricalField;
use crate::error::{RiskError, RiskResult};

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Widget kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Integer { min: i32, max: i32, default: i32 },
    Float { min: f32, max: f32, default: f32 },
    /// 0 = No, 1 = Yes
    Flag,
    Select { field: CategoricalField, options: &'static [&'static str], default: &'static str },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

const fn int(key: &'static str, label: &'static str, min: i32, max: i32, default: i32) -> FieldSpec {
    FieldSpec { key, label, kind: FieldKind::Integer { min, max, default } }
}

const fn float(key: &'static str, label: &'static str, min: f32, max: f32, default: f32) -> FieldSpec {
    FieldSpec { key, label, kind: FieldKind::Float { min, max, default } }
}

const fn flag(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { key, label, kind: FieldKind::Flag }
}

/// Select options are listed in display order, not encoded order
const fn select(
    key: &'static str,
    label: &'static str,
    field: CategoricalField,
    options: &'static [&'static str],
    default: &'static str,
) -> FieldSpec {
    FieldSpec { key, label, kind: FieldKind::Select { field, options, default } }
}

/// Input form, in sidebar order
pub const FORM_FIELDS: &[FieldSpec] = &[
    int("age", "Age", 18, 90, 50),
    select("sex", "Sex", CategoricalField::Sex, &["Male", "Female"], "Male"),
    int("cholesterol", "Cholesterol (mg/dL)", 100, 500, 200),
    int("systolic", "Systolic BP", 80, 200, 120),
    int("diastolic", "Diastolic BP", 60, 140, 80),
    int("heart_rate", "Heart Rate", 40, 200, 70),
    flag("diabetes", "Diabetes (0=No,1=Yes)"),
    flag("smoking", "Smoking (0=No,1=Yes)"),
    flag("obesity", "Obesity (0=No,1=Yes)"),
    flag("alcohol", "Alcohol (0=No,1=Yes)"),
    int("exercise_hours", "Exercise Hours/Week", 0, 20, 5),
    select("diet", "Diet", CategoricalField::Diet, &["Poor", "Average", "Good"], "Poor"),
    int("stress", "Stress Level (1-10)", 1, 10, 5),
    float("sedentary_hours", "Sedentary Hours/Day", 0.0, 12.0, 5.0),
    float("bmi", "BMI", 15.0, 50.0, 25.0),
    int("triglycerides", "Triglycerides", 30, 800, 150),
    int("activity_days", "Active Days/Week", 0, 7, 3),
    int("sleep_hours", "Sleep Hours/Day", 4, 12, 7),
    select(
        "country",
        "Country",
        CategoricalField::Country,
        &["Germany", "Canada", "USA", "France", "Argentina", "Thailand", "India"],
        "Germany",
    ),
    select(
        "continent",
        "Continent",
        CategoricalField::Continent,
        &["Europe", "North America", "Asia", "South America"],
        "Europe",
    ),
    select(
        "hemisphere",
        "Hemisphere",
        CategoricalField::Hemisphere,
        &["Northern Hemisphere", "Southern Hemisphere"],
        "Northern Hemisphere",
    ),
];

/// Look up a field by key
pub fn field_spec(key: &str) -> Option<&'static FieldSpec> {
    FORM_FIELDS.iter().find(|f| f.key == key)
}

// ============================================================================
// FORM INPUTS
// ============================================================================

/// Raw values submitted by the form
///
/// Categorical fields stay as the selected label; encoding happens in the
/// classifier so that an unknown label is reported, not guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    pub age: i32,
    pub sex: String,
    pub cholesterol: i32,
    pub systolic: i32,
    pub diastolic: i32,
    pub heart_rate: i32,
    pub diabetes: u8,
    pub smoking: u8,
    pub obesity: u8,
    pub alcohol: u8,
    pub exercise_hours: i32,
    pub diet: String,
    pub stress: i32,
    pub sedentary_hours: f32,
    pub bmi: f32,
    pub triglycerides: i32,
    pub activity_days: i32,
    pub sleep_hours: i32,
    pub country: String,
    pub continent: String,
    pub hemisphere: String,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            age: 50,
            sex: "Male".to_string(),
            cholesterol: 200,
            systolic: 120,
            diastolic: 80,
            heart_rate: 70,
            diabetes: 0,
            smoking: 0,
            obesity: 0,
            alcohol: 0,
            exercise_hours: 5,
            diet: "Poor".to_string(),
            stress: 5,
            sedentary_hours: 5.0,
            bmi: 25.0,
            triglycerides: 150,
            activity_days: 3,
            sleep_hours: 7,
            country: "Germany".to_string(),
            continent: "Europe".to_string(),
            hemisphere: "Northern Hemisphere".to_string(),
        }
    }
}

impl FormInputs {
    /// Check every numeric value against its widget bounds.
    ///
    /// Categorical labels are checked by the encoder.
    pub fn validate(&self) -> RiskResult<()> {
        for spec in FORM_FIELDS {
            let value = match self.numeric(spec.key) {
                Some(v) => v,
                None => continue,
            };

            let (min, max) = match spec.kind {
                FieldKind::Integer { min, max, .. } => (min as f64, max as f64),
                FieldKind::Float { min, max, .. } => (min as f64, max as f64),
                FieldKind::Flag => (0.0, 1.0),
                FieldKind::Select { .. } => continue,
            };

            if !value.is_finite() || value < min || value > max {
                return Err(RiskError::OutOfRange {
                    field: spec.key,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Numeric value of a field by key
    fn numeric(&self, key: &str) -> Option<f64> {
        let v = match key {
            "age" => self.age as f64,
            "cholesterol" => self.cholesterol as f64,
            "systolic" => self.systolic as f64,
            "diastolic" => self.diastolic as f64,
            "heart_rate" => self.heart_rate as f64,
            "diabetes" => self.diabetes as f64,
            "smoking" => self.smoking as f64,
            "obesity" => self.obesity as f64,
            "alcohol" => self.alcohol as f64,
            "exercise_hours" => self.exercise_hours as f64,
            "stress" => self.stress as f64,
            "sedentary_hours" => self.sedentary_hours as f64,
            "bmi" => self.bmi as f64,
            "triglycerides" => self.triglycerides as f64,
            "activity_days" => self.activity_days as f64,
            "sleep_hours" => self.sleep_hours as f64,
            _ => return None,
        };
        Some(v)
    }
}
