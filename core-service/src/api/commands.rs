//! Commands - API cho Frontend
//!
//! Một action "Predict Risk" → một report. Lỗi trả về dạng String để hiển thị
//! chặn (blocking) trên form, không bao giờ thay bằng một risk label mặc định.

use serde::{Deserialize, Serialize};

use super::engine_status::{EngineStatus, LayoutStatus, ModelStatus};
use crate::error::RiskError;
use crate::logic::features::LayoutInfo;
use crate::logic::form::{FieldSpec, FormInputs, FORM_FIELDS};
use crate::logic::model::ModelInfo;
use crate::logic::risk::{RiskAssessment, RiskClassifier, RiskThresholds, Severity};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// KPI tile shown next to the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMetric {
    pub label: String,
    pub value: String,
}

/// Everything the form renders after "Predict Risk"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub assessment: RiskAssessment,
    pub risk_label: String,
    pub probability: String,
    pub message: String,
    pub severity: Severity,
    pub color: String,
    pub kpis: Vec<KpiMetric>,
    pub inference_time_us: u64,
}

/// Error shape for the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl From<&RiskError> for CommandError {
    fn from(err: &RiskError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Predict Risk: validate → assess → report
pub fn predict_risk(classifier: &RiskClassifier, inputs: &FormInputs) -> Result<PredictionReport, String> {
    try_predict_risk(classifier, inputs).map_err(|e| {
        log::error!("Prediction failed: {}", e);
        e.to_string()
    })
}

/// Same as `predict_risk` with a structured error
pub fn try_predict_risk(classifier: &RiskClassifier, inputs: &FormInputs) -> Result<PredictionReport, RiskError> {
    let start_time = std::time::Instant::now();

    inputs.validate()?;
    let assessment = classifier.assess(inputs)?;

    let inference_time_us = start_time.elapsed().as_micros() as u64;
    log::info!(
        "Prediction: {} ({}) in {} us",
        assessment.risk_level,
        assessment.probability_display(),
        inference_time_us
    );

    Ok(PredictionReport {
        risk_label: assessment.risk_level.label().to_string(),
        probability: assessment.probability_display(),
        message: assessment.message(),
        severity: assessment.risk_level.severity(),
        color: assessment.risk_level.color().to_string(),
        kpis: kpi_metrics(inputs),
        inference_time_us,
        assessment,
    })
}

/// KPI tiles echoed from the inputs
pub fn kpi_metrics(inputs: &FormInputs) -> Vec<KpiMetric> {
    vec![
        KpiMetric {
            label: "Average Cholesterol".to_string(),
            value: format!("{:.1} mg/dL", inputs.cholesterol as f32),
        },
        KpiMetric {
            label: "BMI".to_string(),
            value: format!("{:.1}", inputs.bmi),
        },
        KpiMetric {
            label: "Heart Rate".to_string(),
            value: format!("{} bpm", inputs.heart_rate),
        },
    ]
}

/// Static form definition for the renderer
pub fn get_form_definition() -> &'static [FieldSpec] {
    FORM_FIELDS
}

pub fn get_default_inputs() -> FormInputs {
    FormInputs::default()
}

pub fn get_risk_thresholds() -> RiskThresholds {
    RiskThresholds::default()
}

/// Layout + model status for the about panel
pub fn get_engine_status(classifier: &RiskClassifier, model_info: Option<&ModelInfo>) -> EngineStatus {
    let layout = LayoutInfo::current();
    EngineStatus {
        layout: LayoutStatus {
            feature_version: layout.version,
            layout_hash: layout.hash,
            feature_count: layout.feature_count,
        },
        model: ModelStatus {
            engine: classifier.model().engine().to_string(),
            loaded: true,
            model_path: model_info.map(|m| m.model_path.clone()),
            checksum: model_info.map(|m| m.checksum.clone()),
            loaded_at: model_info.map(|m| m.loaded_at.to_rfc3339()),
        },
        thresholds: RiskThresholds::default(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
