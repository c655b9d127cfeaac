//! Heart Attack Risk Prediction - Main Entry Point
//!
//! Load model một lần, đọc một FormInputs (JSON) từ stdin, in report ra stdout.

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;

use heart_risk_core::api::commands;
use heart_risk_core::config::{self, Config};
use heart_risk_core::constants::{self, APP_NAME, APP_VERSION};
use heart_risk_core::logic::features::LayoutInfo;
use heart_risk_core::{FormInputs, OnnxModel, RiskClassifier};

fn main() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // .env may set HEART_LOG_LEVEL, so read it before the logger
    let dotenv = config::load_dotenv();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::get_log_level()),
    )
    .init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    if let Some(path) = dotenv.context("Failed to load configuration")? {
        log::debug!("Loaded environment from {}", path.display());
    }
    let config = Config::from_env().context("Failed to load configuration")?;
    log::debug!("Configuration: {:?}", config);

    let layout = LayoutInfo::current();
    log::info!(
        "Feature layout v{} (hash: {:08x}, {} features)",
        layout.version,
        layout.hash,
        layout.feature_count
    );

    // Model is fatal: no model, no predictions
    let model = OnnxModel::load_with_metadata(&config.model_path, Some(&config.metadata_path))
        .with_context(|| format!("Cannot load model {}", config.model_path.display()))?;
    let model_info = model.info().clone();
    let classifier = RiskClassifier::new(Arc::new(model));

    let inputs = read_inputs().context("Failed to read form inputs from stdin")?;

    let report = commands::try_predict_risk(&classifier, &inputs)?;
    let status = commands::get_engine_status(&classifier, Some(&model_info));

    let output = serde_json::json!({
        "report": report,
        "engine": status,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Empty stdin = form defaults
fn read_inputs() -> anyhow::Result<FormInputs> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        log::info!("No inputs on stdin, using form defaults");
        return Ok(FormInputs::default());
    }

    Ok(serde_json::from_str(&buffer)?)
}
