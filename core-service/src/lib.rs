//! Heart Attack Risk Core
//!
//! Encode form inputs, assemble the 25-feature vector, ask the trained
//! classifier for the at-risk probability and bucket it into a risk band.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

pub use error::{RiskError, RiskResult};
pub use logic::encoding::{encode, CategoricalField};
pub use logic::features::FeatureVector;
pub use logic::form::FormInputs;
pub use logic::model::{ClassProbabilities, OnnxModel, ProbabilityModel, SharedModel};
pub use logic::risk::{RiskAssessment, RiskClassifier, RiskLevel};
