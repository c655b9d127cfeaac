//! API Module
//!
//! Structure:
//! - commands.rs: predict + form/status queries
//! - engine_status.rs: status DTOs
//!
//! Usage:
//! - `api::commands::predict_risk(&classifier, &inputs)` - Direct access
//! - `api::predict_risk(...)` - Re-export

pub mod commands;
pub mod engine_status;

// Re-export current version as default
pub use commands::*;
pub use engine_status::EngineStatus;
