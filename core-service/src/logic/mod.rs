//! Logic Module - Business Logic & Engines
//!
//! Chứa các bước xử lý: Form, Encoder, Features, Model, Risk.
//!
//! ## Architecture
//! - `form` - Static form definition + raw inputs
//! - `encoding` - Categorical label → trained integer code
//! - `features/` - Feature layout + vector assembly
//! - `model/` - Classifier seam (ONNX, metadata)
//! - `risk/` - Probability → risk band

pub mod form;
pub mod encoding;
pub mod features;
pub mod model;
pub mod risk;

#[cfg(test)]
mod tests;
