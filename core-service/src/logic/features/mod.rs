//! Features Module - Feature Assembly
//!
//! Ghép giá trị form thành vector đầu vào cho model.
//! Layout là hợp đồng với model đã train: đổi thứ tự = hỏng prediction.

pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{
    feature_index, feature_name, hash_layout, layout_hash, validate_layout, LayoutInfo, LayoutMismatchError,
    FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, PLACEHOLDER_COUNT, REAL_FEATURE_COUNT,
};
pub use vector::{FeatureVector, FeatureVectorBuilder};
