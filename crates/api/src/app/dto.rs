use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------
//
// Car bodies decode straight into `dealership_core::Car`; only query strings
// need their own shapes.

/// Query string of `GET /cars`.
///
/// `isEngine` stays raw text so the handler can reject it with its own status
/// instead of the extractor's.
#[derive(Debug, Default, Deserialize)]
pub struct BrandQuery {
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "isEngine")]
    pub is_engine: Option<String>,
}
