use serde::{Deserialize, Serialize};

/// ========================================
/// Request/Response wire contract
/// ========================================
///
/// Field names are camelCase to match the JSON bodies of the original
/// /api/generate and /api/generate-batch routes.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    /// Reference image as a base64 data URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub items: Vec<GenerateRequest>,
}

/// One entry per attempted item, tagged with its submission index.
/// Exactly one of `result` / `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn ok(index: usize, result: String) -> Self {
        Self { index, result: Some(result), error: None }
    }

    pub fn failed(index: usize, error: String) -> Self {
        Self { index, result: None, error: Some(error) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<BatchEntry>,
}

/// Emitted after each item settles; `current` counts attempts so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}
