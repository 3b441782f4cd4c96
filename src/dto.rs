//! Request/response DTOs for the diary analysis endpoint.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - Wire names are camelCase; every inbound field carries a serde default so
//!   a sparse body still deserializes. Required-field checks (`diary`,
//!   `userId` non-empty) happen in the handler, not here.

use serde::{Deserialize, Serialize};

/// POST /analyzeDiary request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiaryRequest {
    pub diary: String,
    pub diary_id: String,
    pub date: String,
    pub user_id: String,
    /// Single emoji token of self-reported affect, e.g. "😊".
    pub mood: String,
    pub tags: Vec<String>,
    pub previous_diaries: Vec<PriorEntry>,
}

/// One prior diary entry sent along for short-term context. Dates are plain
/// strings sorted lexicographically downstream; duplicates are permitted.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PriorEntry {
    pub content: String,
    pub date: String,
    pub mood: String,
}

/// Successful analysis result.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}
