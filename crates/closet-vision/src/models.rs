//! Wire types for the two services.
//!
//! Only the fields the clients read are modelled; everything else in the
//! service responses is ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Classifier (generateContent)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
pub struct InlineData<'a> {
    pub mime_type: &'a str,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: &'static str,
    pub temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default, rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    pub block_reason: Option<String>,
}

// ============================================================================
// Background remover
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RemovalResponse {
    #[serde(default)]
    pub data: Option<RemovalData>,
    #[serde(default)]
    pub errors: Vec<RemovalErrorItem>,
}

#[derive(Debug, Deserialize)]
pub struct RemovalData {
    #[serde(default)]
    pub result_b64: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemovalErrorItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
