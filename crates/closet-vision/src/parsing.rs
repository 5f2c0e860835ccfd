//! Response validation for both services.
//!
//! Sync functions that turn an `HttpReply` into either a typed result or a
//! `VisionError`. The split that matters to callers:
//!
//! - transport, status, error-payload and envelope problems are service
//!   failures
//! - a classifier answer that arrives intact but does not match the
//!   two-shape contract is a `ContractViolation`

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use closet_core::{Category, Classification, ClassifiedGarment, ContrastMode};
use serde_json::{Map, Value};

use crate::error::{VisionError, VisionResult};
use crate::http::HttpReply;
use crate::models::{GenerateResponse, RemovalResponse};

// ============================================================================
// Classifier envelope
// ============================================================================

/// Pull the generated text out of a `generateContent` reply.
pub fn generated_text(reply: &HttpReply) -> VisionResult<String> {
    let parsed: Option<GenerateResponse> = serde_json::from_str(&reply.body).ok();

    if let Some(message) = parsed
        .as_ref()
        .and_then(|r| r.error.as_ref())
        .map(|e| {
            e.message
                .clone()
                .or_else(|| e.status.clone())
                .unwrap_or_else(|| "unspecified error".to_string())
        })
    {
        return Err(if reply.is_success() {
            VisionError::ServiceReported { message }
        } else {
            VisionError::ApiRequestFailed {
                status: reply.status,
                message,
            }
        });
    }

    if !reply.is_success() {
        return Err(VisionError::ApiRequestFailed {
            status: reply.status,
            message: snippet(&reply.body),
        });
    }

    let response =
        parsed.ok_or_else(|| VisionError::invalid_response("body is not a JSON object"))?;

    let text: String = response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let message = match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => format!("no candidates returned (blocked: {reason})"),
            None => "no candidates returned".to_string(),
        };
        return Err(VisionError::invalid_response(message));
    }
    Ok(text)
}

// ============================================================================
// Classification contract
// ============================================================================

/// Strip a surrounding Markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line. A one-line
    // fence has no newline; a JSON object never starts with a letter.
    let body = rest.split_once('\n').map_or_else(
        || rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        |(_, body)| body,
    );
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Validate the classifier's answer against the two-shape contract.
///
/// `{"status":"Invalid"}` is `InvalidSubject`. `{"status":"Valid", ...}` must
/// carry a known `category`, a non-empty `itemName` and a known `contrastBg`;
/// `tags` may be absent but must be a list of strings when present.
pub fn parse_classification(text: &str) -> VisionResult<Classification> {
    let json = strip_fences(text);
    let value: Value = serde_json::from_str(json)
        .map_err(|e| VisionError::contract(format!("answer is not JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| VisionError::contract("answer is not a JSON object"))?;

    match string_field(object, "status")? {
        "Invalid" => Ok(Classification::InvalidSubject),
        "Valid" => parse_valid(object).map(Classification::Valid),
        other => Err(VisionError::contract(format!("unknown status {other:?}"))),
    }
}

fn parse_valid(object: &Map<String, Value>) -> VisionResult<ClassifiedGarment> {
    let category = string_field(object, "category")?;
    let category = Category::from_label(category)
        .ok_or_else(|| VisionError::contract(format!("unknown category {category:?}")))?;

    let contrast = string_field(object, "contrastBg")?;
    let contrast_mode = ContrastMode::from_tag(contrast)
        .ok_or_else(|| VisionError::contract(format!("unknown contrastBg {contrast:?}")))?;

    let item_name = string_field(object, "itemName")?.trim();
    if item_name.is_empty() {
        return Err(VisionError::contract("itemName is empty"));
    }

    let tags = match object.get("tags") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|t| {
                t.as_str()
                    .map(|s| s.trim().to_string())
                    .ok_or_else(|| VisionError::contract("tags must be strings"))
            })
            .collect::<VisionResult<Vec<_>>>()?
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect(),
        Some(_) => return Err(VisionError::contract("tags is not a list")),
    };

    Ok(ClassifiedGarment {
        category,
        item_name: item_name.to_string(),
        tags,
        contrast_mode,
    })
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> VisionResult<&'a str> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(VisionError::contract(format!("{key} is not a string"))),
        None => Err(VisionError::contract(format!("missing {key}"))),
    }
}

// ============================================================================
// Background removal
// ============================================================================

/// Decode the background-free image from a removal reply.
pub fn removal_result(reply: &HttpReply) -> VisionResult<Vec<u8>> {
    let parsed: Option<RemovalResponse> = serde_json::from_str(&reply.body).ok();

    let reported = parsed.as_ref().and_then(|r| {
        r.errors.first().map(|e| {
            e.title
                .clone()
                .or_else(|| e.detail.clone())
                .unwrap_or_else(|| "unspecified error".to_string())
        })
    });

    if !reply.is_success() {
        return Err(VisionError::ApiRequestFailed {
            status: reply.status,
            message: reported.unwrap_or_else(|| snippet(&reply.body)),
        });
    }
    if let Some(message) = reported {
        return Err(VisionError::ServiceReported { message });
    }

    let encoded = parsed
        .and_then(|r| r.data)
        .and_then(|d| d.result_b64)
        .ok_or_else(|| VisionError::invalid_response("missing data.result_b64"))?;

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| VisionError::invalid_response(format!("result is not base64: {e}")))?;
    if bytes.is_empty() {
        return Err(VisionError::invalid_response("result image is empty"));
    }
    Ok(bytes)
}

/// First part of a non-JSON body, for error messages.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let body = body.trim();
    if body.is_empty() {
        return "empty response body".to_string();
    }
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
