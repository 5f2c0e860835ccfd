//! Endpoint URL construction.
//!
//! Credentials travel in headers, never in URLs, so these URLs are safe to
//! log.

use url::Url;

use crate::error::{VisionError, VisionResult};

/// Parse a configured base URL, ensuring it ends in `/` so `join` appends.
fn base(raw: &str) -> VisionResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VisionError::Configuration {
            message: "base URL is empty".to_string(),
        });
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&with_slash)?)
}

/// `{base}/models/{model}:generateContent`
pub fn build_generate_url(base_url: &str, model: &str) -> VisionResult<Url> {
    let model = model.trim();
    if model.is_empty() || model.contains('/') {
        return Err(VisionError::Configuration {
            message: format!("invalid model name {model:?}"),
        });
    }
    Ok(base(base_url)?.join(&format!("models/{model}:generateContent"))?)
}

/// `{base}/removebg`
pub fn build_removal_url(base_url: &str) -> VisionResult<Url> {
    Ok(base(base_url)?.join("removebg")?)
}
