//! Internal error types for the remote-service clients.
//!
//! These are mapped to core port errors at the boundary (`port.rs`). Only
//! construction failures reach callers as `VisionError` directly.

use thiserror::Error;

/// Result type alias for remote-service operations.
pub type VisionResult<T> = Result<T, VisionError>;

#[derive(Debug, Error)]
pub enum VisionError {
    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    ApiRequestFailed { status: u16, message: String },

    /// The service answered with an explicit error payload.
    #[error("service reported an error: {message}")]
    ServiceReported { message: String },

    /// The response envelope was not what the service documents.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// The classifier's answer broke the two-shape contract.
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },

    /// No response within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing credentials or an unusable setting.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl VisionError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    pub(crate) fn contract(reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_message() {
        let error = VisionError::ApiRequestFailed {
            status: 402,
            message: "Insufficient credits".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("402"));
        assert!(msg.contains("Insufficient credits"));
    }

    #[test]
    fn test_contract_violation_message() {
        let error = VisionError::contract("missing status");
        assert!(error.to_string().contains("missing status"));
    }
}
