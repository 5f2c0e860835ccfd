//! HTTP backend abstraction for the remote services.
//!
//! Non-success statuses are returned as an `HttpReply`, not an error, so the
//! clients can read the service's own error payload. Only transport failures
//! (connect, timeout, TLS) are `Err`. Nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::{VisionError, VisionResult};

// ============================================================================
// Request / Reply
// ============================================================================

/// A response that arrived, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// One file plus plain-text form fields.
#[derive(Debug, Clone)]
pub struct MultipartUpload {
    pub file_field: &'static str,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub text_fields: Vec<(&'static str, String)>,
}

/// Header name/value pairs. Values may hold credentials; never log them.
pub type Headers = Vec<(&'static str, String)>;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Transport used by the clients.
///
/// This is an implementation detail - external code goes through the core
/// port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body.
    async fn post_json(&self, url: &Url, headers: Headers, body: &Value)
    -> VisionResult<HttpReply>;

    /// POST a `multipart/form-data` body.
    async fn post_multipart(
        &self,
        url: &Url,
        headers: Headers,
        upload: MultipartUpload,
    ) -> VisionResult<HttpReply>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production backend using reqwest, with a per-request timeout.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(timeout: Duration, user_agent: &str) -> VisionResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| VisionError::Configuration {
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> VisionResult<HttpReply> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpReply { status, body })
    }
}

fn with_headers(mut request: reqwest::RequestBuilder, headers: Headers) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        request = request.header(name, value);
    }
    request
}

fn transport_error(e: reqwest::Error) -> VisionError {
    if e.is_timeout() {
        VisionError::Timeout
    } else {
        VisionError::Network(e)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        headers: Headers,
        body: &Value,
    ) -> VisionResult<HttpReply> {
        let request = with_headers(self.client.post(url.as_str()), headers).json(body);
        self.send(request).await
    }

    async fn post_multipart(
        &self,
        url: &Url,
        headers: Headers,
        upload: MultipartUpload,
    ) -> VisionResult<HttpReply> {
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)?;
        let mut form = reqwest::multipart::Form::new().part(upload.file_field, part);
        for (name, value) in upload.text_fields {
            form = form.text(name, value);
        }

        let request = with_headers(self.client.post(url.as_str()), headers).multipart(form);
        self.send(request).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
