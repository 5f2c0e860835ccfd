//! Clients for the classifier and background-removal services.
//!
//! Both are generic over an HTTP backend so tests can swap in a fake. Use
//! `DefaultClassifier` / `DefaultRemover` in production code.

mod classify;
mod remove;

use url::Url;

use crate::config::{ClassifierConfig, ExtractorConfig};
use crate::error::{VisionError, VisionResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::{build_generate_url, build_removal_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Vision classifier over reqwest.
pub type DefaultClassifier = VisionClassifier<ReqwestBackend>;

/// Background remover over reqwest.
pub type DefaultRemover = BackgroundRemover<ReqwestBackend>;

// ============================================================================
// Clients
// ============================================================================

/// Client for the vision classification service.
pub struct VisionClassifier<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoint: Url,
    pub(crate) api_key: String,
}

/// Client for the background removal service.
pub struct BackgroundRemover<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoint: Url,
    pub(crate) api_key: String,
}

impl DefaultClassifier {
    /// Build a classifier from configuration. Fails without an API key.
    pub fn new(config: &ClassifierConfig) -> VisionResult<Self> {
        let api_key = require_key(config.api_key.as_deref(), "classifier")?;
        let endpoint = build_generate_url(&config.base_url, &config.model)?;
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            endpoint,
            api_key,
        })
    }
}

impl DefaultRemover {
    /// Build a background remover from configuration. Fails without an API key.
    pub fn new(config: &ExtractorConfig) -> VisionResult<Self> {
        let api_key = require_key(config.api_key.as_deref(), "background removal")?;
        let endpoint = build_removal_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            endpoint,
            api_key,
        })
    }
}

impl<B: HttpBackend> VisionClassifier<B> {
    #[cfg(test)]
    pub(crate) fn with_backend(backend: B, endpoint: &str, api_key: &str) -> Self {
        Self {
            backend,
            endpoint: Url::parse(endpoint).unwrap(),
            api_key: api_key.to_string(),
        }
    }
}

impl<B: HttpBackend> BackgroundRemover<B> {
    #[cfg(test)]
    pub(crate) fn with_backend(backend: B, endpoint: &str, api_key: &str) -> Self {
        Self {
            backend,
            endpoint: Url::parse(endpoint).unwrap(),
            api_key: api_key.to_string(),
        }
    }
}

fn require_key(key: Option<&str>, service: &str) -> VisionResult<String> {
    match key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(VisionError::Configuration {
            message: format!("no API key configured for the {service} service"),
        }),
    }
}
