//! Public configuration for the remote-service clients.
//!
//! Credentials are always injected here by the caller; no client carries
//! a built-in key.

use std::fmt;
use std::time::Duration;

/// Default bound on a single remote call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("closet-vision/", env!("CARGO_PKG_VERSION"));

/// Configuration for the vision classifier.
///
/// # Example
///
/// ```
/// use closet_vision::ClassifierConfig;
/// use std::time::Duration;
///
/// let config = ClassifierConfig::new()
///     .with_api_key("secret")
///     .with_model("gemini-1.5-pro")
///     .with_timeout(Duration::from_secs(20));
/// ```
#[derive(Clone)]
pub struct ClassifierConfig {
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClassifierConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `https://generativelanguage.googleapis.com/v1beta`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Defaults to `gemini-1.5-flash`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Defaults to 60 seconds. Expiry surfaces as a service error.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &redacted(self.api_key.as_deref()))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Configuration for the background remover.
#[derive(Clone)]
pub struct ExtractorConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.remove.bg/v1.0".to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ExtractorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `https://api.remove.bg/v1.0`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redacted(self.api_key.as_deref()))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

const fn redacted(key: Option<&str>) -> &'static str {
    match key {
        Some(_) => "<redacted>",
        None => "<unset>",
    }
}
