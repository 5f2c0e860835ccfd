//! Transport-level failure shared by both remote services.

use std::fmt;

use thiserror::Error;

/// The remote collaborator a `ServiceError` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteService {
    Classifier,
    BackgroundRemoval,
}

impl fmt::Display for RemoteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classifier => f.write_str("classification service"),
            Self::BackgroundRemoval => f.write_str("background removal service"),
        }
    }
}

/// No usable response: network failure, timeout, non-success status, an
/// explicit error payload, or an undecodable result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{service} failed: {message}")]
pub struct ServiceError {
    pub service: RemoteService,
    /// HTTP status when the service answered at all.
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceError {
    pub fn new(service: RemoteService, message: impl Into<String>) -> Self {
        Self {
            service,
            status: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
