//! Capture device port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CapturedImage;

/// The device produced no still.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StillSourceError {
    #[error("capture device unavailable: {0}")]
    Unavailable(String),

    #[error("capture produced an empty image")]
    Empty,
}

/// Supplies one raw still per call.
#[async_trait]
pub trait StillSourcePort: Send + Sync {
    async fn capture_still(&self) -> Result<CapturedImage, StillSourceError>;
}
