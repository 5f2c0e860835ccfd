//! Background removal port.

use async_trait::async_trait;
use thiserror::Error;

use super::remote::ServiceError;
use crate::domain::CapturedImage;

/// Background removal failed. There is no partial result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Port trait for the remote background remover.
///
/// Returns the encoded, background-free image bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackgroundRemoverPort: Send + Sync {
    async fn remove_background(&self, image: &CapturedImage) -> Result<Vec<u8>, ExtractionError>;
}
