//! Vision classification port.

use async_trait::async_trait;
use thiserror::Error;

use super::remote::ServiceError;
use crate::domain::{CapturedImage, ClassifiedGarment};

/// A well-formed answer from the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// One centered garment was identified.
    Valid(ClassifiedGarment),
    /// The service says there is no single garment in frame. Not an error,
    /// but the capture stops here.
    InvalidSubject,
}

/// Why a classification produced no usable answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// The service could not be reached or reported a failure.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The service answered, but not with either shape of the contract.
    #[error("classification response broke the contract: {reason}")]
    ContractViolation { reason: String },
}

impl ClassificationError {
    pub fn contract(reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            reason: reason.into(),
        }
    }
}

/// Port trait for the remote vision classifier.
///
/// Implementations send the image together with the fixed instruction
/// payload and validate the structured answer themselves. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GarmentClassifierPort: Send + Sync {
    async fn classify(&self, image: &CapturedImage) -> Result<Classification, ClassificationError>;
}
