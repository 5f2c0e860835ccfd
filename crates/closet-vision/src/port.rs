//! Port trait implementations for the clients.
//!
//! Maps internal `VisionError` to the core error taxonomy: everything except
//! a contract violation becomes a `ServiceError` tagged with the service.

use async_trait::async_trait;
use closet_core::{
    BackgroundRemoverPort, CapturedImage, Classification, ClassificationError, ExtractionError,
    GarmentClassifierPort, RemoteService, ServiceError,
};
use tracing::warn;

use crate::client::{BackgroundRemover, VisionClassifier};
use crate::error::VisionError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal error into a core `ServiceError`.
fn service_error(service: RemoteService, err: VisionError) -> ServiceError {
    match err {
        VisionError::ApiRequestFailed { status, message } => {
            ServiceError::new(service, format!("status {status}: {message}")).with_status(status)
        }
        VisionError::Network(e) => match e.status() {
            Some(status) => ServiceError::new(service, e.to_string()).with_status(status.as_u16()),
            None => ServiceError::new(service, e.to_string()),
        },
        VisionError::Timeout => ServiceError::new(service, "request timed out"),
        other => ServiceError::new(service, other.to_string()),
    }
}

fn map_classification_error(err: VisionError) -> ClassificationError {
    match err {
        VisionError::ContractViolation { reason } => ClassificationError::ContractViolation { reason },
        other => ClassificationError::Service(service_error(RemoteService::Classifier, other)),
    }
}

fn map_extraction_error(err: VisionError) -> ExtractionError {
    ExtractionError::Service(service_error(RemoteService::BackgroundRemoval, err))
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> GarmentClassifierPort for VisionClassifier<B> {
    async fn classify(&self, image: &CapturedImage) -> Result<Classification, ClassificationError> {
        self.classify_image(image).await.map_err(|e| {
            let e = map_classification_error(e);
            warn!(error = %e, "Classification request failed");
            e
        })
    }
}

#[async_trait]
impl<B: HttpBackend> BackgroundRemoverPort for BackgroundRemover<B> {
    async fn remove_background(&self, image: &CapturedImage) -> Result<Vec<u8>, ExtractionError> {
        self.remove(image).await.map_err(|e| {
            let e = map_extraction_error(e);
            warn!(error = %e, "Background removal request failed");
            e
        })
    }
}
