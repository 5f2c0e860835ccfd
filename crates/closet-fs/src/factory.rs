//! Composition utilities for building the closet services over the
//! filesystem store. Construction only; no domain logic.

use std::sync::Arc;

use closet_core::{
    BackgroundRemoverPort, CapturePipeline, ClosetService, EntryStorePort,
    GarmentClassifierPort, SystemClock,
};

use crate::repositories::FsEntryStore;

/// Factory for services backed by `FsEntryStore`.
pub struct ClosetFactory;

impl ClosetFactory {
    /// Closet service over a filesystem store.
    pub fn build_closet(store: FsEntryStore) -> Arc<ClosetService> {
        Arc::new(ClosetService::new(Arc::new(store) as Arc<dyn EntryStorePort>))
    }

    /// Capture pipeline writing into `closet`, timestamped by `SystemClock`.
    pub fn build_pipeline(
        closet: Arc<ClosetService>,
        classifier: Arc<dyn GarmentClassifierPort>,
        extractor: Arc<dyn BackgroundRemoverPort>,
    ) -> CapturePipeline {
        CapturePipeline::new(classifier, extractor, closet, Arc::new(SystemClock::new()))
    }
}
