//! Capture pipeline - classification, background removal, persistence.
//!
//! ```text
//! Idle -> Capturing -> Classifying -> Extracting -> Persisting -> Idle
//!                          |              |
//!                          +-> Idle (rejected / classification failed)
//!                                         +-> Idle (extraction failed)
//! ```
//!
//! At most one capture is in flight. A request while not `Idle` is refused,
//! not queued. Nothing is written unless both remote calls succeed, and no
//! remote call is retried.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::closet_service::ClosetService;
use crate::domain::GarmentRecord;
use crate::ports::{
    BackgroundRemoverPort, Classification, ClassificationError, Clock, CoreError,
    ExtractionError, GarmentClassifierPort, StillSourceError, StillSourcePort,
};

/// Where the single in-flight capture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Capturing,
    Classifying,
    Extracting,
    Persisting,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Capturing => "capturing",
            Self::Classifying => "classifying",
            Self::Extracting => "extracting",
            Self::Persisting => "persisting",
        };
        f.write_str(label)
    }
}

/// A garment that made it into the closet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGarment {
    pub entry_name: String,
    pub record: GarmentRecord,
}

/// How a capture ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(SavedGarment),
    /// The classifier did not see a single garment. Nothing was stored.
    Rejected,
}

impl CaptureOutcome {
    pub const REJECTED_MESSAGE: &'static str =
        "That doesn't look like a single piece of clothing. Center one garment and try again.";
}

/// A capture that ended without a result. Nothing was stored.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Another capture is still in flight.
    #[error("a capture is already in progress")]
    Busy,

    #[error("capture failed: {0}")]
    CaptureFailed(#[source] StillSourceError),

    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("background removal failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("saving the garment failed: {0}")]
    Persistence(#[source] CoreError),
}

impl PipelineError {
    /// Whether a remote service could not be reached or reported failure.
    pub const fn is_service_unreachable(&self) -> bool {
        matches!(
            self,
            Self::Classification(ClassificationError::Service(_)) | Self::Extraction(_)
        )
    }

    /// Message suitable for the person holding the camera.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Busy => "Still working on the previous photo. Try again in a moment.",
            Self::CaptureFailed(_) => "Couldn't take a photo. Try again.",
            Self::Classification(ClassificationError::Service(_)) => {
                "Couldn't reach the clothing classifier. Check your connection and capture again."
            }
            Self::Classification(ClassificationError::ContractViolation { .. }) => {
                "The clothing classifier gave an unreadable answer. Capture again."
            }
            Self::Extraction(_) => {
                "Couldn't reach the background removal service. Check your connection and capture again."
            }
            Self::Persistence(_) => "Couldn't save the garment to your closet.",
        }
    }
}

/// Orchestrates one capture at a time.
pub struct CapturePipeline {
    classifier: Arc<dyn GarmentClassifierPort>,
    extractor: Arc<dyn BackgroundRemoverPort>,
    closet: Arc<ClosetService>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<PipelineState>,
}

impl CapturePipeline {
    pub fn new(
        classifier: Arc<dyn GarmentClassifierPort>,
        extractor: Arc<dyn BackgroundRemoverPort>,
        closet: Arc<ClosetService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (state, _) = watch::channel(PipelineState::Idle);
        Self {
            classifier,
            extractor,
            closet,
            clock,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> PipelineState {
        *self.state.borrow()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// The closet this pipeline writes into.
    pub fn closet(&self) -> &Arc<ClosetService> {
        &self.closet
    }

    /// Run one capture from `source` through to persistence.
    ///
    /// Always returns to `Idle`, whatever the outcome.
    pub async fn run(&self, source: &dyn StillSourcePort) -> Result<CaptureOutcome, PipelineError> {
        let run = InFlight::begin(&self.state)?;

        let image = source
            .capture_still()
            .await
            .map_err(PipelineError::CaptureFailed)
            .inspect_err(|e| warn!(error = %e, "Capture failed"))?;
        debug!(bytes = image.len(), mime = image.mime_type(), "Captured still");

        run.advance(PipelineState::Classifying);
        let garment = match self.classifier.classify(&image).await {
            Ok(Classification::Valid(garment)) => garment,
            Ok(Classification::InvalidSubject) => {
                info!("Classifier rejected the subject; nothing saved");
                return Ok(CaptureOutcome::Rejected);
            }
            Err(e) => {
                warn!(error = %e, "Classification failed; nothing saved");
                return Err(e.into());
            }
        };

        run.advance(PipelineState::Extracting);
        let asset = self
            .extractor
            .remove_background(&image)
            .await
            .inspect_err(|e| warn!(error = %e, "Background removal failed; nothing saved"))?;

        run.advance(PipelineState::Persisting);
        let record = garment.into_record(self.clock.now_millis());
        let entry_name = self
            .closet
            .add(&record, &asset)
            .await
            .map_err(PipelineError::Persistence)
            .inspect_err(|e| warn!(error = %e, "Persisting failed"))?;

        info!(
            entry = %entry_name,
            category = %record.category,
            item = %record.item_name,
            "Capture saved"
        );
        Ok(CaptureOutcome::Saved(SavedGarment { entry_name, record }))
    }
}

/// Holds the Idle gate for one run and restores `Idle` on drop.
struct InFlight<'a> {
    state: &'a watch::Sender<PipelineState>,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a watch::Sender<PipelineState>) -> Result<Self, PipelineError> {
        let claimed = state.send_if_modified(|current| {
            if *current == PipelineState::Idle {
                *current = PipelineState::Capturing;
                true
            } else {
                false
            }
        });

        if claimed {
            debug!(state = %PipelineState::Capturing, "Pipeline transition");
            Ok(Self { state })
        } else {
            debug!(state = %*state.borrow(), "Capture refused; pipeline busy");
            Err(PipelineError::Busy)
        }
    }

    fn advance(&self, next: PipelineState) {
        debug!(state = %next, "Pipeline transition");
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_replace(PipelineState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CapturedImage, Category, ClassifiedGarment, ContrastMode};
    use crate::ports::{
        EntryStorePort, MockBackgroundRemoverPort, MockGarmentClassifierPort, RemoteService,
        ServiceError,
    };
    use crate::utils::testing::{CannedStill, MemoryEntryStore, SteppingClock};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn jeans() -> ClassifiedGarment {
        ClassifiedGarment {
            category: Category::Bottom,
            item_name: "Faded Wide-Leg Jeans".to_string(),
            tags: vec!["denim".to_string(), "relaxed".to_string(), "90s".to_string()],
            contrast_mode: ContrastMode::Light,
        }
    }

    struct Harness {
        store: Arc<MemoryEntryStore>,
        pipeline: CapturePipeline,
    }

    fn harness(
        classifier: MockGarmentClassifierPort,
        extractor: MockBackgroundRemoverPort,
    ) -> Harness {
        let store = Arc::new(MemoryEntryStore::new());
        let closet = Arc::new(ClosetService::new(
            Arc::clone(&store) as Arc<dyn EntryStorePort>
        ));
        let pipeline = CapturePipeline::new(
            Arc::new(classifier),
            Arc::new(extractor),
            closet,
            Arc::new(SteppingClock::starting_at(1_700_000_000_000)),
        );
        Harness { store, pipeline }
    }

    fn classifier_returning(
        result: Result<Classification, ClassificationError>,
    ) -> MockGarmentClassifierPort {
        let mut classifier = MockGarmentClassifierPort::new();
        classifier
            .expect_classify()
            .times(1)
            .returning(move |_| result.clone());
        classifier
    }

    fn extractor_never_called() -> MockBackgroundRemoverPort {
        let mut extractor = MockBackgroundRemoverPort::new();
        extractor.expect_remove_background().never();
        extractor
    }

    #[tokio::test]
    async fn test_valid_capture_is_saved() {
        let mut extractor = MockBackgroundRemoverPort::new();
        extractor
            .expect_remove_background()
            .withf(|image: &CapturedImage| image.bytes() == b"raw-photo")
            .times(1)
            .returning(|_| Ok(b"cutout".to_vec()));
        let h = harness(
            classifier_returning(Ok(Classification::Valid(jeans()))),
            extractor,
        );

        let outcome = h.pipeline.run(&CannedStill::jpeg(b"raw-photo")).await.unwrap();

        let CaptureOutcome::Saved(saved) = outcome else {
            panic!("expected a saved garment");
        };
        assert_eq!(
            saved.entry_name,
            "Bottom_Faded-Wide-Leg-Jeans_light_1700000000000.png"
        );
        assert_eq!(saved.record.tags.len(), 3);
        assert_eq!(h.store.entry_count(), 1);
        assert_eq!(
            h.pipeline.closet().asset(&saved.entry_name).await.unwrap(),
            b"cutout"
        );
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_invalid_subject_skips_extraction_and_storage() {
        let h = harness(
            classifier_returning(Ok(Classification::InvalidSubject)),
            extractor_never_called(),
        );
        let before = h.store.entry_count();

        let outcome = h.pipeline.run(&CannedStill::jpeg(b"cat")).await.unwrap();

        assert_eq!(outcome, CaptureOutcome::Rejected);
        assert_eq!(h.store.entry_count(), before);
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_contract_violation_skips_extraction_and_storage() {
        let h = harness(
            classifier_returning(Err(ClassificationError::contract("not json"))),
            extractor_never_called(),
        );

        let err = h.pipeline.run(&CannedStill::jpeg(b"x")).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Classification(ClassificationError::ContractViolation { .. })
        ));
        assert!(!err.is_service_unreachable());
        assert_eq!(h.store.entry_count(), 0);
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_classifier_service_error_is_distinguishable() {
        let service = ServiceError::new(RemoteService::Classifier, "connection refused");
        let h = harness(
            classifier_returning(Err(ClassificationError::Service(service))),
            extractor_never_called(),
        );

        let err = h.pipeline.run(&CannedStill::jpeg(b"x")).await.unwrap_err();

        assert!(err.is_service_unreachable());
        assert!(err.user_message().contains("Couldn't reach"));
        assert_eq!(h.store.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_writes_nothing() {
        let mut extractor = MockBackgroundRemoverPort::new();
        extractor.expect_remove_background().times(1).returning(|_| {
            Err(ExtractionError::Service(
                ServiceError::new(RemoteService::BackgroundRemoval, "status 402").with_status(402),
            ))
        });
        let h = harness(
            classifier_returning(Ok(Classification::Valid(jeans()))),
            extractor,
        );

        let err = h.pipeline.run(&CannedStill::jpeg(b"x")).await.unwrap_err();

        assert!(matches!(err, PipelineError::Extraction(_)));
        assert_eq!(h.store.entry_count(), 0);
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_capture_failure_returns_to_idle() {
        let mut classifier = MockGarmentClassifierPort::new();
        classifier.expect_classify().never();
        let h = harness(classifier, extractor_never_called());

        let source = CannedStill(Err(StillSourceError::Empty));
        let err = h.pipeline.run(&source).await.unwrap_err();

        assert!(matches!(err, PipelineError::CaptureFailed(_)));
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_reported() {
        let mut extractor = MockBackgroundRemoverPort::new();
        extractor
            .expect_remove_background()
            .returning(|_| Ok(b"cutout".to_vec()));
        let h = harness(
            classifier_returning(Ok(Classification::Valid(jeans()))),
            extractor,
        );
        h.store.fail_writes();

        let err = h.pipeline.run(&CannedStill::jpeg(b"x")).await.unwrap_err();

        assert!(matches!(err, PipelineError::Persistence(_)));
        assert_eq!(h.store.entry_count(), 0);
        assert_eq!(h.pipeline.state(), PipelineState::Idle);
    }

    #[tokio::test]
    async fn test_consecutive_captures_get_distinct_entries() {
        let mut classifier = MockGarmentClassifierPort::new();
        classifier
            .expect_classify()
            .times(2)
            .returning(|_| Ok(Classification::Valid(jeans())));
        let mut extractor = MockBackgroundRemoverPort::new();
        extractor
            .expect_remove_background()
            .times(2)
            .returning(|_| Ok(b"cutout".to_vec()));
        let h = harness(classifier, extractor);

        h.pipeline.run(&CannedStill::jpeg(b"a")).await.unwrap();
        h.pipeline.run(&CannedStill::jpeg(b"b")).await.unwrap();

        assert_eq!(h.store.entry_count(), 2);
        assert_eq!(h.pipeline.closet().list().await.unwrap().bottoms.len(), 2);
    }

    /// Classifier that parks until released, so a second capture can be
    /// attempted while the first is in flight.
    struct ParkedClassifier {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl GarmentClassifierPort for ParkedClassifier {
        async fn classify(
            &self,
            _image: &CapturedImage,
        ) -> Result<Classification, ClassificationError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(Classification::InvalidSubject)
        }
    }

    #[tokio::test]
    async fn test_second_capture_while_in_flight_is_refused() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let closet = Arc::new(ClosetService::new(
            Arc::new(MemoryEntryStore::new()) as Arc<dyn EntryStorePort>
        ));
        let pipeline = Arc::new(CapturePipeline::new(
            Arc::new(ParkedClassifier {
                entered: Arc::clone(&entered),
                release: Arc::clone(&release),
            }),
            Arc::new(extractor_never_called()),
            closet,
            Arc::new(SteppingClock::starting_at(1)),
        ));
        let mut states = pipeline.subscribe();

        let first = {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { pipeline.run(&CannedStill::jpeg(b"a")).await })
        };
        entered.notified().await;
        assert_eq!(pipeline.state(), PipelineState::Classifying);
        assert_eq!(*states.borrow_and_update(), PipelineState::Classifying);

        let second = pipeline.run(&CannedStill::jpeg(b"b")).await;
        assert!(matches!(second, Err(PipelineError::Busy)));
        // The refused request must not disturb the in-flight one.
        assert_eq!(pipeline.state(), PipelineState::Classifying);

        release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome, CaptureOutcome::Rejected);
        assert_eq!(pipeline.state(), PipelineState::Idle);
        assert!(states.has_changed().unwrap());
    }
}
