//! Application services.
//!
//! Services orchestrate ports and own the in-process state around them
//! (the listing cache, the pipeline state). They hold their collaborators as
//! `Arc<dyn Port>` and are wired together by the composition root.

mod capture_pipeline;
mod closet_service;

pub use capture_pipeline::{
    CaptureOutcome, CapturePipeline, PipelineError, PipelineState, SavedGarment,
};
pub use closet_service::ClosetService;
