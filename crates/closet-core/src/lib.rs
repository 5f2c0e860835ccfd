//! Core domain for the garment closet.
//!
//! A captured photo becomes a persisted closet entry in three steps:
//! classification, background removal, persistence. This crate owns the
//! parts of that flow that have contracts and state:
//!
//! - `domain` - `GarmentRecord`, `Category`, `ContrastMode`, `CapturedImage`
//! - `codec` - the entry-name codec and the JSON sidecar format
//! - `ports` - traits implemented by the remote-service and storage adapters
//! - `services` - `ClosetService` (listing, caching, deletion) and
//!   `CapturePipeline` (the single-in-flight capture state machine)
//! - `paths` - closet directory resolution
//!
//! No HTTP or filesystem-entry code lives here; see `closet-vision` and
//! `closet-fs`.

#![deny(unused_crate_dependencies)]

pub mod codec;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use codec::{EntryMetadata, EntryNameFormat, category_for_entry, decode, encode};
pub use domain::{
    CapturedImage, Category, ClassifiedGarment, ClosetListing, ContrastMode, DecodedEntry,
    GarmentRecord,
};
pub use ports::{
    BackgroundRemoverPort, Classification, ClassificationError, Clock, CoreError,
    EntryStorePort, ExtractionError, GarmentClassifierPort, RemoteService, RepositoryError,
    ServiceError, StillSourceError, StillSourcePort,
};
pub use services::{
    CaptureOutcome, CapturePipeline, ClosetService, PipelineError, PipelineState, SavedGarment,
};
pub use utils::SystemClock;

// Re-export path utilities
pub use paths::{
    CLOSET_DIR_ENV, ClosetDirResolution, ClosetDirSource, DirectoryCreationStrategy, PathError,
    ensure_directory, resolve_closet_dir, verify_writable,
};
