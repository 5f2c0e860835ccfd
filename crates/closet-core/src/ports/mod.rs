//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or filesystem types in any signature
//! - Remote ports return domain outcomes; transport detail stays in the adapter
//! - The entry store is a flat, name-addressed namespace

pub mod classifier;
pub mod clock;
pub mod entry_store;
pub mod extractor;
pub mod remote;
pub mod still_source;

use thiserror::Error;

pub use classifier::{Classification, ClassificationError, GarmentClassifierPort};
pub use clock::Clock;
pub use entry_store::EntryStorePort;
pub use extractor::{BackgroundRemoverPort, ExtractionError};
pub use remote::{RemoteService, ServiceError};
pub use still_source::{StillSourceError, StillSourcePort};

#[cfg(test)]
pub use classifier::MockGarmentClassifierPort;
#[cfg(test)]
pub use extractor::MockBackgroundRemoverPort;

/// Domain-specific errors for entry store operations.
///
/// This error type abstracts away storage implementation details and
/// provides a clean interface for services to handle storage failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested entry was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entry with the same name already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The name cannot address an entry (separators, parent refs, hidden).
    #[error("Invalid entry name: {0:?}")]
    InvalidName(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entry store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// Whether this error means the addressed entry does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
