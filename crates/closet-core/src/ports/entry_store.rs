//! Persisted-entry store port.
//!
//! A flat namespace addressed by entry name under one base location. The
//! entry name is the serialized record (see `codec`); the entry content is
//! the background-free image. Each entry may also carry a sidecar.

use async_trait::async_trait;

use super::RepositoryError;

/// Storage for closet entries.
///
/// # Design Rules
///
/// - Names are validated with `codec::is_safe_entry_name`; anything else is
///   `RepositoryError::InvalidName`
/// - `write_entry` never overwrites: an existing name is `AlreadyExists`
/// - A failed `write_entry` leaves nothing behind
/// - `delete_entry` also removes the entry's sidecar
#[async_trait]
pub trait EntryStorePort: Send + Sync {
    /// Names of all entries, in no particular order. Sidecars are not entries.
    async fn list_entries(&self) -> Result<Vec<String>, RepositoryError>;

    /// Create a new entry with the given content.
    async fn write_entry(&self, name: &str, content: &[u8]) -> Result<(), RepositoryError>;

    /// Read an entry's content.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the entry doesn't exist.
    async fn read_entry(&self, name: &str) -> Result<Vec<u8>, RepositoryError>;

    /// Delete an entry and its sidecar.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the entry doesn't exist.
    async fn delete_entry(&self, name: &str) -> Result<(), RepositoryError>;

    /// Read the sidecar for an entry, if one was written.
    async fn read_sidecar(&self, name: &str) -> Result<Option<String>, RepositoryError>;

    /// Write (or replace) the sidecar for an existing entry.
    async fn write_sidecar(&self, name: &str, json: &str) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn EntryStorePort>) {}
}
