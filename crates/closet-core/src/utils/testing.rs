//! Port doubles shared by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::codec::is_safe_entry_name;
use crate::domain::CapturedImage;
use crate::ports::{
    Clock, EntryStorePort, RepositoryError, StillSourceError, StillSourcePort,
};

/// In-memory entry store that counts listings and can be told to fail writes.
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: Mutex<Vec<(String, Vec<u8>)>>,
    sidecars: Mutex<HashMap<String, String>>,
    list_calls: AtomicUsize,
    fail_writes: Mutex<bool>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(names: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut entries = store.entries.lock().unwrap();
            for name in names {
                entries.push(((*name).to_string(), b"png".to_vec()));
            }
        }
        store
    }

    pub fn insert_sidecar(&self, name: &str, json: &str) {
        self.sidecars
            .lock()
            .unwrap()
            .insert(name.to_string(), json.to_string());
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn sidecar(&self, name: &str) -> Option<String> {
        self.sidecars.lock().unwrap().get(name).cloned()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(name: &str) -> Result<(), RepositoryError> {
        if is_safe_entry_name(name) {
            Ok(())
        } else {
            Err(RepositoryError::InvalidName(name.to_string()))
        }
    }
}

#[async_trait]
impl EntryStorePort for MemoryEntryStore {
    async fn list_entries(&self) -> Result<Vec<String>, RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.names())
    }

    async fn write_entry(&self, name: &str, content: &[u8]) -> Result<(), RepositoryError> {
        Self::check(name)?;
        if *self.fail_writes.lock().unwrap() {
            return Err(RepositoryError::Storage("disk full".to_string()));
        }
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|(n, _)| n == name) {
            return Err(RepositoryError::AlreadyExists(name.to_string()));
        }
        entries.push((name.to_string(), content.to_vec()));
        Ok(())
    }

    async fn read_entry(&self, name: &str) -> Result<Vec<u8>, RepositoryError> {
        Self::check(name)?;
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }

    async fn delete_entry(&self, name: &str) -> Result<(), RepositoryError> {
        Self::check(name)?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|(n, _)| n != name);
        if entries.len() == before {
            return Err(RepositoryError::NotFound(name.to_string()));
        }
        self.sidecars.lock().unwrap().remove(name);
        Ok(())
    }

    async fn read_sidecar(&self, name: &str) -> Result<Option<String>, RepositoryError> {
        Self::check(name)?;
        Ok(self.sidecar(name))
    }

    async fn write_sidecar(&self, name: &str, json: &str) -> Result<(), RepositoryError> {
        Self::check(name)?;
        self.insert_sidecar(name, json);
        Ok(())
    }
}

/// Clock that counts up from a fixed start.
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub const fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

/// Still source returning a canned capture.
pub struct CannedStill(pub Result<CapturedImage, StillSourceError>);

impl CannedStill {
    pub fn jpeg(bytes: &[u8]) -> Self {
        Self(Ok(CapturedImage::jpeg(bytes.to_vec())))
    }
}

#[async_trait]
impl StillSourcePort for CannedStill {
    async fn capture_still(&self) -> Result<CapturedImage, StillSourceError> {
        self.0.clone()
    }
}
