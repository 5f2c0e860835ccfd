//! Entry store over one flat directory.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use closet_core::codec::is_safe_entry_name;
use closet_core::{EntryStorePort, RepositoryError};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Hidden subdirectory holding one `<entry>.json` sidecar per entry.
pub const META_DIR: &str = ".meta";

/// Closet entries as files in a single directory.
///
/// Hidden names (leading `.`) and subdirectories are never entries.
#[derive(Debug, Clone)]
pub struct FsEntryStore {
    base: PathBuf,
}

impl FsEntryStore {
    /// Create a store rooted at `base`. The directory is not touched until
    /// first use; see `setup::open_store` for a checked constructor.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory entries live in.
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, name: &str) -> Result<PathBuf, RepositoryError> {
        if is_safe_entry_name(name) {
            Ok(self.base.join(name))
        } else {
            Err(RepositoryError::InvalidName(name.to_string()))
        }
    }

    fn meta_dir(&self) -> PathBuf {
        self.base.join(META_DIR)
    }

    fn sidecar_path(&self, name: &str) -> Result<PathBuf, RepositoryError> {
        if is_safe_entry_name(name) {
            Ok(self.meta_dir().join(format!("{name}.json")))
        } else {
            Err(RepositoryError::InvalidName(name.to_string()))
        }
    }
}

/// Map an I/O error for `name`, turning `NotFound` into the domain variant.
fn map_io(name: &str, op: &str, e: &io::Error) -> RepositoryError {
    match e.kind() {
        ErrorKind::NotFound => RepositoryError::NotFound(name.to_string()),
        ErrorKind::AlreadyExists => RepositoryError::AlreadyExists(name.to_string()),
        _ => RepositoryError::Storage(format!("failed to {op} {name}: {e}")),
    }
}

#[async_trait]
impl EntryStorePort for FsEntryStore {
    async fn list_entries(&self) -> Result<Vec<String>, RepositoryError> {
        let mut dir = match fs::read_dir(&self.base).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.base.display(), "Closet directory missing; listing empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "failed to read {}: {e}",
                    self.base.display()
                )));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| RepositoryError::Storage(format!("failed to list entries: {e}")))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                warn!(path = %entry.path().display(), "Skipping entry with non-UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            match entry.file_type().await {
                Ok(kind) if kind.is_file() => names.push(name),
                Ok(_) => {}
                Err(e) => warn!(entry = %name, error = %e, "Skipping unreadable entry"),
            }
        }
        Ok(names)
    }

    async fn write_entry(&self, name: &str, content: &[u8]) -> Result<(), RepositoryError> {
        let path = self.entry_path(name)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| map_io(name, "create", &e))?;

        let written = async {
            file.write_all(content).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                warn!(entry = %name, error = %cleanup, "Failed to remove partial entry");
            }
            return Err(map_io(name, "write", &e));
        }

        debug!(entry = %name, bytes = content.len(), "Wrote entry");
        Ok(())
    }

    async fn read_entry(&self, name: &str) -> Result<Vec<u8>, RepositoryError> {
        let path = self.entry_path(name)?;
        fs::read(&path).await.map_err(|e| map_io(name, "read", &e))
    }

    async fn delete_entry(&self, name: &str) -> Result<(), RepositoryError> {
        let path = self.entry_path(name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| map_io(name, "delete", &e))?;

        let sidecar = self.sidecar_path(name)?;
        match fs::remove_file(&sidecar).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(entry = %name, error = %e, "Failed to remove sidecar"),
        }

        debug!(entry = %name, "Deleted entry");
        Ok(())
    }

    async fn read_sidecar(&self, name: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.sidecar_path(name)?;
        match fs::read_to_string(&path).await {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io(name, "read sidecar for", &e)),
        }
    }

    async fn write_sidecar(&self, name: &str, json: &str) -> Result<(), RepositoryError> {
        let path = self.sidecar_path(name)?;
        let meta_dir = self.meta_dir();
        fs::create_dir_all(&meta_dir)
            .await
            .map_err(|e| RepositoryError::Storage(format!("failed to create {META_DIR}: {e}")))?;

        // Write then rename, so a reader never sees half a sidecar.
        let staging = meta_dir.join(format!(".{name}.json.tmp"));
        fs::write(&staging, json)
            .await
            .map_err(|e| map_io(name, "write sidecar for", &e))?;
        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(map_io(name, "write sidecar for", &e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio_test::{assert_err, assert_ok};

    fn store() -> (TempDir, FsEntryStore) {
        let temp = TempDir::new().unwrap();
        let store = FsEntryStore::new(temp.path());
        (temp, store)
    }

    #[tokio::test]
    async fn test_write_read_list() {
        let (_temp, store) = store();
        assert_ok!(store.write_entry("Top_Tee_dark_1.png", b"one").await);
        assert_ok!(store.write_entry("Bottom_Jeans_light_2.png", b"two").await);

        let mut names = store.list_entries().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["Bottom_Jeans_light_2.png", "Top_Tee_dark_1.png"]);
        assert_eq!(store.read_entry("Top_Tee_dark_1.png").await.unwrap(), b"one");
    }

    #[tokio::test]
    async fn test_listing_skips_hidden_and_directories() {
        let (temp, store) = store();
        std::fs::write(temp.path().join(".DS_Store"), b"x").unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("snapshot.jpg"), b"x").unwrap();
        store.write_entry("Top_A_dark_1.png", b"a").await.unwrap();
        store
            .write_sidecar("Top_A_dark_1.png", "{}")
            .await
            .unwrap();

        let mut names = store.list_entries().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["Top_A_dark_1.png", "snapshot.jpg"]);
    }

    #[tokio::test]
    async fn test_missing_directory_lists_empty() {
        let temp = TempDir::new().unwrap();
        let store = FsEntryStore::new(temp.path().join("not-yet"));
        assert!(store.list_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_never_overwrites() {
        let (_temp, store) = store();
        store.write_entry("Top_A_dark_1.png", b"first").await.unwrap();

        let err = store
            .write_entry("Top_A_dark_1.png", b"second")
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists("Top_A_dark_1.png".to_string()));
        assert_eq!(store.read_entry("Top_A_dark_1.png").await.unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_delete_removes_sidecar_and_is_not_found_twice() {
        let (temp, store) = store();
        store.write_entry("Top_A_dark_1.png", b"a").await.unwrap();
        store
            .write_sidecar("Top_A_dark_1.png", r#"{"version":1}"#)
            .await
            .unwrap();
        assert!(temp.path().join(META_DIR).join("Top_A_dark_1.png.json").exists());

        assert_ok!(store.delete_entry("Top_A_dark_1.png").await);
        assert!(!temp.path().join(META_DIR).join("Top_A_dark_1.png.json").exists());
        assert_eq!(store.read_sidecar("Top_A_dark_1.png").await.unwrap(), None);

        let err = store.delete_entry("Top_A_dark_1.png").await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound("Top_A_dark_1.png".to_string()));
    }

    #[tokio::test]
    async fn test_sidecar_replace() {
        let (_temp, store) = store();
        store.write_entry("Top_A_dark_1.png", b"a").await.unwrap();
        store.write_sidecar("Top_A_dark_1.png", "old").await.unwrap();
        store.write_sidecar("Top_A_dark_1.png", "new").await.unwrap();

        assert_eq!(
            store.read_sidecar("Top_A_dark_1.png").await.unwrap().as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_unsafe_names_rejected() {
        let (temp, store) = store();
        let outside = temp.path().parent().unwrap().join("victim.png");

        for name in ["../victim.png", "a/b.png", ".meta", "", ".."] {
            assert!(matches!(
                store.read_entry(name).await,
                Err(RepositoryError::InvalidName(_))
            ));
            assert_err!(store.delete_entry(name).await);
            assert_err!(store.write_entry(name, b"x").await);
        }
        assert!(!outside.exists());
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let (_temp, store) = store();
        assert!(matches!(
            store.read_entry("Top_Nope_dark_1.png").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
