//! A still source backed by an image file on disk.
//!
//! The CLI has no camera; `closet capture photo.jpg` treats the file as the
//! shutter press.

use std::path::PathBuf;

use async_trait::async_trait;
use closet_core::{CapturedImage, StillSourceError, StillSourcePort};

/// Reads one image file per capture.
#[derive(Debug, Clone)]
pub struct FileStill {
    path: PathBuf,
}

impl FileStill {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        CapturedImage::mime_for_extension(&ext)
    }
}

#[async_trait]
impl StillSourcePort for FileStill {
    async fn capture_still(&self) -> Result<CapturedImage, StillSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StillSourceError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let image = CapturedImage::new(bytes, self.mime_type());
        if image.is_empty() {
            return Err(StillSourceError::Empty);
        }
        Ok(image)
    }
}
