//! Raw still images handed over by the capture device.

use base64::{Engine as _, engine::general_purpose};

/// A single still capture.
///
/// Both remote services receive the same bytes: the classifier gets them
/// base64-encoded, the background remover gets them as a file upload.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    bytes: Vec<u8>,
    mime_type: String,
}

impl CapturedImage {
    /// Wrap raw image bytes with their mime type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// A JPEG capture, which is what phone cameras produce.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "image/jpeg")
    }

    /// Guess the mime type from a file extension, defaulting to JPEG.
    pub fn mime_for_extension(ext: &str) -> &'static str {
        match ext.to_ascii_lowercase().as_str() {
            "png" => "image/png",
            "webp" => "image/webp",
            "heic" | "heif" => "image/heic",
            _ => "image/jpeg",
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard (padded) base64 of the raw bytes.
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }
}

// Keep image payloads out of debug logs.
impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
