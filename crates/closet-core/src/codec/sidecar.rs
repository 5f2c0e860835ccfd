//! JSON sidecar metadata stored alongside each entry.
//!
//! The entry name stays the primary schema. The sidecar adds what the name
//! cannot carry (tags, the unsanitized item name) and lets listing stop
//! depending on positional parsing for entries written from now on.

use serde::{Deserialize, Serialize};

use super::entry_name::EntryNameFormat;
use crate::domain::{Category, ContrastMode, DecodedEntry, GarmentRecord};

/// Current sidecar schema version.
pub const METADATA_VERSION: u32 = 1;

/// Full record as written to the sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    pub version: u32,
    pub category: Category,
    pub item_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub contrast_mode: ContrastMode,
    pub created_at: i64,
}

impl EntryMetadata {
    pub fn from_record(record: &GarmentRecord) -> Self {
        Self {
            version: METADATA_VERSION,
            category: record.category,
            item_name: record.item_name.clone(),
            tags: record.tags.clone(),
            contrast_mode: record.contrast_mode,
            created_at: record.created_at,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Overlay this metadata onto an entry decoded from its name.
    ///
    /// Returns `None` when the sidecar disagrees with the entry's prefix
    /// routing or has an unknown version; the caller keeps the
    /// name-decoded record in that case.
    pub fn apply_to(&self, decoded: &DecodedEntry) -> Option<DecodedEntry> {
        if self.version != METADATA_VERSION || decoded.category != Some(self.category) {
            return None;
        }

        Some(DecodedEntry {
            entry_name: decoded.entry_name.clone(),
            category: decoded.category,
            item_name: self.item_name.clone(),
            contrast_mode: self.contrast_mode,
            created_at: Some(self.created_at),
            tags: self.tags.clone(),
            format: EntryNameFormat::Structured,
        })
    }
}
