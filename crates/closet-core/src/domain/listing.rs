//! Decoded closet entries and the Tops/Bottoms partition.

use serde::{Deserialize, Serialize};

use super::garment::{Category, ContrastMode};
use crate::codec::EntryNameFormat;

/// A best-effort record reconstructed from a persisted entry.
///
/// Decoding never fails, so fields the entry could not supply carry
/// fallbacks (`"Unknown Item"`, `ContrastMode::Dark`, no timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedEntry {
    /// The persisted entry name this record was decoded from.
    pub entry_name: String,
    /// Category by prefix match; `None` when neither prefix matches.
    pub category: Option<Category>,
    pub item_name: String,
    pub contrast_mode: ContrastMode,
    /// Epoch millis when the entry carries one.
    pub created_at: Option<i64>,
    /// Only known when a metadata sidecar exists.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Which entry-name layout was recognised.
    pub format: EntryNameFormat,
}

/// The closet split into its two halves, each in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosetListing {
    pub tops: Vec<DecodedEntry>,
    pub bottoms: Vec<DecodedEntry>,
}

impl ClosetListing {
    /// Entries for one category.
    pub fn entries(&self, category: Category) -> &[DecodedEntry] {
        match category {
            Category::Top => &self.tops,
            Category::Bottom => &self.bottoms,
        }
    }

    /// Look up a listed entry by its persisted name.
    pub fn get(&self, entry_name: &str) -> Option<&DecodedEntry> {
        self.tops
            .iter()
            .chain(self.bottoms.iter())
            .find(|e| e.entry_name == entry_name)
    }

    pub fn len(&self) -> usize {
        self.tops.len() + self.bottoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty()
    }
}
