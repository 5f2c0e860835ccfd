//! Garment domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Closed enums
// ─────────────────────────────────────────────────────────────────────────────

/// Which half of the closet a garment belongs to.
///
/// This is a closed set: nothing else is ever accepted from the classifier
/// or written into an entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 2] = [Self::Top, Self::Bottom];

    /// Label used both on the wire and as the first entry-name field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }

    /// Entry-name prefix used to route persisted entries into this category.
    pub const fn entry_prefix(self) -> &'static str {
        match self {
            Self::Top => "Top_",
            Self::Bottom => "Bottom_",
        }
    }

    /// Parse an exact label (`"Top"` or `"Bottom"`).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display background that best contrasts the garment's own colour.
///
/// `Dark` is the fallback for entries whose name carries no usable tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    Light,
    #[default]
    Dark,
}

impl ContrastMode {
    /// Lowercase tag used on the wire and in entry names.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an exact tag (`"light"` or `"dark"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ContrastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// The fields a successful classification yields.
///
/// Becomes a `GarmentRecord` once background removal succeeds and a
/// timestamp is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedGarment {
    pub category: Category,
    /// Display form, spaces allowed.
    pub item_name: String,
    /// Short style keywords, in the order the classifier returned them.
    pub tags: Vec<String>,
    pub contrast_mode: ContrastMode,
}

impl ClassifiedGarment {
    /// Stamp the classification with its creation time.
    pub fn into_record(self, created_at: i64) -> GarmentRecord {
        GarmentRecord {
            category: self.category,
            item_name: self.item_name,
            tags: self.tags,
            contrast_mode: self.contrast_mode,
            created_at,
        }
    }
}

/// One captured, classified garment.
///
/// The background-free asset is not embedded: it is the content of the
/// entry whose name `codec::encode` derives from this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentRecord {
    pub category: Category,
    /// Display form, spaces allowed.
    pub item_name: String,
    pub tags: Vec<String>,
    pub contrast_mode: ContrastMode,
    /// Epoch milliseconds. Unique per record and doubles as its identifier.
    pub created_at: i64,
}

impl GarmentRecord {
    /// The persisted entry name for this record.
    pub fn entry_name(&self) -> String {
        crate::codec::encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_and_prefixes() {
        assert_eq!(Category::Top.as_str(), "Top");
        assert_eq!(Category::Bottom.entry_prefix(), "Bottom_");
        assert_eq!(Category::from_label("Bottom"), Some(Category::Bottom));
        assert_eq!(Category::from_label("bottom"), None);
        assert_eq!(Category::from_label("Shoe"), None);
    }

    #[test]
    fn test_contrast_tags() {
        assert_eq!(ContrastMode::from_tag("light"), Some(ContrastMode::Light));
        assert_eq!(ContrastMode::from_tag("Light"), None);
        assert_eq!(ContrastMode::default(), ContrastMode::Dark);
        assert_eq!(ContrastMode::Light.to_string(), "light");
    }

    #[test]
    fn test_contrast_serde_is_lowercase() {
        let json = serde_json::to_string(&ContrastMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let garment = ClassifiedGarment {
            category: Category::Top,
            item_name: "Striped Tee".to_string(),
            tags: vec!["casual".to_string(), "cotton".to_string()],
            contrast_mode: ContrastMode::Light,
        };

        let record = garment.into_record(1_700_000_000_000);
        assert_eq!(record.category, Category::Top);
        assert_eq!(record.item_name, "Striped Tee");
        assert_eq!(record.tags.len(), 2);
        assert_eq!(record.created_at, 1_700_000_000_000);
        assert_eq!(record.entry_name(), "Top_Striped-Tee_light_1700000000000.png");
    }

    #[test]
    fn test_classified_garment_keys_match_record() {
        let garment = ClassifiedGarment {
            category: Category::Bottom,
            item_name: "Chinos".to_string(),
            tags: Vec::new(),
            contrast_mode: ContrastMode::Dark,
        };
        let json = serde_json::to_value(&garment).unwrap();
        assert_eq!(json["itemName"], "Chinos");
        assert_eq!(json["contrastMode"], "dark");
        assert!(json.get("item_name").is_none());
    }
}
