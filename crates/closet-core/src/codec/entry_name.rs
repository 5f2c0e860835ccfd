//! Encode/decode between a `GarmentRecord` and its persisted entry name.
//!
//! The layout must stay bit-for-bit compatible with entries already on
//! devices:
//!
//! - `Bottom_Faded-Wide-Leg-Jeans_light_1700000000000.png`
//! - `{Category}_{SanitizedName}_{light|dark}_{epochMillis}.png`
//!
//! Sanitized names only contain `[A-Za-z0-9-]`, so `_` is a safe field
//! separator for anything this module writes. Decoding is total: names it
//! does not recognise degrade to `EntryNameFormat::Legacy` defaults.

use serde::{Deserialize, Serialize};

use crate::domain::{Category, ContrastMode, DecodedEntry, GarmentRecord};

/// Extension of every entry this codec writes.
pub const ENTRY_EXTENSION: &str = "png";

/// Item name reported for entries without a structured name.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

const FIELD_SEPARATOR: char = '_';

/// Entry-name layouts that `decode` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryNameFormat {
    /// Four `_`-separated fields with a known contrast tag and a numeric
    /// timestamp before the extension.
    Structured,
    /// Anything else: raw camera filenames from before classification
    /// existed, or names edited by hand.
    Legacy,
}

/// Replace every character outside `[A-Za-z0-9]` with `-`.
///
/// Works per `char`, so a multi-byte character becomes a single `-`.
pub fn sanitize_item_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Produce the persisted entry name for a record.
pub fn encode(record: &GarmentRecord) -> String {
    format!(
        "{category}{sep}{name}{sep}{contrast}{sep}{stamp}.{ENTRY_EXTENSION}",
        category = record.category.as_str(),
        name = sanitize_item_name(&record.item_name),
        contrast = record.contrast_mode.as_tag(),
        stamp = record.created_at,
        sep = FIELD_SEPARATOR,
    )
}

/// Route an entry name by prefix (`Top_` / `Bottom_`).
///
/// Prefix, not substring: `Bottom_Top-Stitch-Jeans_dark_1.png` is a Bottom.
pub fn category_for_entry(entry_name: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| entry_name.starts_with(c.entry_prefix()))
}

/// Reconstruct a best-effort record from an entry name. Never fails.
pub fn decode(entry_name: &str) -> DecodedEntry {
    let category = category_for_entry(entry_name);

    match parse_structured(entry_name) {
        Some(fields) => DecodedEntry {
            entry_name: entry_name.to_string(),
            category,
            item_name: fields.sanitized_name.replace('-', " "),
            contrast_mode: fields.contrast_mode,
            created_at: Some(fields.created_at),
            tags: Vec::new(),
            format: EntryNameFormat::Structured,
        },
        None => DecodedEntry {
            entry_name: entry_name.to_string(),
            category,
            item_name: UNKNOWN_ITEM_NAME.to_string(),
            contrast_mode: ContrastMode::Dark,
            created_at: None,
            tags: Vec::new(),
            format: EntryNameFormat::Legacy,
        },
    }
}

/// Whether a name is safe to address inside the flat entry namespace.
///
/// Rejects empty names, path separators, parent references and hidden
/// names (the store keeps its own bookkeeping under dot-names).
pub fn is_safe_entry_name(entry_name: &str) -> bool {
    !entry_name.is_empty()
        && !entry_name.starts_with('.')
        && !entry_name.contains("..")
        && !entry_name.contains(['/', '\\', '\0'])
}

struct StructuredFields<'a> {
    sanitized_name: &'a str,
    contrast_mode: ContrastMode,
    created_at: i64,
}

fn parse_structured(entry_name: &str) -> Option<StructuredFields<'_>> {
    let fields: Vec<&str> = entry_name.split(FIELD_SEPARATOR).collect();
    let [_category, sanitized_name, contrast, stamp] = fields.as_slice() else {
        return None;
    };

    let contrast_mode = ContrastMode::from_tag(contrast)?;

    let (digits, extension) = stamp.split_once('.')?;
    if digits.is_empty() || extension.is_empty() || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let created_at = digits.parse::<i64>().ok()?;

    Some(StructuredFields {
        sanitized_name,
        contrast_mode,
        created_at,
    })
}
