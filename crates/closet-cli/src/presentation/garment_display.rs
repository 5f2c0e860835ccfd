//! Closet entry display.

use chrono::{Local, TimeZone};
use closet_core::{Category, ClosetListing, DecodedEntry, EntryNameFormat, GarmentRecord};

use super::tables::{print_separator, truncate_string};

/// Render epoch millis as local time, or `--` when absent or out of range.
pub fn format_created_at(created_at: Option<i64>) -> String {
    created_at
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map_or_else(|| "--".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

fn format_label(format: EntryNameFormat) -> &'static str {
    match format {
        EntryNameFormat::Structured => "",
        EntryNameFormat::Legacy => " (legacy)",
    }
}

fn print_section(title: &str, entries: &[DecodedEntry]) {
    println!("{title} ({})", entries.len());
    if entries.is_empty() {
        println!("  (none)");
        return;
    }
    println!(
        "  {:<28} {:<6} {:<17} {:<24} Entry",
        "Item", "Shade", "Added", "Tags"
    );
    print!("  ");
    print_separator(100);
    for entry in entries {
        println!(
            "  {:<28} {:<6} {:<17} {:<24} {}{}",
            truncate_string(&entry.item_name, 27),
            entry.contrast_mode.as_tag(),
            format_created_at(entry.created_at),
            truncate_string(&entry.tags.join(", "), 23),
            entry.entry_name,
            format_label(entry.format),
        );
    }
}

/// Print both halves of the closet.
pub fn display_listing(listing: &ClosetListing) {
    print_section("Tops", listing.entries(Category::Top));
    println!();
    print_section("Bottoms", listing.entries(Category::Bottom));
}

/// Print one freshly saved garment.
pub fn display_entry_summary(entry_name: &str, record: &GarmentRecord) {
    println!("  Item:     {}", record.item_name);
    println!("  Category: {}", record.category.as_str());
    println!("  Shade:    {}", record.contrast_mode.as_tag());
    if !record.tags.is_empty() {
        println!("  Tags:     {}", record.tags.join(", "));
    }
    println!("  Added:    {}", format_created_at(Some(record.created_at)));
    println!("  Entry:    {entry_name}");
}
