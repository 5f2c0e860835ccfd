//! Core domain types.
//!
//! These types represent the pure closet model, independent of any
//! infrastructure concerns (HTTP, filesystem, etc.).
//!
//! # Structure
//!
//! - `garment` - `GarmentRecord` and its closed enums
//! - `image` - `CapturedImage`, the raw still handed to both remote services
//! - `listing` - decoded entries and the Tops/Bottoms partition

mod garment;
mod image;
mod listing;

pub use garment::{Category, ClassifiedGarment, ContrastMode, GarmentRecord};
pub use image::CapturedImage;
pub use listing::{ClosetListing, DecodedEntry};
