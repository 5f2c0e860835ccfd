//! HTTP adapters for the two remote services a capture depends on.
//!
//! - `DefaultClassifier` implements `GarmentClassifierPort` against a
//!   `generateContent`-style vision endpoint
//! - `DefaultRemover` implements `BackgroundRemoverPort` against a
//!   multipart background-removal endpoint
//!
//! Both are generic over an internal `HttpBackend` so the request building
//! and response validation can be tested without a network. Neither retries.
//!
//! ```no_run
//! use closet_vision::{ClassifierConfig, DefaultClassifier};
//!
//! let config = ClassifierConfig::new().with_api_key("...");
//! let classifier = DefaultClassifier::new(&config).expect("valid config");
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type aliases - the clients are meant to be
// used through the core port traits, not their generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use client::{DefaultClassifier, DefaultRemover};

// Configuration
pub use config::{ClassifierConfig, DEFAULT_TIMEOUT, ExtractorConfig};

// Construction errors
pub use error::VisionError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
