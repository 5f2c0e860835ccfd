//! Subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a photo, remove its background and add it to the closet
    Capture {
        /// Photo of a single garment (JPEG, PNG, WebP or HEIC)
        image: PathBuf,

        #[command(flatten)]
        services: ServiceArgs,
    },

    /// List Tops and Bottoms
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an entry from the closet (irreversible)
    Remove {
        /// Entry name as shown by `closet list`
        entry: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Copy an entry's background-free image out of the closet
    Export {
        /// Entry name as shown by `closet list`
        entry: String,
        /// Destination file
        dest: PathBuf,
    },

    /// Show the resolved closet directory
    Paths,
}

/// Remote service settings for `capture`.
///
/// Keys come from flags, the environment or `.env`; they are never printed.
#[derive(Args, Clone)]
pub struct ServiceArgs {
    /// API key for the vision classifier
    #[arg(long, env = "CLOSET_VISION_API_KEY", hide_env_values = true)]
    pub vision_api_key: Option<String>,

    /// Vision model name
    #[arg(long, env = "CLOSET_VISION_MODEL")]
    pub vision_model: Option<String>,

    /// Vision API base URL
    #[arg(long, env = "CLOSET_VISION_BASE_URL")]
    pub vision_base_url: Option<String>,

    /// API key for the background removal service
    #[arg(long, env = "CLOSET_REMOVAL_API_KEY", hide_env_values = true)]
    pub removal_api_key: Option<String>,

    /// Background removal API base URL
    #[arg(long, env = "CLOSET_REMOVAL_BASE_URL")]
    pub removal_base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "CLOSET_HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Matches the `--timeout-secs` default.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl Default for ServiceArgs {
    fn default() -> Self {
        Self {
            vision_api_key: None,
            vision_model: None,
            vision_base_url: None,
            removal_api_key: None,
            removal_base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ServiceArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceArgs")
            .field("vision_api_key", &self.vision_api_key.as_ref().map(|_| "<redacted>"))
            .field("vision_model", &self.vision_model)
            .field("vision_base_url", &self.vision_base_url)
            .field("removal_api_key", &self.removal_api_key.as_ref().map(|_| "<redacted>"))
            .field("removal_base_url", &self.removal_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
