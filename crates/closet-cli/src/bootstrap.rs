//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Closet directory resolution (via closet-core paths)
//! - Filesystem entry store (via closet-fs)
//! - Classifier and background-removal clients (via closet-vision)
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use closet_core::{
    BackgroundRemoverPort, CapturePipeline, ClosetDirSource, ClosetService,
    DirectoryCreationStrategy, GarmentClassifierPort, resolve_closet_dir,
};
use closet_fs::{ClosetFactory, FsEntryStore, open_store};
use closet_vision::{ClassifierConfig, DefaultClassifier, DefaultRemover, ExtractorConfig};
use tracing::debug;

use crate::commands::ServiceArgs;
use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `--closet-dir` (or `CLOSET_DATA_DIR`, which clap folds in).
    pub closet_dir: Option<String>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    closet: Arc<ClosetService>,
    closet_dir: PathBuf,
    dir_source: ClosetDirSource,
}

impl CliContext {
    /// The closet service shared by every command.
    pub fn closet(&self) -> &Arc<ClosetService> {
        &self.closet
    }

    /// The directory entries live in.
    pub fn closet_dir(&self) -> &Path {
        &self.closet_dir
    }

    /// Where `closet_dir` came from.
    pub const fn dir_source(&self) -> ClosetDirSource {
        self.dir_source
    }

    /// Build a capture pipeline with HTTP clients configured from `args`.
    ///
    /// Clients are only built for commands that talk to the services, so
    /// `list` and `remove` work without API keys.
    pub fn capture_pipeline(&self, args: &ServiceArgs) -> Result<CapturePipeline, CliError> {
        let timeout = Duration::from_secs(args.timeout_secs);

        let mut classifier_config = ClassifierConfig::default()
            .with_optional_api_key(args.vision_api_key.clone())
            .with_timeout(timeout);
        if let Some(model) = &args.vision_model {
            classifier_config = classifier_config.with_model(model);
        }
        if let Some(url) = &args.vision_base_url {
            classifier_config = classifier_config.with_base_url(url);
        }

        let mut extractor_config = ExtractorConfig::default()
            .with_optional_api_key(args.removal_api_key.clone())
            .with_timeout(timeout);
        if let Some(url) = &args.removal_base_url {
            extractor_config = extractor_config.with_base_url(url);
        }

        let classifier: Arc<dyn GarmentClassifierPort> =
            Arc::new(DefaultClassifier::new(&classifier_config)?);
        let extractor: Arc<dyn BackgroundRemoverPort> =
            Arc::new(DefaultRemover::new(&extractor_config)?);

        debug!(?classifier_config, ?extractor_config, "Built service clients");
        Ok(ClosetFactory::build_pipeline(
            Arc::clone(&self.closet),
            classifier,
            extractor,
        ))
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the closet directory, creating it on first use, and wires the
/// filesystem store into a `ClosetService`.
///
/// # Errors
///
/// Returns an error if no directory can be resolved or it cannot be created.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let resolution = resolve_closet_dir(config.closet_dir.as_deref()).map_err(CliError::from)?;
    let store = open_store(&resolution.path, DirectoryCreationStrategy::AutoCreate)
        .map_err(|e| CliError::Config(format!("{e:#}")))?;
    debug!(path = %resolution.path.display(), source = ?resolution.source, "Closet directory resolved");
    Ok(bootstrap_with(store, resolution.source))
}

/// Wire a context around an already-open store.
pub fn bootstrap_with(store: FsEntryStore, dir_source: ClosetDirSource) -> CliContext {
    let closet_dir = store.base_dir().to_path_buf();
    CliContext {
        closet: ClosetFactory::build_closet(store),
        closet_dir,
        dir_source,
    }
}
