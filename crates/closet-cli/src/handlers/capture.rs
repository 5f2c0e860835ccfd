//! Capture command handler.
//!
//! Runs one photo through classify, cut-out and save. Progress goes to
//! stderr so stdout carries only the result.

use std::path::Path;

use anyhow::Result;
use closet_core::{CaptureOutcome, PipelineState};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::ServiceArgs;
use crate::error::CliError;
use crate::presentation::display_entry_summary;
use crate::utils::FileStill;

fn progress_line(state: PipelineState) -> Option<&'static str> {
    match state {
        PipelineState::Idle => None,
        PipelineState::Capturing => Some("Reading photo..."),
        PipelineState::Classifying => Some("Identifying garment..."),
        PipelineState::Extracting => Some("Removing background..."),
        PipelineState::Persisting => Some("Saving to closet..."),
    }
}

/// Execute the capture command.
///
/// A photo that is not a top or bottom is reported and is not an error.
///
/// # Errors
///
/// Returns a `CliError` when the photo cannot be read, a service is
/// unreachable or answers garbage, or the entry cannot be saved.
pub async fn execute(ctx: &CliContext, image: &Path, services: &ServiceArgs) -> Result<()> {
    let pipeline = ctx.capture_pipeline(services)?;
    let source = FileStill::new(image);

    let mut progress = pipeline.subscribe();
    let reporter = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            if let Some(line) = progress_line(*progress.borrow_and_update()) {
                eprintln!("{line}");
            }
        }
    });

    let outcome = pipeline.run(&source).await;
    drop(pipeline);
    // The sender is gone, so the reporter drains and exits.
    let _ = reporter.await;

    match outcome.map_err(CliError::from)? {
        CaptureOutcome::Saved(saved) => {
            info!(entry = %saved.entry_name, "Garment saved");
            println!("Saved to closet:");
            display_entry_summary(&saved.entry_name, &saved.record);
        }
        CaptureOutcome::Rejected => {
            println!("{}", CaptureOutcome::REJECTED_MESSAGE);
        }
    }
    Ok(())
}
