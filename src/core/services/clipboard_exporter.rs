use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ImageClipboard;
use crate::core::models::CanvasBitmap;
use crate::global_constants::LOG_TAG_EXPORTER;

/// Encodes the snapshot as PNG, then hands it to the clipboard.
///
/// The two steps run strictly in order. The snapshot is owned, so edits made
/// while the export is in flight do not change what ends up on the clipboard.
pub async fn copy_bitmap_to_clipboard(
    snapshot: CanvasBitmap,
    clipboard: Arc<dyn ImageClipboard>,
) -> Result<()> {
    log::info!(
        "{} Encoding {}x{} canvas as PNG",
        LOG_TAG_EXPORTER,
        snapshot.width(),
        snapshot.height()
    );

    let png = tokio::task::spawn_blocking(move || snapshot.encode_png())
        .await
        .context("PNG encoding task did not complete")??;

    log::debug!("{} Writing PNG to clipboard", LOG_TAG_EXPORTER);
    clipboard
        .write_png(png)
        .await
        .context("Unable to write image to clipboard")?;

    log::info!("{} Image copied to clipboard", LOG_TAG_EXPORTER);
    Ok(())
}

/// Runs an export and flattens the outcome for the UI message.
pub async fn run_copy_request(
    snapshot: CanvasBitmap,
    clipboard: Arc<dyn ImageClipboard>,
) -> Result<(), String> {
    copy_bitmap_to_clipboard(snapshot, clipboard)
        .await
        .map_err(|e| {
            log::error!("{} Failed to copy image: {:#}", LOG_TAG_EXPORTER, e);
            format!("{:#}", e)
        })
}
