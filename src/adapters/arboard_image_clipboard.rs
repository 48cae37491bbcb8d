use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageClipboard;
use crate::core::models::EncodedPng;
use crate::global_constants::LOG_TAG_CLIPBOARD;

/// System clipboard backed by `arboard`.
///
/// The `Clipboard` handle lives as long as this adapter: on X11 the copied
/// image is served by whoever holds it, so dropping it after each write
/// would empty the clipboard again.
pub struct ArboardImageClipboard {
    clipboard: Arc<Mutex<Option<Clipboard>>>,
}

impl ArboardImageClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: Arc::new(Mutex::new(None)),
        }
    }

    fn write_blocking(slot: &Mutex<Option<Clipboard>>, png: &EncodedPng) -> Result<()> {
        let rgba = png.decode_rgba()?;

        let mut guard = slot
            .lock()
            .map_err(|_| anyhow::anyhow!("Clipboard handle lock was poisoned"))?;

        if guard.is_none() {
            log::debug!("{} Opening system clipboard", LOG_TAG_CLIPBOARD);
            *guard = Some(Clipboard::new().context("System clipboard is not available")?);
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("System clipboard is not available"))?;

        let image = ImageData {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        };

        if let Err(e) = clipboard.set_image(image) {
            // Reconnect on the next attempt instead of reusing a broken handle.
            *guard = None;
            return Err(e).context("Clipboard refused the image");
        }

        log::info!(
            "{} Wrote {}x{} image ({} PNG bytes)",
            LOG_TAG_CLIPBOARD,
            png.width(),
            png.height(),
            png.bytes().len()
        );
        Ok(())
    }
}

#[async_trait]
impl ImageClipboard for ArboardImageClipboard {
    async fn write_png(&self, png: EncodedPng) -> Result<()> {
        let slot = Arc::clone(&self.clipboard);

        tokio::task::spawn_blocking(move || Self::write_blocking(&slot, &png))
            .await
            .context("Clipboard task did not complete")?
    }
}
