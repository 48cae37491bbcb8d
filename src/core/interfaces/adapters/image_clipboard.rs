use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::EncodedPng;

#[async_trait]
pub trait ImageClipboard: Send + Sync {
    async fn write_png(&self, png: EncodedPng) -> Result<()>;
}
