use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

#[derive(Clone)]
pub struct EncodedPng {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl std::fmt::Debug for EncodedPng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedPng")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("byte_count", &self.bytes.len())
            .finish()
    }
}

impl EncodedPng {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decodes the PNG back into raw RGBA pixels, for clipboard backends
    /// that take pixel data and do their own encoding.
    pub fn decode_rgba(&self) -> Result<RgbaImage> {
        let decoded = image::load_from_memory_with_format(&self.bytes, ImageFormat::Png)
            .context("Unable to decode PNG payload")?;
        Ok(decoded.to_rgba8())
    }
}
