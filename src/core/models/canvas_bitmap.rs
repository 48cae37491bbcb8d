use std::io::Cursor;

use anyhow::{Context, Result};
use iced::widget::image::Handle as ImageHandle;
use image::{ImageFormat, Rgba, RgbaImage};

use super::EncodedPng;

#[derive(Clone)]
pub struct CanvasBitmap {
    pixels: RgbaImage,
}

impl std::fmt::Debug for CanvasBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasBitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl CanvasBitmap {
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        log::debug!(
            "[CANVAS_BITMAP] filling {}x{} canvas with {:?}",
            width,
            height,
            color
        );

        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(color)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    pub fn to_image_handle(&self) -> ImageHandle {
        ImageHandle::from_rgba(self.width(), self.height(), self.pixels.as_raw().clone())
    }

    pub fn encode_png(&self) -> Result<EncodedPng> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("Unable to encode canvas as PNG")?;

        log::debug!(
            "[CANVAS_BITMAP] encoded {}x{} canvas into {} PNG bytes",
            self.width(),
            self.height(),
            bytes.len()
        );

        Ok(EncodedPng::new(bytes, self.width(), self.height()))
    }
}
