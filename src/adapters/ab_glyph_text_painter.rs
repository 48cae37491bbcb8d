use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use anyhow::{Context, Result};
use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::core::interfaces::ports::TextPainter;
use crate::core::models::CanvasBitmap;
use crate::global_constants::{
    BOLD_SERIF_FONT_CANDIDATES, FONT_SIZE_PX, LOG_TAG_TEXT_PAINTER, TEXT_RGBA,
};

/// Draws lines in a bold serif TrueType font with `imageproc`.
pub struct AbGlyphTextPainter {
    font: FontVec,
    scale: PxScale,
    color: Rgba<u8>,
}

impl AbGlyphTextPainter {
    /// Tries `font_override` first, then the well-known system locations
    /// of Georgia Bold and its usual stand-ins.
    pub fn load(font_override: Option<&Path>) -> Result<Self> {
        let candidates = font_override
            .map(Path::to_path_buf)
            .into_iter()
            .chain(BOLD_SERIF_FONT_CANDIDATES.iter().map(PathBuf::from));

        for path in candidates {
            match Self::load_font_file(&path) {
                Ok(font) => {
                    log::info!("{} Using font {:?}", LOG_TAG_TEXT_PAINTER, path);
                    return Ok(Self::from_font(font));
                }
                Err(e) => {
                    log::debug!("{} Skipping font candidate: {:#}", LOG_TAG_TEXT_PAINTER, e);
                }
            }
        }

        anyhow::bail!("No usable bold serif font found; set font_path in settings")
    }

    pub fn from_font(font: FontVec) -> Self {
        Self {
            font,
            scale: PxScale::from(FONT_SIZE_PX),
            color: Rgba(TEXT_RGBA),
        }
    }

    fn load_font_file(path: &Path) -> Result<FontVec> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Unable to read font {:?}", path))?;
        FontVec::try_from_vec(bytes).map_err(|e| anyhow::anyhow!("Invalid font {:?}: {}", path, e))
    }
}

impl TextPainter for AbGlyphTextPainter {
    fn fill_text_centered(&self, canvas: &mut CanvasBitmap, line: &str, center_x: f32, center_y: f32) {
        if line.is_empty() {
            return;
        }

        let (line_width, _) = text_size(self.scale, &self.font, line);
        let scaled_font = self.font.as_scaled(self.scale);
        let em_height = scaled_font.ascent() - scaled_font.descent();

        // imageproc anchors text at the top of the ascent.
        let left = (center_x - line_width as f32 / 2.0).round() as i32;
        let top = (center_y - em_height / 2.0).round() as i32;

        draw_text_mut(
            canvas.pixels_mut(),
            self.color,
            left,
            top,
            self.scale,
            &self.font,
            line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_constants::BACKGROUND_RGBA;

    #[test]
    fn test_missing_font_file_is_an_error() {
        let result = AbGlyphTextPainter::load_font_file(Path::new("/nonexistent/Serif-Bold.ttf"));
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_font_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("not-a-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"not a font").unwrap();

        let result = AbGlyphTextPainter::load_font_file(&path);

        assert!(result.is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_glyphs_land_around_requested_center() {
        let Ok(painter) = AbGlyphTextPainter::load(None) else {
            // No system serif font on this machine.
            return;
        };
        let mut canvas = CanvasBitmap::filled(600, 400, BACKGROUND_RGBA);

        painter.fill_text_centered(&mut canvas, "HHH", 300.0, 200.0);

        let painted: Vec<(u32, u32)> = canvas
            .pixels()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != BACKGROUND_RGBA)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!painted.is_empty());

        let min_x = painted.iter().map(|(x, _)| *x).min().unwrap();
        let max_x = painted.iter().map(|(x, _)| *x).max().unwrap();
        let min_y = painted.iter().map(|(_, y)| *y).min().unwrap();
        let max_y = painted.iter().map(|(_, y)| *y).max().unwrap();
        assert!(min_x < 300 && max_x > 300);
        assert!(min_y < 200 + 20 && max_y > 200 - 20);
    }

    #[test]
    fn test_empty_line_paints_nothing() {
        let Ok(painter) = AbGlyphTextPainter::load(None) else {
            return;
        };
        let mut canvas = CanvasBitmap::filled(600, 400, BACKGROUND_RGBA);

        painter.fill_text_centered(&mut canvas, "", 300.0, 200.0);

        assert!(canvas.pixels().pixels().all(|p| p.0 == BACKGROUND_RGBA));
    }
}
