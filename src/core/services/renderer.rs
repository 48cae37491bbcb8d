use crate::core::interfaces::ports::{NoiseSource, TextPainter};
use crate::core::models::{layout_lines, CanvasBitmap};
use crate::global_constants::{
    BACKGROUND_RGBA, CANVAS_HEIGHT, CANVAS_WIDTH, LINE_HEIGHT_PX, LOG_TAG_RENDERER,
};

/// Turns the editor text into the noisy blue screen bitmap.
///
/// Every call repaints the whole canvas: background fill, one draw call per
/// `\n`-delimited line, then one noise offset per pixel shared by R, G and B.
pub struct BlueScreenRenderer {
    noise_source: Box<dyn NoiseSource>,
    text_painter: Box<dyn TextPainter>,
    width: u32,
    height: u32,
}

impl BlueScreenRenderer {
    pub fn build(noise_source: Box<dyn NoiseSource>, text_painter: Box<dyn TextPainter>) -> Self {
        Self {
            noise_source,
            text_painter,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }

    pub fn render(&mut self, text: &str) -> CanvasBitmap {
        let mut canvas = CanvasBitmap::filled(self.width, self.height, BACKGROUND_RGBA);

        let placements = layout_lines(text, self.width, self.height, LINE_HEIGHT_PX);
        log::debug!(
            "{} rendering {} line(s) onto {}x{} canvas",
            LOG_TAG_RENDERER,
            placements.len(),
            self.width,
            self.height
        );

        for placement in &placements {
            self.text_painter.fill_text_centered(
                &mut canvas,
                &placement.content,
                placement.center_x,
                placement.center_y,
            );
        }

        self.apply_noise(&mut canvas);
        canvas
    }

    fn apply_noise(&mut self, canvas: &mut CanvasBitmap) {
        for pixel in canvas.pixels_mut().pixels_mut() {
            let offset = self.noise_source.next_offset();
            for channel in pixel.0.iter_mut().take(3) {
                *channel = shift_channel(*channel, offset);
            }
        }
    }
}

fn shift_channel(value: u8, offset: f32) -> u8 {
    (value as f32 + offset).round().clamp(0.0, 255.0) as u8
}
