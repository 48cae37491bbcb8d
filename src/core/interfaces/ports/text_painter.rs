use crate::core::models::CanvasBitmap;

pub trait TextPainter: Send + Sync {
    /// Draws one line with its center (horizontal) and middle (vertical)
    /// at `(center_x, center_y)`. Glyphs outside the canvas are clipped.
    fn fill_text_centered(&self, canvas: &mut CanvasBitmap, line: &str, center_x: f32, center_y: f32);
}
