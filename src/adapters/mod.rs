mod ab_glyph_text_painter;
mod arboard_image_clipboard;
mod random_noise_source;

pub use ab_glyph_text_painter::AbGlyphTextPainter;
pub use arboard_image_clipboard::ArboardImageClipboard;
pub use random_noise_source::RandomNoiseSource;
