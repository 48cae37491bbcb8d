mod noise_source;
mod text_painter;

pub use noise_source::NoiseSource;
pub use text_painter::TextPainter;
