/// Yields one brightness offset per pixel, in `[-amplitude, amplitude)`.
pub trait NoiseSource: Send {
    fn next_offset(&mut self) -> f32;
}
