pub mod clipboard_exporter;
mod renderer;

pub use renderer::BlueScreenRenderer;
