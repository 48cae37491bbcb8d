mod image_clipboard;

pub use image_clipboard::ImageClipboard;
