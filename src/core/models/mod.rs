mod canvas_bitmap;
mod encoded_png;
mod line_layout;
mod notification;
mod user_settings;

pub use canvas_bitmap::CanvasBitmap;
pub use encoded_png::EncodedPng;
pub use line_layout::layout_lines;
pub use notification::{Notification, NotificationKind};
pub use user_settings::{ThemeMode, UserSettings};
