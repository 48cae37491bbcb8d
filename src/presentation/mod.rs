pub mod app_theme;
mod notification_toast;

pub use notification_toast::render_toast;
