#![allow(dead_code)]

pub const APPLICATION_TITLE: &str = "Blue Screen Generator";
pub const APPLICATION_CONFIG_DIR: &str = "bluescreen-generator";

pub const HOTKEY_COPY_IMAGE: &str = "Ctrl+C";
pub const COPY_HINT: &str = "ctrl + c for copy";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_RENDERER: &str = "[RENDERER]";
pub const LOG_TAG_EXPORTER: &str = "[EXPORTER]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_TEXT_PAINTER: &str = "[TEXT_PAINTER]";
pub const LOG_TAG_KEYBOARD: &str = "[KEYBOARD]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;

pub const BACKGROUND_RGBA: [u8; 4] = [0x01, 0x01, 0xF9, 0xFF];
pub const TEXT_RGBA: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

pub const FONT_SIZE_PX: f32 = 36.0;
pub const LINE_HEIGHT_PX: f32 = 40.0;

pub const NOISE_AMPLITUDE: f32 = 25.0;

pub const DEFAULT_TEXT: &str = "we're so back";

pub const NOTIFICATION_COPY_SUCCESS_TITLE: &str = "Image copied!";
pub const NOTIFICATION_COPY_SUCCESS_DESCRIPTION: &str =
    "The image has been saved to your clipboard.";
pub const NOTIFICATION_COPY_FAILURE_TITLE: &str = "Copy failed";
pub const NOTIFICATION_COPY_FAILURE_DESCRIPTION: &str =
    "Failed to copy image. Your clipboard might not support this feature.";

pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3000;

pub const EDITOR_MAX_HEIGHT_PX: f32 = 150.0;
pub const CARD_MAX_WIDTH_PX: f32 = 660.0;
pub const WINDOW_WIDTH: f32 = 720.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const BOLD_SERIF_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Georgia Bold.ttf",
    "/Library/Fonts/Georgia Bold.ttf",
    "C:\\Windows\\Fonts\\georgiab.ttf",
    "C:\\Windows\\Fonts\\timesbd.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Georgia_Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf",
];
