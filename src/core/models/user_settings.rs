use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

fn default_initial_text() -> String {
    global_constants::DEFAULT_TEXT.to_string()
}

fn default_notification_timeout_ms() -> u64 {
    global_constants::DEFAULT_NOTIFICATION_TIMEOUT_MS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_initial_text")]
    pub initial_text: String,
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            initial_text: default_initial_text(),
            font_path: None,
            notification_timeout_ms: default_notification_timeout_ms(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Unable to read settings from {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Unable to parse settings in {:?}", settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Theme: {}", settings.theme_mode);
        log::debug!("[SETTINGS] Font override: {:?}", settings.font_path);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_CONFIG_DIR);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(test_name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bluescreen-generator-{}-{}", test_name, std::process::id()))
            .join(global_constants::SETTINGS_FILE_NAME)
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_deserialization() {
        let theme: ThemeMode = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(theme, ThemeMode::Light);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.initial_text, "we're so back");
        assert_eq!(settings.font_path, None);
        assert_eq!(settings.notification_timeout_ms, 3000);
    }

    #[test]
    fn test_user_settings_deserialization_fills_missing_fields() {
        let json = r#"{ "theme_mode": "Light" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.initial_text, global_constants::DEFAULT_TEXT);
        assert_eq!(
            settings.notification_timeout_ms,
            global_constants::DEFAULT_NOTIFICATION_TIMEOUT_MS
        );
    }

    #[test]
    fn test_load_from_missing_file_writes_defaults() {
        let settings_path = temp_settings_path("missing");
        let _ = std::fs::remove_file(&settings_path);

        let settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let settings_path = temp_settings_path("roundtrip");

        let original_settings = UserSettings {
            theme_mode: ThemeMode::Light,
            initial_text: "it's so over".to_string(),
            font_path: Some(PathBuf::from("/tmp/fonts/Serif-Bold.ttf")),
            notification_timeout_ms: 1500,
        };

        original_settings.save_to(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_from_corrupt_file_is_an_error() {
        let settings_path = temp_settings_path("corrupt");
        std::fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
        std::fs::write(&settings_path, "{ not json").unwrap();

        assert!(UserSettings::load_from(&settings_path).is_err());

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }
}
