//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::sheet::NavigationEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("sheet.height_percent must be between 20 and 100, got {0}")]
    SheetHeight(u16),
    #[error("ui.max_activity must be greater than zero")]
    EmptyActivityLog,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(20..=100).contains(&self.sheet.height_percent) {
            return Err(ConfigError::SheetHeight(self.sheet.height_percent));
        }
        if self.ui.max_activity == 0 {
            return Err(ConfigError::EmptyActivityLog);
        }
        Ok(())
    }
}

/// Bottom sheet behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Entry seeded on the inner stack each time the sheet opens.
    #[serde(default)]
    pub root: NavigationEntry,
    /// Sheet height as a percentage of the terminal height.
    #[serde(default = "default_height_percent")]
    pub height_percent: u16,
    /// Treat a click on the scrim above the sheet as a back intent.
    /// When disabled such clicks are ignored.
    #[serde(default = "default_true")]
    pub scrim_dismiss: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            root: NavigationEntry::default(),
            height_percent: default_height_percent(),
            scrim_dismiss: true,
        }
    }
}

/// Host screen display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_activity")]
    pub max_activity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_activity: default_max_activity(),
        }
    }
}

/// Diagnostic log file settings. The terminal belongs to the UI, so logs
/// only ever go to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            directory: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_height_percent() -> u16 {
    60
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_activity() -> usize {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "~/.local/share/sheetstack/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sheet.height_percent, 60);
        assert!(config.sheet.scrim_dismiss);
        assert_eq!(config.sheet.root, NavigationEntry::Page1);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [sheet]
            root = "page2"
            scrim_dismiss = false

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.sheet.root, NavigationEntry::Page2);
        assert!(!config.sheet.scrim_dismiss);
        assert_eq!(config.sheet.height_percent, 60);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.max_activity, 200);
    }

    #[test]
    fn test_unknown_root_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[sheet]\nroot = \"page9\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));

        config.sheet.height_percent = 10;
        assert_eq!(config.validate(), Err(ConfigError::SheetHeight(10)));
        config.sheet.height_percent = 101;
        assert_eq!(config.validate(), Err(ConfigError::SheetHeight(101)));
        config.sheet.height_percent = 100;
        assert_eq!(config.validate(), Ok(()));

        config.ui.max_activity = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyActivityLog));
    }
}
