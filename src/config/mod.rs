pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sheetstack")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
