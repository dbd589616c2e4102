use crate::config::types::{Config, Settings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

const SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 從工作目錄的 settings.json 載入設定，讀取失敗時使用預設值
    #[must_use]
    pub fn new() -> Self {
        let settings = Self::load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("無法載入設定，改用預設值: {e:#}");
            Settings::default()
        });

        Self { settings }
    }

    pub fn load_settings(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
