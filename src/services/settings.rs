//! 用户设置：serde 默认值 + dot-dir 下的 JSON 文件
//!
//! 缺失字段回落到默认值，坏文件整体回落到 `Settings::default()`。

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = ".acode";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordWrap {
    #[default]
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub word_wrap: WordWrap,
    #[serde(default = "default_theme_id")]
    pub theme_id: String,
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_true")]
    pub show_quick_keys: bool,
}

fn default_font_size() -> u8 {
    14
}

fn default_theme_id() -> String {
    "acode-dark".to_string()
}

fn default_tab_size() -> u8 {
    2
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            word_wrap: WordWrap::default(),
            theme_id: default_theme_id(),
            tab_size: default_tab_size(),
            language: default_language(),
            show_quick_keys: true,
        }
    }
}

fn config_root() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
}

pub fn settings_path() -> PathBuf {
    config_root().join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// 确保设置文件存在；首次运行时写入默认值
pub fn ensure_settings_file_at(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = settings_path();
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path()).unwrap_or_default()
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}
