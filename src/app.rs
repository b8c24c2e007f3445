use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locale::Locale;

pub const DEFAULT_ASSET_BASE_URL: &str = "https://saiyfonbroker.s3.ap-southeast-1.amazonaws.com/images/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub base_url: String,
    pub token: Option<String>,
    pub asset_base_url: String,
    pub locale: Locale,
    pub utc_offset_minutes: Option<i32>,
    pub role_secret: String,
    pub log_level: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: None,
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            locale: Locale::default(),
            utc_offset_minutes: None,
            role_secret: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    // TOML is the primary format; a legacy JSON state file is migrated to TOML on first read.
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        let cfg_dir = base.config_dir();
        Some(cfg_dir.join("broker-admin.toml"))
    }

    fn legacy_json_path() -> Option<PathBuf> {
        let proj = directories::ProjectDirs::from("com", "example", "BrokerAdmin")?;
        Some(proj.config_dir().join("state.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::toml_path() {
            if let Some(state) = Self::read_toml(&path) {
                return state;
            }
            if let Some(legacy) = Self::legacy_json_path() {
                if let Some(state) = Self::read_json(&legacy) {
                    if let Err(e) = state.save_to(&path) {
                        log::warn!("could not migrate legacy settings: {}", e);
                    }
                    return state;
                }
            }
        }
        Self::new()
    }

    /// Reads settings from an explicit TOML file, defaulting when absent or unreadable.
    pub fn load_from(path: &Path) -> Self {
        Self::read_toml(path).unwrap_or_default()
    }

    fn read_toml(path: &Path) -> Option<Self> {
        let text = fs::read_to_string(path).ok()?;
        match toml::from_str::<AppState>(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("ignoring malformed settings at {}: {}", path.display(), e);
                None
            }
        }
    }

    fn read_json(path: &Path) -> Option<Self> {
        let bytes = fs::read(path).ok()?;
        serde_json::from_slice::<AppState>(&bytes).ok()
    }

    pub fn save(&self) -> std::io::Result<()> {
        match Self::toml_path() {
            Some(path) => self.save_to(&path),
            None => Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No config dir")),
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        fs::write(path, toml)
    }
}

#[cfg(feature = "gtk")]
pub fn build_ui(app: &adw::Application) {
    let state = AppState::load();
    if state.is_configured() {
        crate::ui::main_window::show_main_window(app, state);
    } else {
        crate::ui::login::show_login_window(app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("broker-admin.toml");
        let state = AppState {
            base_url: "https://api.example.com".into(),
            token: Some("t".into()),
            locale: Locale::English,
            utc_offset_minutes: Some(420),
            ..AppState::default()
        };
        state.save_to(&path).unwrap();
        assert_eq!(AppState::load_from(&path), state);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broker-admin.toml");
        fs::write(&path, "base_url = \"https://api.example.com\"\n").unwrap();
        let state = AppState::load_from(&path);
        assert!(state.is_configured());
        assert_eq!(state.asset_base_url, DEFAULT_ASSET_BASE_URL);
        assert_eq!(state.locale, Locale::Lao);
        assert_eq!(state.log_level, "info");
    }

    #[test]
    fn missing_or_broken_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert_eq!(AppState::load_from(&path), AppState::default());
        fs::write(&path, "base_url = [").unwrap();
        assert_eq!(AppState::load_from(&path), AppState::default());
    }
}
