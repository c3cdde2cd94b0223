use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "ORDER_VIEWER_API_URL";

/// Used when `display.placeholder` is unset or blank
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub window: WindowConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ optional path prefix) the `/api/...` routes hang off
    pub base_url: String,
    /// Request timeout in seconds. None = rely on the transport's own limits.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Which clock creation timestamps are shown in
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    Local,
    Utc,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Shown in place of any absent field
    pub placeholder: String,
    /// chrono strftime pattern for creation timestamps
    pub date_format: String,
    pub timezone: TimeZoneChoice,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            date_format: "%d.%m.%Y, %H:%M:%S".to_string(),
            timezone: TimeZoneChoice::Local,
        }
    }
}

pub fn load_from(path: &Path) -> Config {
    with_env_overrides(load_path(path), std::env::var(API_URL_ENV).ok())
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using defaults");
            with_env_overrides(Config::default(), std::env::var(API_URL_ENV).ok())
        }
    }
}

fn load_path(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn with_env_overrides(mut config: Config, api_url: Option<String>) -> Config {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        tracing::info!("Using API URL from {}: {}", API_URL_ENV, url);
        config.api.base_url = url;
    }
    config
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, same as other XDG-style tools
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("order-viewer")
            .join("config.toml")
    })
}
