use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::i18n::Locale;

// =============================================================================
// Sources
// =============================================================================

/// Well-known location of the deployed version marker
pub const DEFAULT_LOCAL_VERSION_PATH: &str = "/VERSION.txt";

/// Mirror of the published version marker
pub const DEFAULT_PROXY_URL: &str =
    "https://ghfast.top/raw.githubusercontent.com/BTYcloud/LTV/main/NEWversion.txt";

/// Published version marker on the origin host
pub const DEFAULT_DIRECT_URL: &str =
    "https://raw.githubusercontent.com/BTYcloud/LTV/main/NEWversion.txt";

/// Opened by the update badge
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/BTYcloud/LTV";

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for the proxy attempt in milliseconds
pub const PROXY_TIMEOUT_MS: u64 = 1500;

/// Update check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NoticeConfig {
    /// URL or path of the deployed version marker
    pub local_version: String,
    /// Site origin the local marker is resolved against
    pub base_url: Option<String>,
    pub proxy_url: String,
    pub direct_url: String,
    pub repository_url: String,
    /// Proxy timeout in milliseconds
    pub proxy_timeout_ms: u64,
    pub locale: Locale,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            local_version: DEFAULT_LOCAL_VERSION_PATH.to_string(),
            base_url: None,
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            direct_url: DEFAULT_DIRECT_URL.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            proxy_timeout_ms: PROXY_TIMEOUT_MS,
            locale: Locale::default(),
        }
    }
}

impl NoticeConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_millis(self.proxy_timeout_ms)
    }
}

/// Returns the configuration directory for version-notice.
/// Uses $XDG_CONFIG_HOME/version-notice if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-notice,
/// or ./version-notice if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    config_dir().join("version-notice.log")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("version-notice")
}
