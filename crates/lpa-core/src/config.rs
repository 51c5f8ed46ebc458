use crate::http::CurlOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP transport settings (optional `[http]` section in config.toml).
///
/// Both timeouts default to unset: mutations and searches wait as long as
/// libcurl lets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Overall request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/lpa/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpaConfig {
    /// Origin searches are sent to when no page URL is given (e.g. `http://localhost:8001`).
    #[serde(default)]
    pub origin: Option<String>,
    /// Mount prefix to use instead of inferring it from page paths.
    #[serde(default)]
    pub mount_prefix: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lpa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LpaConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LpaConfig> {
    if !path.exists() {
        let default_cfg = LpaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: LpaConfig = toml::from_str(&data)?;
    Ok(cfg)
}
