use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/delink/config.toml`.
///
/// Everything here has a sensible built-in default; the file exists so the
/// hop limit and timeouts can be tightened without rebuilding. CLI flags
/// override config values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelinkConfig {
    /// Maximum number of redirects followed before aborting.
    pub max_hops: u32,
    /// Per-request connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Per-request total timeout in seconds (connect + response headers).
    pub request_timeout_secs: u64,
    /// Copy the canonical URL to the clipboard after printing it.
    #[serde(default = "default_copy_to_clipboard")]
    pub copy_to_clipboard: bool,
}

fn default_copy_to_clipboard() -> bool {
    true
}

impl Default for DelinkConfig {
    fn default() -> Self {
        Self {
            max_hops: 20,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            copy_to_clipboard: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("delink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DelinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DelinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DelinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
