use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/chandl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChandlConfig {
    /// Directory archives are written to. `None` means the current directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// User-Agent sent with page and image requests. `None` means libcurl's default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ChandlConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            user_agent: Some(format!("chandl/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chandl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChandlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ChandlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ChandlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
