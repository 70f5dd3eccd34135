use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::cover::DEFAULT_MODEL_CACHE_CAPACITY;

/// A source declared in config.toml (`[[sources]]` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub id: i64,
    pub name: String,
    /// Request headers sent with every cover fetch for this source.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Global configuration loaded from `~/.config/shelf/config.toml`.
/// Missing fields take their values from `ShelfConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Directory for persisted covers. Defaults to `~/.cache/shelf/covers`.
    pub covers_dir: Option<PathBuf>,
    /// Capacity of the per-resolver descriptor cache.
    pub model_cache_capacity: usize,
    /// Connect timeout for cover fetches, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for cover fetches, in seconds.
    pub timeout_secs: u64,
    pub sources: Vec<SourceConfig>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            covers_dir: None,
            model_cache_capacity: DEFAULT_MODEL_CACHE_CAPACITY,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            sources: Vec::new(),
        }
    }
}

impl ShelfConfig {
    /// Configured covers directory, or the XDG cache default (created on demand).
    pub fn covers_dir(&self) -> Result<PathBuf> {
        match &self.covers_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("shelf")?;
                Ok(xdg_dirs.create_cache_directory("covers")?)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shelf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShelfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShelfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ShelfConfig = toml::from_str(&data)?;
    Ok(cfg)
}
