use std::path::{Path, PathBuf};

use alembic_potterdb::DEFAULT_BASE_URL;
use serde::Deserialize;

use crate::error::AlbError;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// PotterDB API base URL, e.g. `https://api.potterdb.com/v1`.
    pub base_url: Option<String>,
    /// Where tracing output goes.
    pub log_file: Option<PathBuf>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("alembic").join("config.toml"))
}

pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("alembic")
        .join("alembic.log")
}

/// Loads the config file.
///
/// An explicitly given path must exist. The default location is optional and
/// a missing file there yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, AlbError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let content = std::fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|source| AlbError::Config { path, source })
}

impl Config {
    /// CLI flag first, then the config file, then the public API.
    pub fn resolve_base_url(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn resolve_log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}
