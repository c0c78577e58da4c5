//! Client settings kept in `config.toml`
//!
//! Only the server URL is stored. `--url` and `CINEGRAPH_URL` take
//! precedence over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub url: Option<String>,
}

impl Config {
    /// Read the file at `path` (or the default location); a missing file is
    /// an empty configuration
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = Self::resolve(path);
        if !config_path.is_file() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("cinegraph: cannot read {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("cinegraph: invalid config file {}", config_path.display()))
    }

    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = Self::resolve(path);
        if let Some(dir) = config_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("cinegraph: cannot create {}", dir.display()))?;
        }

        fs::write(&config_path, toml::to_string_pretty(self)?)
            .with_context(|| format!("cinegraph: cannot write {}", config_path.display()))
    }

    /// `<config dir>/cinegraph/config.toml`, or `./cinegraph/config.toml`
    /// when the platform has no config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .as_deref()
            .unwrap_or(Path::new("."))
            .join("cinegraph/config.toml")
    }

    fn resolve(path: Option<&str>) -> PathBuf {
        path.map(PathBuf::from).unwrap_or_else(Self::default_path)
    }
}
