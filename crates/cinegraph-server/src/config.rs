//! Server configuration
//!
//! Priority: command-line flags > environment variables > `server.toml` in
//! the config directory > defaults.

use cinegraph_core::store::StoreConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Default bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Default store connection string
pub const DEFAULT_STORE_URL: &str = "memory://";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A bind address did not parse
    #[error("Invalid {source_name} address {value:?}")]
    InvalidAddr {
        /// Where the value came from
        source_name: String,
        /// Offending value
        value: String,
    },

    /// The store connection string was rejected
    #[error("Invalid store url: {0}")]
    Store(#[from] cinegraph_core::Error),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub addr: SocketAddr,
    /// Entity store connection string
    pub store_url: String,
    /// Serve the GraphQL Playground on `GET /graphql`
    pub playground: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            store_url: DEFAULT_STORE_URL.to_string(),
            playground: cfg!(debug_assertions),
        }
    }
}

/// `server.toml` structure; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Bind address
    pub addr: Option<String>,
    /// Store connection string
    pub store_url: Option<String>,
    /// Playground toggle
    pub playground: Option<bool>,
}

impl Config {
    /// Load `server.toml` from `config_dir`
    ///
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn from_file(config_dir: impl AsRef<Path>) -> Option<ConfigFile> {
        let config_path = config_dir.as_ref().join("server.toml");

        if !config_path.exists() {
            tracing::debug!("Server config file not found: {:?}", config_path);
            return None;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(file) => {
                    tracing::info!("Loaded server configuration from {:?}", config_path);
                    Some(file)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file {:?}: {}", config_path, e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", config_path, e);
                None
            }
        }
    }

    /// Load configuration from the process environment and config file
    pub fn from_env(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(config_dir, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit variable lookup
    ///
    /// `CINEGRAPH_ADDR`, `CINEGRAPH_STORE_URL` and `CINEGRAPH_PLAYGROUND`
    /// override the file.
    pub fn load(
        config_dir: impl AsRef<Path>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(file) = Self::from_file(config_dir) {
            if let Some(addr) = file.addr {
                config.addr = parse_addr("server.toml", &addr)?;
            }
            if let Some(store_url) = file.store_url {
                config.store_url = store_url;
            }
            if let Some(playground) = file.playground {
                config.playground = playground;
            }
        }

        if let Some(addr) = var("CINEGRAPH_ADDR") {
            config.addr = parse_addr("CINEGRAPH_ADDR", &addr)?;
        }
        if let Some(store_url) = var("CINEGRAPH_STORE_URL") {
            config.store_url = store_url;
        }
        if let Some(playground) = var("CINEGRAPH_PLAYGROUND") {
            match playground.trim().parse::<bool>() {
                Ok(enabled) => config.playground = enabled,
                Err(_) => tracing::warn!(
                    "Ignoring CINEGRAPH_PLAYGROUND={:?}, expected true or false",
                    playground
                ),
            }
        }

        Ok(config)
    }

    /// Parsed store selection
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        Ok(StoreConfig::parse(&self.store_url)?)
    }

    /// Set a new bind address
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set a new store connection string
    pub fn with_store_url(mut self, store_url: impl Into<String>) -> Self {
        self.store_url = store_url.into();
        self
    }
}

fn parse_addr(source_name: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
        source_name: source_name.to_string(),
        value: value.to_string(),
    })
}
