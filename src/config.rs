//! Service configuration
//!
//! Loaded from `~/.config/workdays/config.toml` (XDG standard) or an explicit
//! path, then overridden by `HOST`, `PORT` and `HOLIDAYS_API_URL` from the
//! environment. Every field has a default, so a missing file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::adapters::DEFAULT_HOLIDAYS_URL;
use crate::api::ValidationProfile;

/// Top-level service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Holiday source settings
    #[serde(default)]
    pub holidays: HolidaysConfig,
    /// Request validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request-handling threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_workers() -> usize {
    4
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Holiday source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaysConfig {
    /// URL of the JSON holiday list
    #[serde(default = "default_holidays_url")]
    pub url: String,
    /// Timeout for the single fetch attempt
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip the remote list and use the embedded calendar
    #[serde(default)]
    pub offline: bool,
}

fn default_holidays_url() -> String {
    DEFAULT_HOLIDAYS_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            url: default_holidays_url(),
            timeout_secs: default_timeout_secs(),
            offline: false,
        }
    }
}

impl HolidaysConfig {
    /// Fetch timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Request validation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Active validation profile
    #[serde(default)]
    pub profile: ValidationProfile,
}

impl ServiceConfig {
    /// Default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("workdays")
            .join("config.toml")
    }

    /// Load from `path` (or the default path), then apply environment overrides
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        let mut config = Self::load_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a file without environment overrides
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Apply `HOST`, `PORT` and `HOLIDAYS_API_URL` overrides
    ///
    /// An unparseable `PORT` is ignored with a warning.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => log::warn!("Ignoring invalid PORT {port:?}: {e}"),
            }
        }
        if let Some(url) = lookup("HOLIDAYS_API_URL").filter(|u| !u.is_empty()) {
            self.holidays.url = url;
        }
    }
}
