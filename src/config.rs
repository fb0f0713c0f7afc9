use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Process configuration, built once at startup.
///
/// Sources, lowest priority first: built-in defaults, an optional YAML file,
/// the `LISTEN` and `FILES_DIRECTORY` environment variables, then whatever
/// the binary's command line overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            read_timeout_secs: 10,
            write_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root for `/files/{name}`. Unset means every file route fails.
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_yaml_str(&raw)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(directory) = std::env::var("FILES_DIRECTORY") {
            cfg.files.directory = Some(PathBuf::from(directory));
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}
