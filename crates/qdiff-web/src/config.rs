//! Application configuration

use qdiff_classifiers::ArtifactConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Fitted artifact locations
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

/// Values taken from the command line, applied over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub artifacts_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config: Self = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", config_path, e))?
        } else {
            Self::default()
        };

        if let Some(address) = &overrides.address {
            config.server.address = address.clone();
        }

        if let Some(port) = overrides.port {
            config.server.port = port;
        }

        if let Some(dir) = &overrides.artifacts_dir {
            config.artifacts.dir = dir.clone();
        }

        Ok(config)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_address")]
    pub address: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.address, self.port).parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_body_limit() -> usize {
    64 * 1024
}
