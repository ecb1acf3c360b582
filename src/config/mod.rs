use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_derive::Deserialize;

use crate::utils::get_path;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            port: 53,
            bind: "0.0.0.0".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// "none", "file" or "dir".
    pub save_as: String,
    pub path: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
            save_as: "none".to_string(),
            path: "./logs".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

pub fn parse_config(raw: &str) -> anyhow::Result<Config> {
    toml::from_str(raw).context("invalid config")
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&raw).with_context(|| format!("failed to load config {}", path.display()))
}

/// Load the config at `raw_path`, falling back to defaults when the file
/// does not exist.
pub fn load_config_relative(raw_path: &str) -> anyhow::Result<Config> {
    let path: PathBuf = get_path(raw_path)?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 53);
        assert_eq!(config.logging.save_as, "none");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = parse_config(
            r#"
            [server]
            port = 5353

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 5353);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.path, "./logs");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse_config("[server]\nport = \"fifty-three\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config_relative("./does-not-exist/qdpeek.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
