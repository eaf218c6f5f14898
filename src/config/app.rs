// src/config/app.rs
use std::env;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::aliases::AccessToken;
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: Source,
    #[serde(default = "default_target")]
    pub target: Target,
    #[serde(default = "default_migration")]
    pub migration: Migration,
}

/// Where the legacy users come from
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub user_db: String,
}

/// Where the converted identities go
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub admin_url: String,
    #[serde(default = "default_schema_id")]
    pub schema_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Migration {
    /// Stop at the first record that fails instead of logging and moving on
    #[serde(default)]
    pub fail_fast: bool,
    #[serde(default)]
    pub report_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_source(),
            target: default_target(),
            migration: default_migration(),
        }
    }
}

/// Load config from `$IDM_CONFIG` (or `migrator.toml`), falling back to
/// built-in defaults when the file is absent
pub fn load() -> Result<Config, ConfigError> {
    let config_path = env::var(ENV_CONFIG).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(Path::new(&config_path))
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let mut conf: Config = if path.exists() {
        debug!("reading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        warn!("{} not found, using built-in defaults", path.display());
        Config::default()
    };

    // Env always wins over the file
    if let Ok(db) = env::var(ENV_CONNECTION_STRING) {
        conf.source.user_db = db;
    }
    if let Ok(url) = env::var(ENV_ADMIN_URL) {
        conf.target.admin_url = url;
    }

    if conf.target.admin_url.trim().is_empty() {
        return Err(ConfigError::Missing("target.admin_url"));
    }
    if conf.source.user_db.trim().is_empty() {
        return Err(ConfigError::Missing("source.user_db"));
    }

    Ok(conf)
}

/// Admin API token, only ever taken from the environment
pub fn access_token_from_env() -> Option<AccessToken> {
    env::var(ENV_ACCESS_TOKEN)
        .ok()
        .filter(|t| !t.is_empty())
        .map(AccessToken::new)
}
