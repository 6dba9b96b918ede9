use std::sync::RwLock;

use lazy_static::lazy_static;
use thiserror::Error;

pub const LOCALHOST_URL: &str = "http://localhost:8080";
pub const STAGING_URL: &str = "https://api.staging.openlattice.com";
pub const PRODUCTION_URL: &str = "https://api.openlattice.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("baseUrl must be a recognized alias or an https:// URL, got {0}")]
    InvalidBaseUrl(String),

    #[error("authToken must be a non-empty string")]
    EmptyAuthToken,
}

/// Effective client configuration. A fresh process starts on the production
/// base URL with no auth token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_URL.to_string(),
            auth_token: None,
        }
    }
}

/// Caller-supplied options for `configure`. Each call fully replaces the
/// effective config; the last call wins.
#[derive(Clone, Debug, Default)]
pub struct ConfigOptions {
    pub base_url: String,
    pub auth_token: Option<String>,
}

lazy_static! {
    static ref CONFIG: RwLock<ClientConfig> = RwLock::new(ClientConfig::default());
}

pub fn configure(options: ConfigOptions) -> Result<(), ConfigError> {
    let base_url = resolve_base_url(&options.base_url)?;
    let auth_token = match options.auth_token {
        Some(token) if token.is_empty() => return Err(ConfigError::EmptyAuthToken),
        token => token,
    };
    let mut config = CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *config = ClientConfig {
        base_url,
        auth_token,
    };
    Ok(())
}

pub fn get_config() -> ClientConfig {
    CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn resolve_base_url(base_url: &str) -> Result<String, ConfigError> {
    match base_url {
        "localhost" => Ok(LOCALHOST_URL.to_string()),
        "staging" => Ok(STAGING_URL.to_string()),
        "production" => Ok(PRODUCTION_URL.to_string()),
        url if url.starts_with("https://") => Ok(url.to_string()),
        // Plain http is only tolerated against a local server.
        url if url.starts_with("http://localhost") => Ok(url.to_string()),
        other => Err(ConfigError::InvalidBaseUrl(other.to_string())),
    }
}
