pub mod client_config;

pub use client_config::{
    configure, get_config, ClientConfig, ConfigError, ConfigOptions, LOCALHOST_URL,
    PRODUCTION_URL, STAGING_URL,
};
