use reqwest::StatusCode;
use thiserror::Error;

use crate::{config::ConfigError, models::model_error::ModelError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}
