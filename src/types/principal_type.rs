use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PrincipalType {
    #[serde(rename = "APP")]
    App,
    #[serde(rename = "ORGANIZATION")]
    Organization,
    #[serde(rename = "ROLE")]
    Role,
    #[serde(rename = "USER")]
    User,
}

impl PrincipalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "APP",
            Self::Organization => "ORGANIZATION",
            Self::Role => "ROLE",
            Self::User => "USER",
        }
    }
}

impl FromStr for PrincipalType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "APP" => Ok(Self::App),
            "ORGANIZATION" => Ok(Self::Organization),
            "ROLE" => Ok(Self::Role),
            "USER" => Ok(Self::User),
            _ => Err(ModelError::InvalidEnum {
                expected: "PrincipalType",
                value: value.to_string(),
            }),
        }
    }
}
