use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GrantType {
    Attributes,
    Auto,
    Claim,
    EmailDomain,
    Groups,
    Manual,
    Roles,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attributes => "Attributes",
            Self::Auto => "Auto",
            Self::Claim => "Claim",
            Self::EmailDomain => "EmailDomain",
            Self::Groups => "Groups",
            Self::Manual => "Manual",
            Self::Roles => "Roles",
        }
    }
}

impl FromStr for GrantType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Attributes" => Ok(Self::Attributes),
            "Auto" => Ok(Self::Auto),
            "Claim" => Ok(Self::Claim),
            "EmailDomain" => Ok(Self::EmailDomain),
            "Groups" => Ok(Self::Groups),
            "Manual" => Ok(Self::Manual),
            "Roles" => Ok(Self::Roles),
            _ => Err(ModelError::InvalidEnum {
                expected: "GrantType",
                value: value.to_string(),
            }),
        }
    }
}
