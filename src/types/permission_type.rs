use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PermissionType {
    #[serde(rename = "DISCOVER")]
    Discover,
    #[serde(rename = "INTEGRATE")]
    Integrate,
    #[serde(rename = "LINK")]
    Link,
    #[serde(rename = "MATERIALIZE")]
    Materialize,
    #[serde(rename = "OWNER")]
    Owner,
    #[serde(rename = "READ")]
    Read,
    #[serde(rename = "WRITE")]
    Write,
}

impl PermissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discover => "DISCOVER",
            Self::Integrate => "INTEGRATE",
            Self::Link => "LINK",
            Self::Materialize => "MATERIALIZE",
            Self::Owner => "OWNER",
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

impl FromStr for PermissionType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DISCOVER" => Ok(Self::Discover),
            "INTEGRATE" => Ok(Self::Integrate),
            "LINK" => Ok(Self::Link),
            "MATERIALIZE" => Ok(Self::Materialize),
            "OWNER" => Ok(Self::Owner),
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            _ => Err(ModelError::InvalidEnum {
                expected: "PermissionType",
                value: value.to_string(),
            }),
        }
    }
}
