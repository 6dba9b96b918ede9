use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum IndexType {
    #[serde(rename = "BTREE")]
    Btree,
    #[serde(rename = "GIN")]
    Gin,
    #[serde(rename = "HASH")]
    Hash,
    #[serde(rename = "NONE")]
    None,
}

impl IndexType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btree => "BTREE",
            Self::Gin => "GIN",
            Self::Hash => "HASH",
            Self::None => "NONE",
        }
    }
}

impl FromStr for IndexType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BTREE" => Ok(Self::Btree),
            "GIN" => Ok(Self::Gin),
            "HASH" => Ok(Self::Hash),
            "NONE" => Ok(Self::None),
            _ => Err(ModelError::InvalidEnum {
                expected: "IndexType",
                value: value.to_string(),
            }),
        }
    }
}
