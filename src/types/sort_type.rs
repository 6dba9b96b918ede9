use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SortType {
    #[serde(rename = "field")]
    Field,
    #[serde(rename = "score")]
    Score,
}

impl SortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Score => "score",
        }
    }
}

impl FromStr for SortType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "field" => Ok(Self::Field),
            "score" => Ok(Self::Score),
            _ => Err(ModelError::InvalidEnum {
                expected: "SortType",
                value: value.to_string(),
            }),
        }
    }
}
