use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum UpdateType {
    Merge,
    PartialReplace,
    Replace,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "Merge",
            Self::PartialReplace => "PartialReplace",
            Self::Replace => "Replace",
        }
    }
}

impl FromStr for UpdateType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Merge" => Ok(Self::Merge),
            "PartialReplace" => Ok(Self::PartialReplace),
            "Replace" => Ok(Self::Replace),
            _ => Err(ModelError::InvalidEnum {
                expected: "UpdateType",
                value: value.to_string(),
            }),
        }
    }
}
