use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "ADD")]
    Add,
    #[serde(rename = "REMOVE")]
    Remove,
    #[serde(rename = "REPLACE")]
    Replace,
    #[serde(rename = "REQUEST")]
    Request,
    #[serde(rename = "SET")]
    Set,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
            Self::Replace => "REPLACE",
            Self::Request => "REQUEST",
            Self::Set => "SET",
        }
    }
}

impl FromStr for ActionType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADD" => Ok(Self::Add),
            "REMOVE" => Ok(Self::Remove),
            "REPLACE" => Ok(Self::Replace),
            "REQUEST" => Ok(Self::Request),
            "SET" => Ok(Self::Set),
            _ => Err(ModelError::InvalidEnum {
                expected: "ActionType",
                value: value.to_string(),
            }),
        }
    }
}
