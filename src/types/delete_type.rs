use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DeleteType {
    Hard,
    Soft,
}

impl DeleteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "Hard",
            Self::Soft => "Soft",
        }
    }
}

impl FromStr for DeleteType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Hard" => Ok(Self::Hard),
            "Soft" => Ok(Self::Soft),
            _ => Err(ModelError::InvalidEnum {
                expected: "DeleteType",
                value: value.to_string(),
            }),
        }
    }
}
