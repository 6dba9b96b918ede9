use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnalyzerType {
    #[serde(rename = "METAPHONE")]
    Metaphone,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "NOT_ANALYZED")]
    NotAnalyzed,
    #[serde(rename = "STANDARD")]
    Standard,
}

impl AnalyzerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metaphone => "METAPHONE",
            Self::None => "NONE",
            Self::NotAnalyzed => "NOT_ANALYZED",
            Self::Standard => "STANDARD",
        }
    }
}

impl FromStr for AnalyzerType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "METAPHONE" => Ok(Self::Metaphone),
            "NONE" => Ok(Self::None),
            "NOT_ANALYZED" => Ok(Self::NotAnalyzed),
            "STANDARD" => Ok(Self::Standard),
            _ => Err(ModelError::InvalidEnum {
                expected: "AnalyzerType",
                value: value.to_string(),
            }),
        }
    }
}
