use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::model_error::ModelError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SecurableObjectType {
    App,
    AssociationType,
    DataSet,
    EntitySet,
    EntityType,
    Organization,
    OrganizationRole,
    PropertyTypeInEntitySet,
    Unknown,
}

impl SecurableObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "App",
            Self::AssociationType => "AssociationType",
            Self::DataSet => "DataSet",
            Self::EntitySet => "EntitySet",
            Self::EntityType => "EntityType",
            Self::Organization => "Organization",
            Self::OrganizationRole => "OrganizationRole",
            Self::PropertyTypeInEntitySet => "PropertyTypeInEntitySet",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for SecurableObjectType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "App" => Ok(Self::App),
            "AssociationType" => Ok(Self::AssociationType),
            "DataSet" => Ok(Self::DataSet),
            "EntitySet" => Ok(Self::EntitySet),
            "EntityType" => Ok(Self::EntityType),
            "Organization" => Ok(Self::Organization),
            "OrganizationRole" => Ok(Self::OrganizationRole),
            "PropertyTypeInEntitySet" => Ok(Self::PropertyTypeInEntitySet),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(ModelError::InvalidEnum {
                expected: "SecurableObjectType",
                value: value.to_string(),
            }),
        }
    }
}
