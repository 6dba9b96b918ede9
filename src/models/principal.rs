use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::{fields, model_error::ModelError, validation},
    types::principal_type::PrincipalType,
};

/// An identity reference: a user, role, organization, or app.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Principal {
    id: String,
    #[serde(rename = "type")]
    principal_type: PrincipalType,
}

impl Principal {
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn principal_type(&self) -> PrincipalType {
        self.principal_type
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match PrincipalBuilder::from_object(value).and_then(PrincipalBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Principal");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct PrincipalBuilder {
    id: Option<String>,
    principal_type: Option<PrincipalType>,
}

impl PrincipalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Principal")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::string_field(id, "id")?)?;
        }
        if let Some(principal_type) = fields::defined(map, "type") {
            builder = builder.set_type(fields::enum_field(principal_type, "PrincipalType")?);
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if !validation::is_non_empty_string(&id) {
            return Err(ModelError::EmptyString("id"));
        }
        self.id = Some(id);
        Ok(self)
    }

    pub fn set_type(mut self, principal_type: PrincipalType) -> Self {
        self.principal_type = Some(principal_type);
        self
    }

    pub fn build(self) -> Result<Principal, ModelError> {
        Ok(Principal {
            id: self.id.ok_or(ModelError::MissingField("id"))?,
            principal_type: self.principal_type.ok_or(ModelError::MissingField("type"))?,
        })
    }
}

impl From<&Principal> for PrincipalBuilder {
    fn from(principal: &Principal) -> Self {
        Self {
            id: Some(principal.id.clone()),
            principal_type: Some(principal.principal_type),
        }
    }
}
