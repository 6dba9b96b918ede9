use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::{fields, model_error::ModelError, validation},
    types::grant_type::GrantType,
};

/// A rule for automatically granting an organization role, keyed on an
/// attribute of the member (email domain, external group, claim, ...).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    attribute: String,
    grant_type: GrantType,
    mappings: Vec<String>,
}

impl Grant {
    pub fn builder() -> GrantBuilder {
        GrantBuilder::new()
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn grant_type(&self) -> GrantType {
        self.grant_type
    }

    pub fn mappings(&self) -> &[String] {
        &self.mappings
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match GrantBuilder::from_object(value).and_then(GrantBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Grant");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct GrantBuilder {
    attribute: Option<String>,
    grant_type: Option<GrantType>,
    mappings: Option<Vec<String>>,
}

impl GrantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Grant")?;
        let mut builder = Self::new();
        if let Some(attribute) = fields::defined(map, "attribute") {
            builder = builder.set_attribute(fields::string_field(attribute, "attribute")?);
        }
        if let Some(grant_type) = fields::defined(map, "grantType") {
            builder = builder.set_grant_type(fields::enum_field(grant_type, "GrantType")?);
        }
        if let Some(mappings) = fields::defined(map, "mappings") {
            builder = builder.set_mappings(fields::string_array_field(mappings, "mappings")?)?;
        }
        Ok(builder)
    }

    pub fn set_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn set_grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_type = Some(grant_type);
        self
    }

    pub fn set_mappings(
        mut self,
        mappings: impl IntoIterator<Item = String>,
    ) -> Result<Self, ModelError> {
        let mappings: Vec<String> = mappings.into_iter().collect();
        if !mappings.is_empty() && !validation::is_non_empty_string_array(&mappings) {
            return Err(ModelError::InvalidArray {
                field: "mappings",
                expected: "non-empty strings",
            });
        }
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, mappings);
        self.mappings = Some(deduped);
        Ok(self)
    }

    pub fn build(self) -> Result<Grant, ModelError> {
        Ok(Grant {
            attribute: self.attribute.unwrap_or_default(),
            grant_type: self.grant_type.ok_or(ModelError::MissingField("grantType"))?,
            mappings: self.mappings.unwrap_or_default(),
        })
    }
}

impl From<&Grant> for GrantBuilder {
    fn from(grant: &Grant) -> Self {
        Self {
            attribute: Some(grant.attribute.clone()),
            grant_type: Some(grant.grant_type),
            mappings: Some(grant.mappings.clone()),
        }
    }
}
