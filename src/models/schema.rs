use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    entity_type::{EntityType, EntityTypeBuilder},
    fields,
    fqn::FullyQualifiedName,
    model_error::ModelError,
    property_type::{PropertyType, PropertyTypeBuilder},
};

/// A named grouping of entity types and property types.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    fqn: FullyQualifiedName,
    entity_types: Vec<EntityType>,
    property_types: Vec<PropertyType>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn fqn(&self) -> &FullyQualifiedName {
        &self.fqn
    }

    pub fn entity_types(&self) -> &[EntityType] {
        &self.entity_types
    }

    pub fn property_types(&self) -> &[PropertyType] {
        &self.property_types
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match SchemaBuilder::from_object(value).and_then(SchemaBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Schema");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fqn: Option<FullyQualifiedName>,
    entity_types: Option<Vec<EntityType>>,
    property_types: Option<Vec<PropertyType>>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Schema")?;
        let mut builder = Self::new();
        if let Some(fqn) = fields::defined(map, "fqn") {
            let fqn = FullyQualifiedName::from_object(fqn)
                .map_err(|error| ModelError::child("fqn", error))?;
            builder = builder.set_fqn(fqn);
        }
        if let Some(entity_types) = fields::defined(map, "entityTypes") {
            let items = fields::array_field(entity_types, "entityTypes", "EntityType")?;
            let entity_types = items
                .iter()
                .map(|item| {
                    EntityTypeBuilder::from_object(item)
                        .and_then(EntityTypeBuilder::build)
                        .map_err(|error| ModelError::child("entityTypes", error))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_entity_types(entity_types);
        }
        if let Some(property_types) = fields::defined(map, "propertyTypes") {
            let items = fields::array_field(property_types, "propertyTypes", "PropertyType")?;
            let property_types = items
                .iter()
                .map(|item| {
                    PropertyTypeBuilder::from_object(item)
                        .and_then(PropertyTypeBuilder::build)
                        .map_err(|error| ModelError::child("propertyTypes", error))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_property_types(property_types);
        }
        Ok(builder)
    }

    pub fn set_fqn(mut self, fqn: FullyQualifiedName) -> Self {
        self.fqn = Some(fqn);
        self
    }

    pub fn set_entity_types(mut self, entity_types: Vec<EntityType>) -> Self {
        self.entity_types = Some(entity_types);
        self
    }

    pub fn set_property_types(mut self, property_types: Vec<PropertyType>) -> Self {
        self.property_types = Some(property_types);
        self
    }

    pub fn build(self) -> Result<Schema, ModelError> {
        Ok(Schema {
            fqn: self.fqn.ok_or(ModelError::MissingField("fqn"))?,
            entity_types: self.entity_types.unwrap_or_default(),
            property_types: self.property_types.unwrap_or_default(),
        })
    }
}

impl From<&Schema> for SchemaBuilder {
    fn from(schema: &Schema) -> Self {
        Self {
            fqn: Some(schema.fqn.clone()),
            entity_types: Some(schema.entity_types.clone()),
            property_types: Some(schema.property_types.clone()),
        }
    }
}
