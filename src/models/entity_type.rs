use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{
        fields,
        fqn::FullyQualifiedName,
        model_error::ModelError,
        property_type::parse_schemas,
        validation,
    },
    types::securable_object_type::SecurableObjectType,
};

const MIN_SHARDS: i64 = 1;
const MAX_SHARDS: i64 = 19;

/// EDM entity type definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(rename = "type")]
    type_fqn: FullyQualifiedName,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    schemas: Vec<FullyQualifiedName>,
    key: Vec<Uuid>,
    properties: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_type: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<SecurableObjectType>,
    property_tags: BTreeMap<Uuid, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shards: Option<i32>,
}

impl EntityType {
    pub fn builder() -> EntityTypeBuilder {
        EntityTypeBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn type_fqn(&self) -> &FullyQualifiedName {
        &self.type_fqn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn schemas(&self) -> &[FullyQualifiedName] {
        &self.schemas
    }

    pub fn key(&self) -> &[Uuid] {
        &self.key
    }

    pub fn properties(&self) -> &[Uuid] {
        &self.properties
    }

    pub fn base_type(&self) -> Option<Uuid> {
        self.base_type
    }

    pub fn category(&self) -> Option<SecurableObjectType> {
        self.category
    }

    pub fn property_tags(&self) -> &BTreeMap<Uuid, Vec<String>> {
        &self.property_tags
    }

    pub fn shards(&self) -> Option<i32> {
        self.shards
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match EntityTypeBuilder::from_object(value).and_then(EntityTypeBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid EntityType");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EntityTypeBuilder {
    id: Option<Uuid>,
    type_fqn: Option<FullyQualifiedName>,
    title: Option<String>,
    description: Option<String>,
    schemas: Option<Vec<FullyQualifiedName>>,
    key: Option<Vec<Uuid>>,
    properties: Option<Vec<Uuid>>,
    base_type: Option<Uuid>,
    category: Option<SecurableObjectType>,
    property_tags: Option<BTreeMap<Uuid, Vec<String>>>,
    shards: Option<i32>,
}

impl EntityTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "EntityType")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
        }
        if let Some(type_fqn) = fields::defined(map, "type") {
            let type_fqn = FullyQualifiedName::from_object(type_fqn)
                .map_err(|error| ModelError::child("type", error))?;
            builder = builder.set_type(type_fqn);
        }
        if let Some(title) = fields::defined(map, "title") {
            builder = builder.set_title(fields::string_field(title, "title")?)?;
        }
        if let Some(description) = fields::defined(map, "description") {
            builder = builder.set_description(fields::string_field(description, "description")?);
        }
        if let Some(schemas) = fields::defined(map, "schemas") {
            builder = builder.set_schemas(parse_schemas(schemas)?);
        }
        if let Some(key) = fields::defined(map, "key") {
            builder = builder.set_key(fields::uuid_array_field(key, "key")?);
        }
        if let Some(properties) = fields::defined(map, "properties") {
            builder = builder.set_properties(fields::uuid_array_field(properties, "properties")?);
        }
        if let Some(base_type) = fields::defined(map, "baseType") {
            builder = builder.set_base_type(fields::uuid_field(base_type, "baseType")?);
        }
        if let Some(category) = fields::defined(map, "category") {
            builder = builder.set_category(fields::enum_field(category, "SecurableObjectType")?);
        }
        if let Some(property_tags) = fields::defined(map, "propertyTags") {
            let entries = fields::as_object(property_tags, "propertyTags")?;
            let mut parsed = BTreeMap::new();
            for (key, tags) in entries {
                let property_id = fields::parse_uuid(key, "propertyTags")?;
                let tags = fields::string_array_field(tags, "propertyTags")?;
                parsed.insert(property_id, tags);
            }
            builder = builder.set_property_tags(parsed)?;
        }
        if let Some(shards) = fields::defined(map, "shards") {
            let shards = fields::int_field(shards, "shards")?;
            builder = builder.set_shards(shards)?;
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_type(mut self, type_fqn: FullyQualifiedName) -> Self {
        self.type_fqn = Some(type_fqn);
        self
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Result<Self, ModelError> {
        let title = title.into();
        if !validation::is_non_empty_string(&title) {
            return Err(ModelError::EmptyString("title"));
        }
        self.title = Some(title);
        Ok(self)
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_schemas(mut self, schemas: Vec<FullyQualifiedName>) -> Self {
        self.schemas = Some(schemas);
        self
    }

    pub fn set_key(mut self, key: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, key);
        self.key = Some(deduped);
        self
    }

    pub fn set_properties(mut self, properties: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, properties);
        self.properties = Some(deduped);
        self
    }

    pub fn set_base_type(mut self, base_type: Uuid) -> Self {
        self.base_type = Some(base_type);
        self
    }

    pub fn set_category(mut self, category: SecurableObjectType) -> Self {
        self.category = Some(category);
        self
    }

    pub fn set_property_tags(
        mut self,
        property_tags: BTreeMap<Uuid, Vec<String>>,
    ) -> Result<Self, ModelError> {
        let mut normalized = BTreeMap::new();
        for (property_id, tags) in property_tags {
            if !tags.is_empty() && !validation::is_non_empty_string_array(&tags) {
                return Err(ModelError::InvalidArray {
                    field: "propertyTags",
                    expected: "non-empty strings",
                });
            }
            let mut deduped = Vec::new();
            validation::extend_unique(&mut deduped, tags);
            normalized.insert(property_id, deduped);
        }
        self.property_tags = Some(normalized);
        Ok(self)
    }

    pub fn set_shards(mut self, shards: i64) -> Result<Self, ModelError> {
        if !(MIN_SHARDS..=MAX_SHARDS).contains(&shards) {
            return Err(ModelError::OutOfRange {
                field: "shards",
                min: MIN_SHARDS,
                max: MAX_SHARDS,
            });
        }
        self.shards = Some(shards as i32);
        Ok(self)
    }

    pub fn build(self) -> Result<EntityType, ModelError> {
        Ok(EntityType {
            id: self.id,
            type_fqn: self.type_fqn.ok_or(ModelError::MissingField("type"))?,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            schemas: self.schemas.unwrap_or_default(),
            key: self.key.unwrap_or_default(),
            properties: self.properties.unwrap_or_default(),
            base_type: self.base_type,
            category: self.category,
            property_tags: self.property_tags.unwrap_or_default(),
            shards: self.shards,
        })
    }
}

impl From<&EntityType> for EntityTypeBuilder {
    fn from(entity_type: &EntityType) -> Self {
        Self {
            id: entity_type.id,
            type_fqn: Some(entity_type.type_fqn.clone()),
            title: Some(entity_type.title.clone()),
            description: entity_type.description.clone(),
            schemas: Some(entity_type.schemas.clone()),
            key: Some(entity_type.key.clone()),
            properties: Some(entity_type.properties.clone()),
            base_type: entity_type.base_type,
            category: entity_type.category,
            property_tags: Some(entity_type.property_tags.clone()),
            shards: entity_type.shards,
        }
    }
}
