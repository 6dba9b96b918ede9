use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{fields, model_error::ModelError};

/// Address of a single entity: the entity set holding it plus its key id.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDataKey {
    entity_set_id: Uuid,
    entity_key_id: Uuid,
}

impl EntityDataKey {
    pub fn builder() -> EntityDataKeyBuilder {
        EntityDataKeyBuilder::new()
    }

    pub fn entity_set_id(&self) -> Uuid {
        self.entity_set_id
    }

    pub fn entity_key_id(&self) -> Uuid {
        self.entity_key_id
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match EntityDataKeyBuilder::from_object(value).and_then(EntityDataKeyBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid EntityDataKey");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EntityDataKeyBuilder {
    entity_set_id: Option<Uuid>,
    entity_key_id: Option<Uuid>,
}

impl EntityDataKeyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "EntityDataKey")?;
        let mut builder = Self::new();
        if let Some(entity_set_id) = fields::defined(map, "entitySetId") {
            builder = builder.set_entity_set_id(fields::uuid_field(entity_set_id, "entitySetId")?);
        }
        if let Some(entity_key_id) = fields::defined(map, "entityKeyId") {
            builder = builder.set_entity_key_id(fields::uuid_field(entity_key_id, "entityKeyId")?);
        }
        Ok(builder)
    }

    pub fn set_entity_set_id(mut self, entity_set_id: Uuid) -> Self {
        self.entity_set_id = Some(entity_set_id);
        self
    }

    pub fn set_entity_key_id(mut self, entity_key_id: Uuid) -> Self {
        self.entity_key_id = Some(entity_key_id);
        self
    }

    pub fn build(self) -> Result<EntityDataKey, ModelError> {
        Ok(EntityDataKey {
            entity_set_id: self
                .entity_set_id
                .ok_or(ModelError::MissingField("entitySetId"))?,
            entity_key_id: self
                .entity_key_id
                .ok_or(ModelError::MissingField("entityKeyId"))?,
        })
    }
}

impl From<&EntityDataKey> for EntityDataKeyBuilder {
    fn from(entity_data_key: &EntityDataKey) -> Self {
        Self {
            entity_set_id: Some(entity_data_key.entity_set_id),
            entity_key_id: Some(entity_data_key.entity_key_id),
        }
    }
}
