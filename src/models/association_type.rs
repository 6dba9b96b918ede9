use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    entity_type::{EntityType, EntityTypeBuilder},
    fields,
    model_error::ModelError,
    validation,
};

/// An edge type of the entity data model: the entity type of the edge plus
/// the entity types allowed at its endpoints.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationType {
    entity_type: EntityType,
    src: Vec<Uuid>,
    dst: Vec<Uuid>,
    bidirectional: bool,
}

impl AssociationType {
    pub fn builder() -> AssociationTypeBuilder {
        AssociationTypeBuilder::new()
    }

    pub fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    pub fn src(&self) -> &[Uuid] {
        &self.src
    }

    pub fn dst(&self) -> &[Uuid] {
        &self.dst
    }

    pub fn bidirectional(&self) -> bool {
        self.bidirectional
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AssociationTypeBuilder::from_object(value).and_then(AssociationTypeBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid AssociationType");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AssociationTypeBuilder {
    entity_type: Option<EntityType>,
    src: Option<Vec<Uuid>>,
    dst: Option<Vec<Uuid>>,
    bidirectional: Option<bool>,
}

impl AssociationTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "AssociationType")?;
        let mut builder = Self::new();
        if let Some(entity_type) = fields::defined(map, "entityType") {
            let entity_type = EntityTypeBuilder::from_object(entity_type)
                .and_then(EntityTypeBuilder::build)
                .map_err(|error| ModelError::child("entityType", error))?;
            builder = builder.set_entity_type(entity_type);
        }
        if let Some(src) = fields::defined(map, "src") {
            builder = builder.set_src(fields::uuid_array_field(src, "src")?);
        }
        if let Some(dst) = fields::defined(map, "dst") {
            builder = builder.set_dst(fields::uuid_array_field(dst, "dst")?);
        }
        if let Some(bidirectional) = fields::defined(map, "bidirectional") {
            builder =
                builder.set_bidirectional(fields::bool_field(bidirectional, "bidirectional")?);
        }
        Ok(builder)
    }

    pub fn set_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn set_src(mut self, src: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, src);
        self.src = Some(deduped);
        self
    }

    pub fn set_dst(mut self, dst: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, dst);
        self.dst = Some(deduped);
        self
    }

    pub fn set_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = Some(bidirectional);
        self
    }

    pub fn build(self) -> Result<AssociationType, ModelError> {
        Ok(AssociationType {
            entity_type: self
                .entity_type
                .ok_or(ModelError::MissingField("entityType"))?,
            src: self.src.unwrap_or_default(),
            dst: self.dst.unwrap_or_default(),
            bidirectional: self
                .bidirectional
                .ok_or(ModelError::MissingField("bidirectional"))?,
        })
    }
}

impl From<&AssociationType> for AssociationTypeBuilder {
    fn from(association_type: &AssociationType) -> Self {
        Self {
            entity_type: Some(association_type.entity_type.clone()),
            src: Some(association_type.src.clone()),
            dst: Some(association_type.dst.clone()),
            bidirectional: Some(association_type.bidirectional),
        }
    }
}
