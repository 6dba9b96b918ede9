use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{fields, model_error::ModelError};

/// Payload for bulk entity + association creation. Entity values are
/// arbitrary JSON objects keyed by entity set id, so this model carries
/// structural equality but no hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataGraph {
    entities: BTreeMap<Uuid, Vec<Value>>,
    associations: BTreeMap<Uuid, Vec<Value>>,
}

impl DataGraph {
    pub fn builder() -> DataGraphBuilder {
        DataGraphBuilder::new()
    }

    pub fn entities(&self) -> &BTreeMap<Uuid, Vec<Value>> {
        &self.entities
    }

    pub fn associations(&self) -> &BTreeMap<Uuid, Vec<Value>> {
        &self.associations
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match DataGraphBuilder::from_object(value).and_then(DataGraphBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid DataGraph");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct DataGraphBuilder {
    entities: Option<BTreeMap<Uuid, Vec<Value>>>,
    associations: Option<BTreeMap<Uuid, Vec<Value>>>,
}

impl DataGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "DataGraph")?;
        let mut builder = Self::new();
        if let Some(entities) = fields::defined(map, "entities") {
            builder = builder.set_entities(parse_entity_map(entities, "entities")?);
        }
        if let Some(associations) = fields::defined(map, "associations") {
            builder = builder.set_associations(parse_entity_map(associations, "associations")?);
        }
        Ok(builder)
    }

    pub fn set_entities(mut self, entities: BTreeMap<Uuid, Vec<Value>>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn set_associations(mut self, associations: BTreeMap<Uuid, Vec<Value>>) -> Self {
        self.associations = Some(associations);
        self
    }

    pub fn build(self) -> Result<DataGraph, ModelError> {
        Ok(DataGraph {
            entities: self.entities.ok_or(ModelError::MissingField("entities"))?,
            associations: self.associations.unwrap_or_default(),
        })
    }
}

fn parse_entity_map(
    value: &Value,
    field: &'static str,
) -> Result<BTreeMap<Uuid, Vec<Value>>, ModelError> {
    let entries = fields::as_object(value, field)?;
    let mut parsed = BTreeMap::new();
    for (key, raw_entities) in entries {
        let entity_set_id = fields::parse_uuid(key, field)?;
        let items = fields::array_field(raw_entities, field, "objects")?;
        for item in items {
            if !item.is_object() {
                return Err(ModelError::InvalidArray {
                    field,
                    expected: "objects",
                });
            }
        }
        parsed.insert(entity_set_id, items.clone());
    }
    Ok(parsed)
}

impl From<&DataGraph> for DataGraphBuilder {
    fn from(data_graph: &DataGraph) -> Self {
        Self {
            entities: Some(data_graph.entities.clone()),
            associations: Some(data_graph.associations.clone()),
        }
    }
}
