use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    entity_data_key::{EntityDataKey, EntityDataKeyBuilder},
    fields,
    model_error::ModelError,
};

/// Address of a single edge in the data graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DataEdgeKey {
    src: EntityDataKey,
    dst: EntityDataKey,
    edge: EntityDataKey,
}

impl DataEdgeKey {
    pub fn builder() -> DataEdgeKeyBuilder {
        DataEdgeKeyBuilder::new()
    }

    pub fn src(&self) -> &EntityDataKey {
        &self.src
    }

    pub fn dst(&self) -> &EntityDataKey {
        &self.dst
    }

    pub fn edge(&self) -> &EntityDataKey {
        &self.edge
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match DataEdgeKeyBuilder::from_object(value).and_then(DataEdgeKeyBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid DataEdgeKey");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct DataEdgeKeyBuilder {
    src: Option<EntityDataKey>,
    dst: Option<EntityDataKey>,
    edge: Option<EntityDataKey>,
}

impl DataEdgeKeyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "DataEdgeKey")?;
        let mut builder = Self::new();
        if let Some(src) = fields::defined(map, "src") {
            builder = builder.set_src(parse_key(src, "src")?);
        }
        if let Some(dst) = fields::defined(map, "dst") {
            builder = builder.set_dst(parse_key(dst, "dst")?);
        }
        if let Some(edge) = fields::defined(map, "edge") {
            builder = builder.set_edge(parse_key(edge, "edge")?);
        }
        Ok(builder)
    }

    pub fn set_src(mut self, src: EntityDataKey) -> Self {
        self.src = Some(src);
        self
    }

    pub fn set_dst(mut self, dst: EntityDataKey) -> Self {
        self.dst = Some(dst);
        self
    }

    pub fn set_edge(mut self, edge: EntityDataKey) -> Self {
        self.edge = Some(edge);
        self
    }

    pub fn build(self) -> Result<DataEdgeKey, ModelError> {
        Ok(DataEdgeKey {
            src: self.src.ok_or(ModelError::MissingField("src"))?,
            dst: self.dst.ok_or(ModelError::MissingField("dst"))?,
            edge: self.edge.ok_or(ModelError::MissingField("edge"))?,
        })
    }
}

fn parse_key(value: &Value, field: &'static str) -> Result<EntityDataKey, ModelError> {
    EntityDataKeyBuilder::from_object(value)
        .and_then(EntityDataKeyBuilder::build)
        .map_err(|error| ModelError::child(field, error))
}

impl From<&DataEdgeKey> for DataEdgeKeyBuilder {
    fn from(data_edge_key: &DataEdgeKey) -> Self {
        Self {
            src: Some(data_edge_key.src),
            dst: Some(data_edge_key.dst),
            edge: Some(data_edge_key.edge),
        }
    }
}
