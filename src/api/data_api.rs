use std::collections::BTreeMap;

use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError, resources::EntitySetSelection},
    models::{data_edge_key::DataEdgeKey, data_graph::DataGraph},
    types::{delete_type::DeleteType, update_type::UpdateType},
};

const DATA_PATH: &str = "datastore/data";

pub struct DataApi {
    client: ApiClient,
}

impl DataApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Bulk-creates entities and the associations connecting them; returns
    /// the server-assigned entity key ids per entity set.
    pub async fn create_entity_and_association_data(
        &self,
        data: &DataGraph,
    ) -> Result<Value, ApiError> {
        self.client.post(DATA_PATH, data).await
    }

    pub async fn create_associations(&self, edges: &[DataEdgeKey]) -> Result<i64, ApiError> {
        if edges.is_empty() {
            return Err(ApiError::InvalidArgument(
                "edges must be a non-empty array of DataEdgeKey".to_string(),
            ));
        }
        let path = format!("{DATA_PATH}/association");
        self.client.put(&path, edges).await
    }

    pub async fn get_entity_set_data(
        &self,
        entity_set_id: Uuid,
        selection: &EntitySetSelection,
    ) -> Result<Vec<Value>, ApiError> {
        selection
            .validate()
            .map_err(|error| ApiError::InvalidArgument(error.to_string()))?;
        let path = format!("{DATA_PATH}/set/{entity_set_id}");
        self.client.post(&path, selection).await
    }

    /// Rewrites entities keyed by entity key id; returns the updated count.
    pub async fn update_entities_in_entity_set(
        &self,
        entity_set_id: Uuid,
        entities: &BTreeMap<Uuid, Value>,
        update_type: UpdateType,
    ) -> Result<i64, ApiError> {
        if entities.is_empty() {
            return Err(ApiError::InvalidArgument(
                "entities must be a non-empty map of entityKeyId to entity data".to_string(),
            ));
        }
        for entity in entities.values() {
            if !entity.is_object() {
                return Err(ApiError::InvalidArgument(
                    "entity data must be an object".to_string(),
                ));
            }
        }
        let path = format!(
            "{DATA_PATH}/set/{entity_set_id}?type={}",
            update_type.as_str(),
        );
        self.client.put(&path, entities).await
    }

    /// Deletes entities; returns the deleted count.
    pub async fn delete_entities(
        &self,
        entity_set_id: Uuid,
        entity_key_ids: &[Uuid],
        delete_type: DeleteType,
    ) -> Result<i64, ApiError> {
        if entity_key_ids.is_empty() {
            return Err(ApiError::InvalidArgument(
                "entityKeyIds must be a non-empty array of UUIDs".to_string(),
            ));
        }
        let path = format!(
            "{DATA_PATH}/set/{entity_set_id}?type={}",
            delete_type.as_str(),
        );
        self.client.delete_with_body(&path, entity_key_ids).await
    }
}
