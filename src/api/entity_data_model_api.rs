use uuid::Uuid;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError},
    models::{
        association_type::AssociationType, entity_set::EntitySet, entity_type::EntityType,
        fqn::FullyQualifiedName, property_type::PropertyType, schema::Schema,
    },
};

const EDM_PATH: &str = "datastore/edm";

pub struct EntityDataModelApi {
    client: ApiClient,
}

impl EntityDataModelApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_property_type(&self, property_type_id: Uuid) -> Result<PropertyType, ApiError> {
        let path = format!("{EDM_PATH}/property/type/{property_type_id}");
        self.client.get(&path).await
    }

    pub async fn create_property_type(
        &self,
        property_type: &PropertyType,
    ) -> Result<Uuid, ApiError> {
        let path = format!("{EDM_PATH}/property/type");
        self.client.post(&path, property_type).await
    }

    pub async fn get_entity_type(&self, entity_type_id: Uuid) -> Result<EntityType, ApiError> {
        let path = format!("{EDM_PATH}/entity/type/{entity_type_id}");
        self.client.get(&path).await
    }

    pub async fn create_entity_type(&self, entity_type: &EntityType) -> Result<Uuid, ApiError> {
        let path = format!("{EDM_PATH}/entity/type");
        self.client.post(&path, entity_type).await
    }

    pub async fn add_property_type_to_entity_type(
        &self,
        entity_type_id: Uuid,
        property_type_id: Uuid,
    ) -> Result<(), ApiError> {
        let path = format!("{EDM_PATH}/entity/type/{entity_type_id}/{property_type_id}");
        self.client.put_empty(&path).await
    }

    pub async fn create_association_type(
        &self,
        association_type: &AssociationType,
    ) -> Result<Uuid, ApiError> {
        let path = format!("{EDM_PATH}/association/type");
        self.client.post(&path, association_type).await
    }

    pub async fn get_entity_set(&self, entity_set_id: Uuid) -> Result<EntitySet, ApiError> {
        let path = format!("{EDM_PATH}/entity/set/{entity_set_id}");
        self.client.get(&path).await
    }

    pub async fn get_schema(&self, fqn: &FullyQualifiedName) -> Result<Schema, ApiError> {
        let path = format!("{EDM_PATH}/schema/{}/{}", fqn.namespace(), fqn.name());
        self.client.get(&path).await
    }
}
