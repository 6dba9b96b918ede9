use uuid::Uuid;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError},
    models::{organization::Organization, role::Role, validation},
};

const ORGANIZATIONS_PATH: &str = "datastore/organizations";

pub struct OrganizationsApi {
    client: ApiClient,
}

impl OrganizationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_organization(&self, organization_id: Uuid) -> Result<Organization, ApiError> {
        let path = format!("{ORGANIZATIONS_PATH}/{organization_id}");
        self.client.get(&path).await
    }

    pub async fn get_all_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.client.get(ORGANIZATIONS_PATH).await
    }

    /// Creates the organization and returns its server-assigned id.
    pub async fn create_organization(
        &self,
        organization: &Organization,
    ) -> Result<Uuid, ApiError> {
        self.client.post(ORGANIZATIONS_PATH, organization).await
    }

    pub async fn delete_organization(&self, organization_id: Uuid) -> Result<(), ApiError> {
        let path = format!("{ORGANIZATIONS_PATH}/{organization_id}");
        self.client.delete_no_content(&path).await
    }

    pub async fn update_title(
        &self,
        organization_id: Uuid,
        title: &str,
    ) -> Result<(), ApiError> {
        if !validation::is_non_empty_string(title) {
            return Err(ApiError::InvalidArgument(
                "title must be a non-empty string".to_string(),
            ));
        }
        let path = format!("{ORGANIZATIONS_PATH}/{organization_id}/title");
        self.client.put_no_content(&path, title).await
    }

    pub async fn add_member(
        &self,
        organization_id: Uuid,
        member_id: &str,
    ) -> Result<(), ApiError> {
        if !validation::is_non_empty_string(member_id) {
            return Err(ApiError::InvalidArgument(
                "memberId must be a non-empty string".to_string(),
            ));
        }
        let path =
            format!("{ORGANIZATIONS_PATH}/{organization_id}/principals/members/{member_id}");
        self.client.put_empty(&path).await
    }

    pub async fn remove_member(
        &self,
        organization_id: Uuid,
        member_id: &str,
    ) -> Result<(), ApiError> {
        if !validation::is_non_empty_string(member_id) {
            return Err(ApiError::InvalidArgument(
                "memberId must be a non-empty string".to_string(),
            ));
        }
        let path =
            format!("{ORGANIZATIONS_PATH}/{organization_id}/principals/members/{member_id}");
        self.client.delete_no_content(&path).await
    }

    /// Creates the role inside its organization and returns the new role id.
    pub async fn create_role(&self, role: &Role) -> Result<Uuid, ApiError> {
        let path = format!("{ORGANIZATIONS_PATH}/roles");
        self.client.post(&path, role).await
    }
}
