use uuid::Uuid;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError},
    models::{acl::Acl, acl_data::AclData},
};

const PERMISSIONS_PATH: &str = "datastore/permissions";

pub struct PermissionsApi {
    client: ApiClient,
}

impl PermissionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the ACL attached to the securable object at `acl_key`.
    pub async fn get_acl(&self, acl_key: &[Uuid]) -> Result<Acl, ApiError> {
        if acl_key.is_empty() {
            return Err(ApiError::InvalidArgument(
                "aclKey must be a non-empty array of UUIDs".to_string(),
            ));
        }
        self.client.post(PERMISSIONS_PATH, acl_key).await
    }

    /// Applies the mutation carried by `acl_data` to its ACL.
    pub async fn update_acl(&self, acl_data: &AclData) -> Result<(), ApiError> {
        self.client
            .patch_no_content(PERMISSIONS_PATH, acl_data)
            .await
    }
}
