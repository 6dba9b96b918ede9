use serde_json::Value;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError},
    models::access_check::AccessCheck,
};

const AUTHORIZATIONS_PATH: &str = "datastore/authorizations";

pub struct AuthorizationApi {
    client: ApiClient,
}

impl AuthorizationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Asks the backend which of the requested permissions the caller holds
    /// on each aclKey.
    pub async fn check_authorizations(
        &self,
        checks: &[AccessCheck],
    ) -> Result<Vec<Value>, ApiError> {
        if checks.is_empty() {
            return Err(ApiError::InvalidArgument(
                "checks must be a non-empty array of AccessCheck".to_string(),
            ));
        }
        self.client.post(AUTHORIZATIONS_PATH, checks).await
    }
}
