use serde_json::Value;

use crate::{
    api::{api_client::ApiClient, api_error::ApiError},
    models::request::Request,
    types::request_state::RequestState,
};

const REQUESTS_PATH: &str = "datastore/requests";

pub struct PermissionsRequestsApi {
    client: ApiClient,
}

impl PermissionsRequestsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn submit_requests(&self, requests: &[Request]) -> Result<(), ApiError> {
        if requests.is_empty() {
            return Err(ApiError::InvalidArgument(
                "requests must be a non-empty array of Request".to_string(),
            ));
        }
        self.client.put_no_content(REQUESTS_PATH, requests).await
    }

    /// Fetches every permission request visible to the caller in the given
    /// review state.
    pub async fn get_all_requests(&self, state: RequestState) -> Result<Vec<Value>, ApiError> {
        let path = format!("{REQUESTS_PATH}/{}", state.as_str());
        self.client.get(&path).await
    }
}
