use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    api::api_error::ApiError,
    config::{self, ClientConfig},
};

/// Shared transport for every API wrapper: joins paths onto the configured
/// base URL, attaches the bearer token, and maps non-2xx statuses to errors.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
            auth_token: config.auth_token,
        }
    }

    /// Builds a client from the process-wide configuration snapshot.
    pub fn from_config() -> Self {
        Self::new(config::get_config())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/'),
        );
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn put_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute_no_content(self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute_no_content(self.request(Method::PUT, path))
            .await
    }

    pub(crate) async fn patch_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute_no_content(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub(crate) async fn delete_no_content(&self, path: &str) -> Result<(), ApiError> {
        self.execute_no_content(self.request(Method::DELETE, path))
            .await
    }

    pub(crate) async fn delete_with_body<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::DELETE, path).json(body))
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "request rejected by backend");
            return Err(ApiError::UnexpectedStatus(status));
        }
        Ok(response.json().await?)
    }

    async fn execute_no_content(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "request rejected by backend");
            return Err(ApiError::UnexpectedStatus(status));
        }
        Ok(())
    }
}
