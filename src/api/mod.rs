pub mod api_client;
pub mod api_error;
pub mod authorization_api;
pub mod data_api;
pub mod entity_data_model_api;
pub mod organizations_api;
pub mod permissions_api;
pub mod permissions_requests_api;
pub mod resources;

pub use api_client::ApiClient;
pub use api_error::ApiError;
