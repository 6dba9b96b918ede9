pub mod action_type;
pub mod analyzer_type;
pub mod delete_type;
pub mod grant_type;
pub mod index_type;
pub mod permission_type;
pub mod principal_type;
pub mod request_state;
pub mod securable_object_type;
pub mod sort_type;
pub mod update_type;
