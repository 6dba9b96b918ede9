//! Immutable value objects and their builders. Validated construction goes
//! through a model's builder (or `from_object` for untrusted JSON); the
//! derived `Deserialize` impls exist for decoding backend responses, which
//! are trusted as-is and bypass builder validation.

pub mod access_check;
pub mod ace;
pub mod acl;
pub mod acl_data;
pub mod app;
pub mod association_type;
pub mod data_edge_key;
pub mod data_graph;
pub mod entity_data_key;
pub mod entity_set;
pub mod entity_type;
pub mod fields;
pub mod fqn;
pub mod grant;
pub mod model_error;
pub mod organization;
pub mod principal;
pub mod property_type;
pub mod request;
pub mod role;
pub mod schema;
pub mod validation;
