use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::sort_type::SortType;

/// Filter applied when reading an entity set: which properties to return
/// and, optionally, which entities.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntitySetSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub entity_key_ids: Option<Vec<Uuid>>,
}

/// Sort applied to a data query. Field sorts must name the property to
/// sort on; score sorts must not.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_sort_definition"))]
pub struct SortDefinition {
    #[serde(rename = "type")]
    pub sort_type: SortType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type_id: Option<Uuid>,
}

fn validate_sort_definition(sort: &SortDefinition) -> Result<(), validator::ValidationError> {
    match (sort.sort_type, sort.property_type_id) {
        (SortType::Field, None) => Err(validator::ValidationError::new(
            "field_sort_requires_property_type_id",
        )),
        (SortType::Score, Some(_)) => Err(validator::ValidationError::new(
            "score_sort_takes_no_property_type_id",
        )),
        _ => Ok(()),
    }
}
