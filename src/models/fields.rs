//! JSON field extraction used by every builder's `from_object`. Each helper
//! maps a malformed value to the `ModelError` naming the offending field, so
//! builders stay a flat list of "if present, set" steps.

use std::str::FromStr;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{model_error::ModelError, validation};

pub fn as_object<'a>(
    value: &'a Value,
    model: &'static str,
) -> Result<&'a Map<String, Value>, ModelError> {
    value.as_object().ok_or(ModelError::NotAnObject(model))
}

/// Field lookup for `from_object`: an explicit JSON null counts as an
/// absent key, so it takes the same skip path as an unset field.
pub fn defined<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| validation::is_defined(value))
}

pub fn string_field(value: &Value, field: &'static str) -> Result<String, ModelError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ModelError::EmptyString(field))
}

pub fn bool_field(value: &Value, field: &'static str) -> Result<bool, ModelError> {
    value.as_bool().ok_or(ModelError::InvalidBoolean(field))
}

pub fn int_field(value: &Value, field: &'static str) -> Result<i64, ModelError> {
    value.as_i64().ok_or(ModelError::InvalidInteger(field))
}

pub fn uuid_field(value: &Value, field: &'static str) -> Result<Uuid, ModelError> {
    let raw = value.as_str().ok_or(ModelError::InvalidUuid(field))?;
    parse_uuid(raw, field)
}

pub fn parse_uuid(raw: &str, field: &'static str) -> Result<Uuid, ModelError> {
    if !validation::is_valid_uuid(raw) {
        return Err(ModelError::InvalidUuid(field));
    }
    Uuid::parse_str(raw).map_err(|_| ModelError::InvalidUuid(field))
}

pub fn string_array_field(value: &Value, field: &'static str) -> Result<Vec<String>, ModelError> {
    let items = value.as_array().ok_or(ModelError::InvalidArray {
        field,
        expected: "strings",
    })?;
    items
        .iter()
        .map(|item| string_field(item, field))
        .collect()
}

pub fn uuid_array_field(value: &Value, field: &'static str) -> Result<Vec<Uuid>, ModelError> {
    let items = value.as_array().ok_or(ModelError::InvalidArray {
        field,
        expected: "UUIDs",
    })?;
    let raw = items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ModelError::InvalidUuid(field))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if !raw.is_empty() && !validation::is_valid_uuid_array(&raw) {
        return Err(ModelError::InvalidUuid(field));
    }
    raw.iter()
        .map(|item| Uuid::parse_str(item).map_err(|_| ModelError::InvalidUuid(field)))
        .collect()
}

pub fn array_field<'a>(
    value: &'a Value,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a Vec<Value>, ModelError> {
    value
        .as_array()
        .ok_or(ModelError::InvalidArray { field, expected })
}

pub fn enum_field<T>(
    value: &Value,
    expected: &'static str,
) -> Result<T, ModelError>
where
    T: FromStr<Err = ModelError>,
{
    match value.as_str() {
        Some(raw) => raw.parse(),
        None => Err(ModelError::InvalidEnum {
            expected,
            value: value.to_string(),
        }),
    }
}
