//! Primitive predicates shared by every builder. Pure checks, never panic,
//! never throw; builders translate a `false` into the matching `ModelError`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UUID_PATTERN: Regex = Regex::new(
        "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("uuid pattern is a valid regex");
}

pub fn is_defined(value: &serde_json::Value) -> bool {
    !value.is_null()
}

pub fn is_non_empty_string(value: &str) -> bool {
    !value.is_empty()
}

pub fn is_valid_uuid(value: &str) -> bool {
    UUID_PATTERN.is_match(value)
}

pub fn is_non_empty_string_array(values: &[String]) -> bool {
    !values.is_empty() && values.iter().all(|value| is_non_empty_string(value))
}

pub fn is_valid_uuid_array(values: &[String]) -> bool {
    !values.is_empty() && values.iter().all(|value| is_valid_uuid(value))
}

/// Set-like accumulation: equal elements collapse, first occurrence wins.
pub fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

pub fn extend_unique<T: PartialEq>(items: &mut Vec<T>, incoming: impl IntoIterator<Item = T>) {
    for item in incoming {
        push_unique(items, item);
    }
}
