use lattice_sdk::models::{
    acl::Acl,
    role::{Role, RoleBuilder},
    validation,
};
use serde_json::json;

use crate::support::{role_principal, ORGANIZATION_ID};

#[test]
fn null_json_values_count_as_undefined() {
    assert!(!validation::is_defined(&json!(null)));
    assert!(validation::is_defined(&json!("")));
    assert!(validation::is_defined(&json!(0)));
    assert!(validation::is_defined(&json!({})));
}

#[test]
fn null_fields_take_the_unset_path_in_object_form() {
    let role = RoleBuilder::from_object(&json!({
        "organizationId": ORGANIZATION_ID,
        "title": "Admin",
        "description": null,
        "principal": role_principal().to_object(),
    }))
    .and_then(RoleBuilder::build)
    .expect("valid role");
    assert!(role.description().is_none());

    // a null required field reads as missing, not as a malformed value
    assert!(!Role::is_valid(&json!({
        "organizationId": ORGANIZATION_ID,
        "title": null,
        "principal": role_principal().to_object(),
    })));
}

#[test]
fn string_array_predicate_rejects_empty_members() {
    assert!(validation::is_non_empty_string_array(&["a".to_string()]));
    assert!(!validation::is_non_empty_string_array(&[]));
    assert!(!validation::is_non_empty_string_array(&[
        "a".to_string(),
        String::new(),
    ]));
}

#[test]
fn uuid_array_predicate_rejects_malformed_members() {
    assert!(validation::is_valid_uuid_array(&[ORGANIZATION_ID.to_string()]));
    assert!(!validation::is_valid_uuid_array(&[]));
    assert!(!validation::is_valid_uuid_array(&[
        ORGANIZATION_ID.to_string(),
        "not-a-uuid".to_string(),
    ]));
}

#[test]
fn uuid_arrays_in_object_form_reject_malformed_members() {
    assert!(!Acl::is_valid(&json!({
        "aclKey": [ORGANIZATION_ID, "not-a-uuid"],
        "aces": [],
    })));
}
