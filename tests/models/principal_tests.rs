use std::collections::HashSet;

use lattice_sdk::{
    models::{
        model_error::ModelError,
        principal::{Principal, PrincipalBuilder},
    },
    types::principal_type::PrincipalType,
};
use serde_json::json;

use crate::support::user_principal;

#[test]
fn builds_with_id_and_type() {
    let principal = PrincipalBuilder::new()
        .set_id("u1")
        .expect("valid id")
        .set_type(PrincipalType::User)
        .build()
        .expect("valid principal");
    assert_eq!(principal.to_object(), json!({ "id": "u1", "type": "USER" }));
}

#[test]
fn build_without_type_names_the_missing_field() {
    let result = PrincipalBuilder::new().set_id("u1").expect("valid id").build();
    assert!(matches!(result, Err(ModelError::MissingField("type"))));
}

#[test]
fn build_without_id_names_the_missing_field() {
    let result = PrincipalBuilder::new()
        .set_type(PrincipalType::User)
        .build();
    assert!(matches!(result, Err(ModelError::MissingField("id"))));
}

#[test]
fn set_id_rejects_empty_string() {
    assert!(matches!(
        PrincipalBuilder::new().set_id(""),
        Err(ModelError::EmptyString("id"))
    ));
}

#[test]
fn is_valid_accepts_instance_object_form() {
    let principal = user_principal();
    assert!(Principal::is_valid(&principal.to_object()));
}

#[test]
fn is_valid_rejects_unknown_type_without_panicking() {
    assert!(!Principal::is_valid(
        &json!({ "id": "u1", "type": "SUPERUSER" })
    ));
    assert!(!Principal::is_valid(&json!("not an object")));
}

#[test]
fn round_trips_through_object_form() {
    let principal = user_principal();
    let rebuilt = PrincipalBuilder::from_object(&principal.to_object())
        .and_then(PrincipalBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, principal);
    assert_eq!(rebuilt.to_object(), principal.to_object());
}

#[test]
fn structurally_equal_instances_collapse_in_a_set() {
    let mut set = HashSet::new();
    set.insert(user_principal());
    set.insert(user_principal());
    assert_eq!(set.len(), 1);
}

#[test]
fn builder_from_instance_copies_every_field() {
    let principal = user_principal();
    let copy = PrincipalBuilder::from(&principal)
        .build()
        .expect("copied principal");
    assert_eq!(copy, principal);
}
