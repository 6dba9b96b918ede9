use lattice_sdk::{
    models::{
        access_check::{AccessCheck, AccessCheckBuilder},
        ace::AceBuilder,
        acl::{Acl, AclBuilder},
        acl_data::{AclData, AclDataBuilder},
        grant::{Grant, GrantBuilder},
        model_error::ModelError,
        request::RequestBuilder,
    },
    types::{action_type::ActionType, grant_type::GrantType, permission_type::PermissionType},
};
use serde_json::json;

use crate::support::{
    manual_grant, organization_access_check, organization_acl, read_write_ace, user_principal,
    ORGANIZATION_ID,
};

#[test]
fn ace_requires_a_principal() {
    let result = AceBuilder::new()
        .set_permissions([PermissionType::Read])
        .build();
    assert!(matches!(result, Err(ModelError::MissingField("principal"))));
}

#[test]
fn ace_permissions_default_empty_and_deduplicate() {
    let bare = AceBuilder::new()
        .set_principal(user_principal())
        .build()
        .expect("valid ace");
    assert!(bare.permissions().is_empty());

    let deduped = AceBuilder::new()
        .set_principal(user_principal())
        .set_permissions([
            PermissionType::Read,
            PermissionType::Read,
            PermissionType::Write,
        ])
        .build()
        .expect("valid ace");
    assert_eq!(
        deduped.permissions(),
        &[PermissionType::Read, PermissionType::Write]
    );
}

#[test]
fn ace_round_trips_through_object_form() {
    let ace = read_write_ace();
    let rebuilt = AceBuilder::from_object(&ace.to_object())
        .and_then(AceBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt.to_object(), ace.to_object());
}

#[test]
fn acl_defaults_to_empty_key_and_aces() {
    let acl = AclBuilder::new().build().expect("valid acl");
    assert_eq!(acl.to_object(), json!({ "aclKey": [], "aces": [] }));
}

#[test]
fn acl_round_trips_through_object_form() {
    let acl = organization_acl();
    let rebuilt = AclBuilder::from_object(&acl.to_object())
        .and_then(AclBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, acl);
    assert!(Acl::is_valid(&acl.to_object()));
}

#[test]
fn acl_rejects_an_invalid_child_ace() {
    let raw = json!({
        "aclKey": [ORGANIZATION_ID],
        "aces": [{ "principal": { "id": "u1" } }],
    });
    assert!(!Acl::is_valid(&raw));
}

#[test]
fn acl_data_requires_acl_and_action() {
    let acl_data = AclDataBuilder::new()
        .set_acl(organization_acl())
        .set_action(ActionType::Set)
        .build()
        .expect("valid acl data");
    assert_eq!(acl_data.action(), ActionType::Set);

    assert!(matches!(
        AclDataBuilder::new().set_acl(organization_acl()).build(),
        Err(ModelError::MissingField("action"))
    ));
    assert!(AclData::is_valid(&acl_data.to_object()));
}

#[test]
fn access_check_requires_non_empty_acl_key() {
    assert!(matches!(
        AccessCheckBuilder::new().set_acl_key(vec![]),
        Err(ModelError::EmptyArray("aclKey"))
    ));
    assert!(matches!(
        AccessCheckBuilder::new().build(),
        Err(ModelError::MissingField("aclKey"))
    ));
    assert!(AccessCheck::is_valid(
        &organization_access_check().to_object()
    ));
}

#[test]
fn request_defaults_reason_and_permissions() {
    let request = RequestBuilder::from_object(&json!({ "aclKey": [ORGANIZATION_ID] }))
        .and_then(RequestBuilder::build)
        .expect("valid request");
    assert_eq!(
        request.to_object(),
        json!({ "aclKey": [ORGANIZATION_ID], "permissions": [], "reason": "" })
    );
}

#[test]
fn grant_with_only_type_serializes_with_empty_defaults() {
    let grant = GrantBuilder::new()
        .set_grant_type(GrantType::Manual)
        .build()
        .expect("valid grant");
    assert_eq!(
        grant.to_object(),
        json!({ "attribute": "", "grantType": "Manual", "mappings": [] })
    );
}

#[test]
fn grant_requires_grant_type_and_rejects_empty_mappings_entries() {
    assert!(matches!(
        GrantBuilder::new().build(),
        Err(ModelError::MissingField("grantType"))
    ));
    assert!(GrantBuilder::new()
        .set_mappings(["".to_string()])
        .is_err());
    assert!(!Grant::is_valid(&json!({ "grantType": "NotAGrantType" })));
}

#[test]
fn grant_mappings_deduplicate() {
    let grant = GrantBuilder::new()
        .set_grant_type(GrantType::EmailDomain)
        .set_mappings([
            "lab.example.com".to_string(),
            "lab.example.com".to_string(),
        ])
        .expect("valid mappings")
        .build()
        .expect("valid grant");
    assert_eq!(grant.mappings(), &["lab.example.com".to_string()]);
}

#[test]
fn grant_round_trips_through_object_form() {
    let grant = manual_grant();
    let rebuilt = GrantBuilder::from_object(&grant.to_object())
        .and_then(GrantBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, grant);
}
