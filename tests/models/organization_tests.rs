use std::collections::HashSet;

use lattice_sdk::models::{
    model_error::ModelError,
    organization::{Organization, OrganizationBuilder},
    role::{Role, RoleBuilder},
};
use serde_json::json;

use crate::support::{
    admin_role, organization_id, research_organization, role_principal, ORGANIZATION_ID, ROLE_ID,
};

#[test]
fn role_requires_organization_id_title_and_principal() {
    assert!(matches!(
        RoleBuilder::new()
            .set_title("Admin")
            .expect("valid title")
            .set_principal(role_principal())
            .build(),
        Err(ModelError::MissingField("organizationId"))
    ));
    assert!(matches!(
        RoleBuilder::new()
            .set_organization_id(organization_id())
            .set_principal(role_principal())
            .build(),
        Err(ModelError::MissingField("title"))
    ));
    assert!(matches!(
        RoleBuilder::new()
            .set_organization_id(organization_id())
            .set_title("Admin")
            .expect("valid title")
            .build(),
        Err(ModelError::MissingField("principal"))
    ));
}

#[test]
fn role_omits_unset_id_and_description_from_wire_form() {
    let role = RoleBuilder::new()
        .set_organization_id(organization_id())
        .set_title("Admin")
        .expect("valid title")
        .set_principal(role_principal())
        .build()
        .expect("valid role");
    let object = role.to_object();
    assert!(object.get("id").is_none());
    assert!(object.get("description").is_none());
    assert_eq!(object.get("organizationId"), Some(&json!(ORGANIZATION_ID)));
}

#[test]
fn role_round_trips_through_object_form() {
    let role = admin_role();
    let rebuilt = RoleBuilder::from_object(&role.to_object())
        .and_then(RoleBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, role);
    assert!(Role::is_valid(&role.to_object()));
}

#[test]
fn organization_requires_title_and_principal() {
    assert!(matches!(
        OrganizationBuilder::new().set_principal(role_principal()).build(),
        Err(ModelError::MissingField("title"))
    ));
    assert!(matches!(
        OrganizationBuilder::new()
            .set_title("Research Lab")
            .expect("valid title")
            .build(),
        Err(ModelError::MissingField("principal"))
    ));
}

#[test]
fn organization_backfills_empty_collections() {
    let organization = OrganizationBuilder::new()
        .set_title("Research Lab")
        .expect("valid title")
        .set_principal(role_principal())
        .build()
        .expect("valid organization");
    assert!(organization.members().is_empty());
    assert!(organization.roles().is_empty());
    assert!(organization.email_domains().is_empty());
    assert!(organization.apps().is_empty());
    assert!(organization.grants().is_empty());
    assert!(organization.connections().is_empty());
    assert!(organization.partitions().is_none());

    let object = organization.to_object();
    assert_eq!(object.get("members"), Some(&json!([])));
    assert!(object.get("partitions").is_none());
}

#[test]
fn organization_email_domains_deduplicate() {
    let organization = OrganizationBuilder::new()
        .set_title("Research Lab")
        .expect("valid title")
        .set_principal(role_principal())
        .set_email_domains([
            "lab.example.com".to_string(),
            "lab.example.com".to_string(),
        ])
        .expect("valid email domains")
        .build()
        .expect("valid organization");
    assert_eq!(organization.email_domains().len(), 1);
}

#[test]
fn organization_grants_reject_non_uuid_keys() {
    let raw = json!({
        "title": "Research Lab",
        "principal": { "id": "org-admin", "type": "ROLE" },
        "grants": { "not-a-uuid": { "grantType": "Manual" } },
    });
    assert!(!Organization::is_valid(&raw));
}

#[test]
fn organization_grants_reject_an_invalid_grant_value() {
    let raw = json!({
        "title": "Research Lab",
        "principal": { "id": "org-admin", "type": "ROLE" },
        "grants": { ROLE_ID: { "grantType": "Magic" } },
    });
    assert!(!Organization::is_valid(&raw));
}

#[test]
fn organization_round_trips_through_object_form() {
    let organization = research_organization();
    let rebuilt = OrganizationBuilder::from_object(&organization.to_object())
        .and_then(OrganizationBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, organization);
    assert_eq!(rebuilt.to_object(), organization.to_object());
}

#[test]
fn structurally_equal_organizations_collapse_in_a_set() {
    let mut set = HashSet::new();
    set.insert(research_organization());
    set.insert(research_organization());
    assert_eq!(set.len(), 1);
}

#[test]
fn organization_invalid_member_fails_the_whole_composite() {
    let raw = json!({
        "title": "Research Lab",
        "principal": { "id": "org-admin", "type": "ROLE" },
        "members": [
            { "id": "auth0|user-1", "type": "USER" },
            { "id": "", "type": "USER" },
        ],
    });
    assert!(!Organization::is_valid(&raw));
}
