use std::collections::BTreeMap;

use lattice_sdk::{
    models::{
        access_check::{AccessCheck, AccessCheckBuilder},
        ace::{Ace, AceBuilder},
        acl::{Acl, AclBuilder},
        entity_type::{EntityType, EntityTypeBuilder},
        fqn::FullyQualifiedName,
        grant::{Grant, GrantBuilder},
        organization::{Organization, OrganizationBuilder},
        principal::{Principal, PrincipalBuilder},
        property_type::{PropertyType, PropertyTypeBuilder},
        role::{Role, RoleBuilder},
    },
    types::{
        grant_type::GrantType, permission_type::PermissionType, principal_type::PrincipalType,
    },
};
use uuid::Uuid;

pub const ORGANIZATION_ID: &str = "01234567-89ab-4def-0123-456789abcdef";
pub const ROLE_ID: &str = "fedcba98-7654-4321-fedc-ba9876543210";
pub const PROPERTY_TYPE_ID: &str = "11111111-2222-4333-8444-555555555555";

pub fn organization_id() -> Uuid {
    ORGANIZATION_ID.parse().expect("valid organization id")
}

pub fn role_id() -> Uuid {
    ROLE_ID.parse().expect("valid role id")
}

pub fn property_type_id() -> Uuid {
    PROPERTY_TYPE_ID.parse().expect("valid property type id")
}

pub fn user_principal() -> Principal {
    PrincipalBuilder::new()
        .set_id("auth0|user-1")
        .expect("valid principal id")
        .set_type(PrincipalType::User)
        .build()
        .expect("valid principal")
}

pub fn role_principal() -> Principal {
    PrincipalBuilder::new()
        .set_id("org-admin")
        .expect("valid principal id")
        .set_type(PrincipalType::Role)
        .build()
        .expect("valid principal")
}

pub fn read_write_ace() -> Ace {
    AceBuilder::new()
        .set_principal(user_principal())
        .set_permissions([PermissionType::Read, PermissionType::Write])
        .build()
        .expect("valid ace")
}

pub fn organization_acl() -> Acl {
    AclBuilder::new()
        .set_acl_key(vec![organization_id()])
        .set_aces(vec![read_write_ace()])
        .build()
        .expect("valid acl")
}

pub fn organization_access_check() -> AccessCheck {
    AccessCheckBuilder::new()
        .set_acl_key(vec![organization_id()])
        .expect("valid acl key")
        .set_permissions([PermissionType::Owner])
        .build()
        .expect("valid access check")
}

pub fn manual_grant() -> Grant {
    GrantBuilder::new()
        .set_grant_type(GrantType::Manual)
        .build()
        .expect("valid grant")
}

pub fn admin_role() -> Role {
    RoleBuilder::new()
        .set_id(role_id())
        .set_organization_id(organization_id())
        .set_title("Admin")
        .expect("valid title")
        .set_principal(role_principal())
        .build()
        .expect("valid role")
}

pub fn research_organization() -> Organization {
    let mut grants = BTreeMap::new();
    grants.insert(role_id(), manual_grant());
    OrganizationBuilder::new()
        .set_id(organization_id())
        .set_title("Research Lab")
        .expect("valid title")
        .set_principal(role_principal())
        .set_members(vec![user_principal()])
        .set_roles(vec![admin_role()])
        .set_email_domains(["lab.example.com".to_string()])
        .expect("valid email domains")
        .set_grants(grants)
        .build()
        .expect("valid organization")
}

pub fn data_fqn() -> FullyQualifiedName {
    FullyQualifiedName::new("OL", "DATA").expect("valid fqn")
}

pub fn name_property_type() -> PropertyType {
    PropertyTypeBuilder::new()
        .set_id(property_type_id())
        .set_type(FullyQualifiedName::new("general", "name").expect("valid fqn"))
        .set_title("Name")
        .expect("valid title")
        .set_datatype("String")
        .expect("valid datatype")
        .build()
        .expect("valid property type")
}

pub fn person_entity_type() -> EntityType {
    EntityTypeBuilder::new()
        .set_type(FullyQualifiedName::new("general", "person").expect("valid fqn"))
        .set_title("Person")
        .expect("valid title")
        .set_key([property_type_id()])
        .set_properties([property_type_id()])
        .build()
        .expect("valid entity type")
}
