use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    fields,
    grant::{Grant, GrantBuilder},
    model_error::ModelError,
    principal::{Principal, PrincipalBuilder},
    role::{Role, RoleBuilder},
    validation,
};

/// An organization: a securable principal that owns roles, members, grant
/// rules, and app installations.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    principal: Principal,
    members: Vec<Principal>,
    roles: Vec<Role>,
    email_domains: Vec<String>,
    apps: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<Vec<i32>>,
    grants: BTreeMap<Uuid, Grant>,
    connections: Vec<String>,
}

impl Organization {
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn members(&self) -> &[Principal] {
        &self.members
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn email_domains(&self) -> &[String] {
        &self.email_domains
    }

    pub fn apps(&self) -> &[Uuid] {
        &self.apps
    }

    pub fn partitions(&self) -> Option<&[i32]> {
        self.partitions.as_deref()
    }

    pub fn grants(&self) -> &BTreeMap<Uuid, Grant> {
        &self.grants
    }

    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match OrganizationBuilder::from_object(value).and_then(OrganizationBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Organization");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct OrganizationBuilder {
    id: Option<Uuid>,
    title: Option<String>,
    description: Option<String>,
    principal: Option<Principal>,
    members: Option<Vec<Principal>>,
    roles: Option<Vec<Role>>,
    email_domains: Option<Vec<String>>,
    apps: Option<Vec<Uuid>>,
    partitions: Option<Vec<i32>>,
    grants: Option<BTreeMap<Uuid, Grant>>,
    connections: Option<Vec<String>>,
}

impl OrganizationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Organization")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
        }
        if let Some(title) = fields::defined(map, "title") {
            builder = builder.set_title(fields::string_field(title, "title")?)?;
        }
        if let Some(description) = fields::defined(map, "description") {
            builder = builder.set_description(fields::string_field(description, "description")?);
        }
        if let Some(principal) = fields::defined(map, "principal") {
            let principal = PrincipalBuilder::from_object(principal)
                .and_then(PrincipalBuilder::build)
                .map_err(|error| ModelError::child("principal", error))?;
            builder = builder.set_principal(principal);
        }
        if let Some(members) = fields::defined(map, "members") {
            let items = fields::array_field(members, "members", "Principal")?;
            let members = items
                .iter()
                .map(|item| {
                    PrincipalBuilder::from_object(item)
                        .and_then(PrincipalBuilder::build)
                        .map_err(|error| ModelError::child("members", error))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_members(members);
        }
        if let Some(roles) = fields::defined(map, "roles") {
            let items = fields::array_field(roles, "roles", "Role")?;
            let roles = items
                .iter()
                .map(|item| {
                    RoleBuilder::from_object(item)
                        .and_then(RoleBuilder::build)
                        .map_err(|error| ModelError::child("roles", error))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_roles(roles);
        }
        if let Some(email_domains) = fields::defined(map, "emailDomains") {
            builder = builder
                .set_email_domains(fields::string_array_field(email_domains, "emailDomains")?)?;
        }
        if let Some(apps) = fields::defined(map, "apps") {
            builder = builder.set_apps(fields::uuid_array_field(apps, "apps")?);
        }
        if let Some(partitions) = fields::defined(map, "partitions") {
            let items = fields::array_field(partitions, "partitions", "integers")?;
            let partitions = items
                .iter()
                .map(|item| fields::int_field(item, "partitions").map(|p| p as i32))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_partitions(partitions);
        }
        if let Some(grants) = fields::defined(map, "grants") {
            let entries = fields::as_object(grants, "grants")?;
            let mut parsed = BTreeMap::new();
            for (key, raw_grant) in entries {
                let role_id = fields::parse_uuid(key, "grants")?;
                let grant = GrantBuilder::from_object(raw_grant)
                    .and_then(GrantBuilder::build)
                    .map_err(|error| ModelError::child("grants", error))?;
                parsed.insert(role_id, grant);
            }
            builder = builder.set_grants(parsed);
        }
        if let Some(connections) = fields::defined(map, "connections") {
            builder = builder
                .set_connections(fields::string_array_field(connections, "connections")?)?;
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Result<Self, ModelError> {
        let title = title.into();
        if !validation::is_non_empty_string(&title) {
            return Err(ModelError::EmptyString("title"));
        }
        self.title = Some(title);
        Ok(self)
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn set_members(mut self, members: Vec<Principal>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn set_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    pub fn set_email_domains(
        mut self,
        email_domains: impl IntoIterator<Item = String>,
    ) -> Result<Self, ModelError> {
        let email_domains: Vec<String> = email_domains.into_iter().collect();
        if !email_domains.is_empty() && !validation::is_non_empty_string_array(&email_domains) {
            return Err(ModelError::InvalidArray {
                field: "emailDomains",
                expected: "non-empty strings",
            });
        }
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, email_domains);
        self.email_domains = Some(deduped);
        Ok(self)
    }

    pub fn set_apps(mut self, apps: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, apps);
        self.apps = Some(deduped);
        self
    }

    pub fn set_partitions(mut self, partitions: Vec<i32>) -> Self {
        self.partitions = Some(partitions);
        self
    }

    pub fn set_grants(mut self, grants: BTreeMap<Uuid, Grant>) -> Self {
        self.grants = Some(grants);
        self
    }

    pub fn set_connections(
        mut self,
        connections: impl IntoIterator<Item = String>,
    ) -> Result<Self, ModelError> {
        let connections: Vec<String> = connections.into_iter().collect();
        if !connections.is_empty() && !validation::is_non_empty_string_array(&connections) {
            return Err(ModelError::InvalidArray {
                field: "connections",
                expected: "non-empty strings",
            });
        }
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, connections);
        self.connections = Some(deduped);
        Ok(self)
    }

    pub fn build(self) -> Result<Organization, ModelError> {
        Ok(Organization {
            id: self.id,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            principal: self.principal.ok_or(ModelError::MissingField("principal"))?,
            members: self.members.unwrap_or_default(),
            roles: self.roles.unwrap_or_default(),
            email_domains: self.email_domains.unwrap_or_default(),
            apps: self.apps.unwrap_or_default(),
            partitions: self.partitions,
            grants: self.grants.unwrap_or_default(),
            connections: self.connections.unwrap_or_default(),
        })
    }
}

impl From<&Organization> for OrganizationBuilder {
    fn from(organization: &Organization) -> Self {
        Self {
            id: organization.id,
            title: Some(organization.title.clone()),
            description: organization.description.clone(),
            principal: Some(organization.principal.clone()),
            members: Some(organization.members.clone()),
            roles: Some(organization.roles.clone()),
            email_domains: Some(organization.email_domains.clone()),
            apps: Some(organization.apps.clone()),
            partitions: organization.partitions.clone(),
            grants: Some(organization.grants.clone()),
            connections: Some(organization.connections.clone()),
        }
    }
}
