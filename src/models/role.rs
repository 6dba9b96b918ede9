use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    fields,
    model_error::ModelError,
    principal::{Principal, PrincipalBuilder},
    validation,
};

/// An organization role. `id` is server-assigned and absent on instances
/// drafted client-side.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    organization_id: Uuid,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    principal: Principal,
}

impl Role {
    pub fn builder() -> RoleBuilder {
        RoleBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
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

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match RoleBuilder::from_object(value).and_then(RoleBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Role");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RoleBuilder {
    id: Option<Uuid>,
    organization_id: Option<Uuid>,
    title: Option<String>,
    description: Option<String>,
    principal: Option<Principal>,
}

impl RoleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Role")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
        }
        if let Some(organization_id) = fields::defined(map, "organizationId") {
            builder =
                builder.set_organization_id(fields::uuid_field(organization_id, "organizationId")?);
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
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_organization_id(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
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

    pub fn build(self) -> Result<Role, ModelError> {
        Ok(Role {
            id: self.id,
            organization_id: self
                .organization_id
                .ok_or(ModelError::MissingField("organizationId"))?,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            principal: self.principal.ok_or(ModelError::MissingField("principal"))?,
        })
    }
}

impl From<&Role> for RoleBuilder {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            organization_id: Some(role.organization_id),
            title: Some(role.title.clone()),
            description: role.description.clone(),
            principal: Some(role.principal.clone()),
        }
    }
}
