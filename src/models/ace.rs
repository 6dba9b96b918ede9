use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::{
        fields,
        model_error::ModelError,
        principal::{Principal, PrincipalBuilder},
        validation,
    },
    types::permission_type::PermissionType,
};

/// Access control entry: one principal and the permissions granted to it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Ace {
    principal: Principal,
    permissions: Vec<PermissionType>,
}

impl Ace {
    pub fn builder() -> AceBuilder {
        AceBuilder::new()
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn permissions(&self) -> &[PermissionType] {
        &self.permissions
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AceBuilder::from_object(value).and_then(AceBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Ace");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AceBuilder {
    principal: Option<Principal>,
    permissions: Option<Vec<PermissionType>>,
}

impl AceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Ace")?;
        let mut builder = Self::new();
        if let Some(principal) = fields::defined(map, "principal") {
            let principal = PrincipalBuilder::from_object(principal)
                .and_then(PrincipalBuilder::build)
                .map_err(|error| ModelError::child("principal", error))?;
            builder = builder.set_principal(principal);
        }
        if let Some(permissions) = fields::defined(map, "permissions") {
            let items = fields::array_field(permissions, "permissions", "PermissionType")?;
            let permissions = items
                .iter()
                .map(|item| fields::enum_field(item, "PermissionType"))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_permissions(permissions);
        }
        Ok(builder)
    }

    pub fn set_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn set_permissions(
        mut self,
        permissions: impl IntoIterator<Item = PermissionType>,
    ) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, permissions);
        self.permissions = Some(deduped);
        self
    }

    pub fn build(self) -> Result<Ace, ModelError> {
        Ok(Ace {
            principal: self.principal.ok_or(ModelError::MissingField("principal"))?,
            permissions: self.permissions.unwrap_or_default(),
        })
    }
}

impl From<&Ace> for AceBuilder {
    fn from(ace: &Ace) -> Self {
        Self {
            principal: Some(ace.principal.clone()),
            permissions: Some(ace.permissions.clone()),
        }
    }
}
