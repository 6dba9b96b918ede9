use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{fields, model_error::ModelError, validation},
    types::permission_type::PermissionType,
};

/// A question for the authorization API: does the caller hold these
/// permissions on this aclKey path?
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheck {
    acl_key: Vec<Uuid>,
    permissions: Vec<PermissionType>,
}

impl AccessCheck {
    pub fn builder() -> AccessCheckBuilder {
        AccessCheckBuilder::new()
    }

    pub fn acl_key(&self) -> &[Uuid] {
        &self.acl_key
    }

    pub fn permissions(&self) -> &[PermissionType] {
        &self.permissions
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AccessCheckBuilder::from_object(value).and_then(AccessCheckBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid AccessCheck");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AccessCheckBuilder {
    acl_key: Option<Vec<Uuid>>,
    permissions: Option<Vec<PermissionType>>,
}

impl AccessCheckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "AccessCheck")?;
        let mut builder = Self::new();
        if let Some(acl_key) = fields::defined(map, "aclKey") {
            builder = builder.set_acl_key(fields::uuid_array_field(acl_key, "aclKey")?)?;
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

    pub fn set_acl_key(mut self, acl_key: Vec<Uuid>) -> Result<Self, ModelError> {
        if acl_key.is_empty() {
            return Err(ModelError::EmptyArray("aclKey"));
        }
        self.acl_key = Some(acl_key);
        Ok(self)
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

    pub fn build(self) -> Result<AccessCheck, ModelError> {
        Ok(AccessCheck {
            acl_key: self.acl_key.ok_or(ModelError::MissingField("aclKey"))?,
            permissions: self.permissions.unwrap_or_default(),
        })
    }
}

impl From<&AccessCheck> for AccessCheckBuilder {
    fn from(access_check: &AccessCheck) -> Self {
        Self {
            acl_key: Some(access_check.acl_key.clone()),
            permissions: Some(access_check.permissions.clone()),
        }
    }
}
