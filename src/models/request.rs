use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{fields, model_error::ModelError, validation},
    types::permission_type::PermissionType,
};

/// A permission request submitted for review, optionally with a free-form
/// justification.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    acl_key: Vec<Uuid>,
    permissions: Vec<PermissionType>,
    reason: String,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn acl_key(&self) -> &[Uuid] {
        &self.acl_key
    }

    pub fn permissions(&self) -> &[PermissionType] {
        &self.permissions
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match RequestBuilder::from_object(value).and_then(RequestBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Request");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RequestBuilder {
    acl_key: Option<Vec<Uuid>>,
    permissions: Option<Vec<PermissionType>>,
    reason: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Request")?;
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
        if let Some(reason) = fields::defined(map, "reason") {
            builder = builder.set_reason(fields::string_field(reason, "reason")?);
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

    pub fn set_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn build(self) -> Result<Request, ModelError> {
        Ok(Request {
            acl_key: self.acl_key.ok_or(ModelError::MissingField("aclKey"))?,
            permissions: self.permissions.unwrap_or_default(),
            reason: self.reason.unwrap_or_default(),
        })
    }
}

impl From<&Request> for RequestBuilder {
    fn from(request: &Request) -> Self {
        Self {
            acl_key: Some(request.acl_key.clone()),
            permissions: Some(request.permissions.clone()),
            reason: Some(request.reason.clone()),
        }
    }
}
