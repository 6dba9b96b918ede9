use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{
    ace::{Ace, AceBuilder},
    fields,
    model_error::ModelError,
};

/// Access control list: the entries attached to one securable object,
/// addressed by its aclKey path.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acl {
    acl_key: Vec<Uuid>,
    aces: Vec<Ace>,
}

impl Acl {
    pub fn builder() -> AclBuilder {
        AclBuilder::new()
    }

    pub fn acl_key(&self) -> &[Uuid] {
        &self.acl_key
    }

    pub fn aces(&self) -> &[Ace] {
        &self.aces
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AclBuilder::from_object(value).and_then(AclBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid Acl");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AclBuilder {
    acl_key: Option<Vec<Uuid>>,
    aces: Option<Vec<Ace>>,
}

impl AclBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "Acl")?;
        let mut builder = Self::new();
        if let Some(acl_key) = fields::defined(map, "aclKey") {
            builder = builder.set_acl_key(fields::uuid_array_field(acl_key, "aclKey")?);
        }
        if let Some(aces) = fields::defined(map, "aces") {
            let items = fields::array_field(aces, "aces", "Ace")?;
            let aces = items
                .iter()
                .map(|item| {
                    AceBuilder::from_object(item)
                        .and_then(AceBuilder::build)
                        .map_err(|error| ModelError::child("aces", error))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.set_aces(aces);
        }
        Ok(builder)
    }

    pub fn set_acl_key(mut self, acl_key: Vec<Uuid>) -> Self {
        self.acl_key = Some(acl_key);
        self
    }

    pub fn set_aces(mut self, aces: Vec<Ace>) -> Self {
        self.aces = Some(aces);
        self
    }

    pub fn build(self) -> Result<Acl, ModelError> {
        Ok(Acl {
            acl_key: self.acl_key.unwrap_or_default(),
            aces: self.aces.unwrap_or_default(),
        })
    }
}

impl From<&Acl> for AclBuilder {
    fn from(acl: &Acl) -> Self {
        Self {
            acl_key: Some(acl.acl_key.clone()),
            aces: Some(acl.aces.clone()),
        }
    }
}
