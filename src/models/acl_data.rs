use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::{
        acl::{Acl, AclBuilder},
        fields,
        model_error::ModelError,
    },
    types::action_type::ActionType,
};

/// An ACL paired with the mutation to apply to it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AclData {
    acl: Acl,
    action: ActionType,
}

impl AclData {
    pub fn builder() -> AclDataBuilder {
        AclDataBuilder::new()
    }

    pub fn acl(&self) -> &Acl {
        &self.acl
    }

    pub fn action(&self) -> ActionType {
        self.action
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AclDataBuilder::from_object(value).and_then(AclDataBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid AclData");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AclDataBuilder {
    acl: Option<Acl>,
    action: Option<ActionType>,
}

impl AclDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "AclData")?;
        let mut builder = Self::new();
        if let Some(acl) = fields::defined(map, "acl") {
            let acl = AclBuilder::from_object(acl)
                .and_then(AclBuilder::build)
                .map_err(|error| ModelError::child("acl", error))?;
            builder = builder.set_acl(acl);
        }
        if let Some(action) = fields::defined(map, "action") {
            builder = builder.set_action(fields::enum_field(action, "ActionType")?);
        }
        Ok(builder)
    }

    pub fn set_acl(mut self, acl: Acl) -> Self {
        self.acl = Some(acl);
        self
    }

    pub fn set_action(mut self, action: ActionType) -> Self {
        self.action = Some(action);
        self
    }

    pub fn build(self) -> Result<AclData, ModelError> {
        Ok(AclData {
            acl: self.acl.ok_or(ModelError::MissingField("acl"))?,
            action: self.action.ok_or(ModelError::MissingField("action"))?,
        })
    }
}

impl From<&AclData> for AclDataBuilder {
    fn from(acl_data: &AclData) -> Self {
        Self {
            acl: Some(acl_data.acl.clone()),
            action: Some(acl_data.action),
        }
    }
}
