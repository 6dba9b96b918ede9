use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{fields, model_error::ModelError, validation};

/// Combined length cap on `"{namespace}.{name}"`, imposed by the backend.
pub const FQN_MAX_LENGTH: usize = 63;

/// A namespace + name pair identifying a type, serialized over the wire as
/// an object and rendered as the dotted `"namespace.name"` string.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct FullyQualifiedName {
    namespace: String,
    name: String,
}

impl FullyQualifiedName {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let namespace = namespace.into();
        let name = name.into();
        if !validation::is_non_empty_string(&namespace) {
            return Err(ModelError::EmptyString("namespace"));
        }
        if !validation::is_non_empty_string(&name) {
            return Err(ModelError::EmptyString("name"));
        }
        let combined = namespace.len() + 1 + name.len();
        if combined > FQN_MAX_LENGTH {
            return Err(ModelError::FqnTooLong(combined));
        }
        Ok(Self { namespace, name })
    }

    /// Accepts the `{namespace, name}` object shape.
    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "FullyQualifiedName")?;
        let namespace = fields::defined(map, "namespace")
            .ok_or(ModelError::MissingField("namespace"))
            .and_then(|raw| fields::string_field(raw, "namespace"))?;
        let name = fields::defined(map, "name")
            .ok_or(ModelError::MissingField("name"))
            .and_then(|raw| fields::string_field(raw, "name"))?;
        Self::new(namespace, name)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        let attempt = match value {
            Value::String(raw) => raw.parse::<Self>(),
            _ => Self::from_object(value),
        };
        match attempt {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid FullyQualifiedName");
                false
            }
        }
    }

    pub fn is_valid_str(raw: &str) -> bool {
        Self::is_valid(&Value::String(raw.to_string()))
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl FromStr for FullyQualifiedName {
    type Err = ModelError;

    /// Parses `"namespace.name"`. The namespace may itself be dotted, so the
    /// split happens at the last dot.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (namespace, name) = raw
            .rsplit_once('.')
            .ok_or_else(|| ModelError::InvalidFqn(raw.to_string()))?;
        Self::new(namespace, name)
    }
}
