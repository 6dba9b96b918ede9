use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{fields, model_error::ModelError, validation};

/// A named collection of entities of one entity type.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    entity_type_id: Uuid,
    name: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    contacts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization_id: Option<Uuid>,
}

impl EntitySet {
    pub fn builder() -> EntitySetBuilder {
        EntitySetBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn entity_type_id(&self) -> Uuid {
        self.entity_type_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }

    pub fn linking(&self) -> Option<bool> {
        self.linking
    }

    pub fn external(&self) -> Option<bool> {
        self.external
    }

    pub fn organization_id(&self) -> Option<Uuid> {
        self.organization_id
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match EntitySetBuilder::from_object(value).and_then(EntitySetBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid EntitySet");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct EntitySetBuilder {
    id: Option<Uuid>,
    entity_type_id: Option<Uuid>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    contacts: Option<Vec<String>>,
    linking: Option<bool>,
    external: Option<bool>,
    organization_id: Option<Uuid>,
}

impl EntitySetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "EntitySet")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
        }
        if let Some(entity_type_id) = fields::defined(map, "entityTypeId") {
            builder =
                builder.set_entity_type_id(fields::uuid_field(entity_type_id, "entityTypeId")?);
        }
        if let Some(name) = fields::defined(map, "name") {
            builder = builder.set_name(fields::string_field(name, "name")?)?;
        }
        if let Some(title) = fields::defined(map, "title") {
            builder = builder.set_title(fields::string_field(title, "title")?)?;
        }
        if let Some(description) = fields::defined(map, "description") {
            builder = builder.set_description(fields::string_field(description, "description")?);
        }
        if let Some(contacts) = fields::defined(map, "contacts") {
            builder = builder.set_contacts(fields::string_array_field(contacts, "contacts")?)?;
        }
        if let Some(linking) = fields::defined(map, "linking") {
            builder = builder.set_linking(fields::bool_field(linking, "linking")?);
        }
        if let Some(external) = fields::defined(map, "external") {
            builder = builder.set_external(fields::bool_field(external, "external")?);
        }
        if let Some(organization_id) = fields::defined(map, "organizationId") {
            builder = builder
                .set_organization_id(fields::uuid_field(organization_id, "organizationId")?);
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_entity_type_id(mut self, entity_type_id: Uuid) -> Self {
        self.entity_type_id = Some(entity_type_id);
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if !validation::is_non_empty_string(&name) {
            return Err(ModelError::EmptyString("name"));
        }
        self.name = Some(name);
        Ok(self)
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

    pub fn set_contacts(
        mut self,
        contacts: impl IntoIterator<Item = String>,
    ) -> Result<Self, ModelError> {
        let contacts: Vec<String> = contacts.into_iter().collect();
        if !contacts.is_empty() && !validation::is_non_empty_string_array(&contacts) {
            return Err(ModelError::InvalidArray {
                field: "contacts",
                expected: "non-empty strings",
            });
        }
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, contacts);
        self.contacts = Some(deduped);
        Ok(self)
    }

    pub fn set_linking(mut self, linking: bool) -> Self {
        self.linking = Some(linking);
        self
    }

    pub fn set_external(mut self, external: bool) -> Self {
        self.external = Some(external);
        self
    }

    pub fn set_organization_id(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub fn build(self) -> Result<EntitySet, ModelError> {
        Ok(EntitySet {
            id: self.id,
            entity_type_id: self
                .entity_type_id
                .ok_or(ModelError::MissingField("entityTypeId"))?,
            name: self.name.ok_or(ModelError::MissingField("name"))?,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            contacts: self.contacts.unwrap_or_default(),
            linking: self.linking,
            external: self.external,
            organization_id: self.organization_id,
        })
    }
}

impl From<&EntitySet> for EntitySetBuilder {
    fn from(entity_set: &EntitySet) -> Self {
        Self {
            id: entity_set.id,
            entity_type_id: Some(entity_set.entity_type_id),
            name: Some(entity_set.name.clone()),
            title: Some(entity_set.title.clone()),
            description: entity_set.description.clone(),
            contacts: Some(entity_set.contacts.clone()),
            linking: entity_set.linking,
            external: entity_set.external,
            organization_id: entity_set.organization_id,
        }
    }
}
