use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::{fields, model_error::ModelError, validation};

/// An installable application definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    name: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    url: String,
    app_type_ids: Vec<Uuid>,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
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

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn app_type_ids(&self) -> &[Uuid] {
        &self.app_type_ids
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match AppBuilder::from_object(value).and_then(AppBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid App");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AppBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    app_type_ids: Option<Vec<Uuid>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "App")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
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
        if let Some(url) = fields::defined(map, "url") {
            builder = builder.set_url(fields::string_field(url, "url")?)?;
        }
        if let Some(app_type_ids) = fields::defined(map, "appTypeIds") {
            builder = builder.set_app_type_ids(fields::uuid_array_field(app_type_ids, "appTypeIds")?);
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
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

    pub fn set_url(mut self, url: impl Into<String>) -> Result<Self, ModelError> {
        let url = url.into();
        if !validation::is_non_empty_string(&url) {
            return Err(ModelError::EmptyString("url"));
        }
        self.url = Some(url);
        Ok(self)
    }

    pub fn set_app_type_ids(mut self, app_type_ids: impl IntoIterator<Item = Uuid>) -> Self {
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, app_type_ids);
        self.app_type_ids = Some(deduped);
        self
    }

    pub fn build(self) -> Result<App, ModelError> {
        Ok(App {
            id: self.id,
            name: self.name.ok_or(ModelError::MissingField("name"))?,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            url: self.url.ok_or(ModelError::MissingField("url"))?,
            app_type_ids: self.app_type_ids.unwrap_or_default(),
        })
    }
}

impl From<&App> for AppBuilder {
    fn from(app: &App) -> Self {
        Self {
            id: app.id,
            name: Some(app.name.clone()),
            title: Some(app.title.clone()),
            description: app.description.clone(),
            url: Some(app.url.clone()),
            app_type_ids: Some(app.app_type_ids.clone()),
        }
    }
}
