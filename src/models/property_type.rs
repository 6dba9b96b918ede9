use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{fields, fqn::FullyQualifiedName, model_error::ModelError, validation},
    types::{analyzer_type::AnalyzerType, index_type::IndexType},
};

/// EDM property type definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(rename = "type")]
    type_fqn: FullyQualifiedName,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    datatype: String,
    schemas: Vec<FullyQualifiedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pii: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multi_valued: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analyzer: Option<AnalyzerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index_type: Option<IndexType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<String>>,
}

impl PropertyType {
    pub fn builder() -> PropertyTypeBuilder {
        PropertyTypeBuilder::new()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn type_fqn(&self) -> &FullyQualifiedName {
        &self.type_fqn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn schemas(&self) -> &[FullyQualifiedName] {
        &self.schemas
    }

    pub fn pii(&self) -> Option<bool> {
        self.pii
    }

    pub fn multi_valued(&self) -> Option<bool> {
        self.multi_valued
    }

    pub fn analyzer(&self) -> Option<AnalyzerType> {
        self.analyzer
    }

    pub fn index_type(&self) -> Option<IndexType> {
        self.index_type
    }

    pub fn enum_values(&self) -> Option<&[String]> {
        self.enum_values.as_deref()
    }

    pub fn to_object(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_valid(value: &Value) -> bool {
        match PropertyTypeBuilder::from_object(value).and_then(PropertyTypeBuilder::build) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, "invalid PropertyType");
                false
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct PropertyTypeBuilder {
    id: Option<Uuid>,
    type_fqn: Option<FullyQualifiedName>,
    title: Option<String>,
    description: Option<String>,
    datatype: Option<String>,
    schemas: Option<Vec<FullyQualifiedName>>,
    pii: Option<bool>,
    multi_valued: Option<bool>,
    analyzer: Option<AnalyzerType>,
    index_type: Option<IndexType>,
    enum_values: Option<Vec<String>>,
}

impl PropertyTypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(value: &Value) -> Result<Self, ModelError> {
        let map = fields::as_object(value, "PropertyType")?;
        let mut builder = Self::new();
        if let Some(id) = fields::defined(map, "id") {
            builder = builder.set_id(fields::uuid_field(id, "id")?);
        }
        if let Some(type_fqn) = fields::defined(map, "type") {
            let type_fqn = FullyQualifiedName::from_object(type_fqn)
                .map_err(|error| ModelError::child("type", error))?;
            builder = builder.set_type(type_fqn);
        }
        if let Some(title) = fields::defined(map, "title") {
            builder = builder.set_title(fields::string_field(title, "title")?)?;
        }
        if let Some(description) = fields::defined(map, "description") {
            builder = builder.set_description(fields::string_field(description, "description")?);
        }
        if let Some(datatype) = fields::defined(map, "datatype") {
            builder = builder.set_datatype(fields::string_field(datatype, "datatype")?)?;
        }
        if let Some(schemas) = fields::defined(map, "schemas") {
            builder = builder.set_schemas(parse_schemas(schemas)?);
        }
        if let Some(pii) = fields::defined(map, "pii") {
            builder = builder.set_pii(fields::bool_field(pii, "pii")?);
        }
        if let Some(multi_valued) = fields::defined(map, "multiValued") {
            builder = builder.set_multi_valued(fields::bool_field(multi_valued, "multiValued")?);
        }
        if let Some(analyzer) = fields::defined(map, "analyzer") {
            builder = builder.set_analyzer(fields::enum_field(analyzer, "AnalyzerType")?);
        }
        if let Some(index_type) = fields::defined(map, "indexType") {
            builder = builder.set_index_type(fields::enum_field(index_type, "IndexType")?);
        }
        if let Some(enum_values) = fields::defined(map, "enumValues") {
            builder =
                builder.set_enum_values(fields::string_array_field(enum_values, "enumValues")?)?;
        }
        Ok(builder)
    }

    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_type(mut self, type_fqn: FullyQualifiedName) -> Self {
        self.type_fqn = Some(type_fqn);
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

    pub fn set_datatype(mut self, datatype: impl Into<String>) -> Result<Self, ModelError> {
        let datatype = datatype.into();
        if !validation::is_non_empty_string(&datatype) {
            return Err(ModelError::EmptyString("datatype"));
        }
        self.datatype = Some(datatype);
        Ok(self)
    }

    pub fn set_schemas(mut self, schemas: Vec<FullyQualifiedName>) -> Self {
        self.schemas = Some(schemas);
        self
    }

    pub fn set_pii(mut self, pii: bool) -> Self {
        self.pii = Some(pii);
        self
    }

    pub fn set_multi_valued(mut self, multi_valued: bool) -> Self {
        self.multi_valued = Some(multi_valued);
        self
    }

    pub fn set_analyzer(mut self, analyzer: AnalyzerType) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn set_index_type(mut self, index_type: IndexType) -> Self {
        self.index_type = Some(index_type);
        self
    }

    pub fn set_enum_values(
        mut self,
        enum_values: impl IntoIterator<Item = String>,
    ) -> Result<Self, ModelError> {
        let enum_values: Vec<String> = enum_values.into_iter().collect();
        if !enum_values.is_empty() && !validation::is_non_empty_string_array(&enum_values) {
            return Err(ModelError::InvalidArray {
                field: "enumValues",
                expected: "non-empty strings",
            });
        }
        let mut deduped = Vec::new();
        validation::extend_unique(&mut deduped, enum_values);
        self.enum_values = Some(deduped);
        Ok(self)
    }

    pub fn build(self) -> Result<PropertyType, ModelError> {
        Ok(PropertyType {
            id: self.id,
            type_fqn: self.type_fqn.ok_or(ModelError::MissingField("type"))?,
            title: self.title.ok_or(ModelError::MissingField("title"))?,
            description: self.description,
            datatype: self.datatype.ok_or(ModelError::MissingField("datatype"))?,
            schemas: self.schemas.unwrap_or_default(),
            pii: self.pii,
            multi_valued: self.multi_valued,
            analyzer: self.analyzer,
            index_type: self.index_type,
            enum_values: self.enum_values,
        })
    }
}

pub(crate) fn parse_schemas(value: &Value) -> Result<Vec<FullyQualifiedName>, ModelError> {
    let items = fields::array_field(value, "schemas", "FullyQualifiedName")?;
    items
        .iter()
        .map(|item| {
            FullyQualifiedName::from_object(item)
                .map_err(|error| ModelError::child("schemas", error))
        })
        .collect()
}

impl From<&PropertyType> for PropertyTypeBuilder {
    fn from(property_type: &PropertyType) -> Self {
        Self {
            id: property_type.id,
            type_fqn: Some(property_type.type_fqn.clone()),
            title: Some(property_type.title.clone()),
            description: property_type.description.clone(),
            datatype: Some(property_type.datatype.clone()),
            schemas: Some(property_type.schemas.clone()),
            pii: property_type.pii,
            multi_valued: property_type.multi_valued,
            analyzer: property_type.analyzer,
            index_type: property_type.index_type,
            enum_values: property_type.enum_values.clone(),
        }
    }
}
