use std::collections::BTreeMap;

use lattice_sdk::{
    models::{
        app::{App, AppBuilder},
        association_type::{AssociationType, AssociationTypeBuilder},
        entity_set::{EntitySet, EntitySetBuilder},
        entity_type::{EntityType, EntityTypeBuilder},
        fqn::FullyQualifiedName,
        model_error::ModelError,
        property_type::{PropertyType, PropertyTypeBuilder},
        schema::{Schema, SchemaBuilder},
    },
    types::{analyzer_type::AnalyzerType, index_type::IndexType},
};
use serde_json::json;

use crate::support::{
    name_property_type, organization_id, person_entity_type, property_type_id, role_id,
    PROPERTY_TYPE_ID,
};

#[test]
fn property_type_requires_type_title_and_datatype() {
    assert!(matches!(
        PropertyTypeBuilder::new().build(),
        Err(ModelError::MissingField("type"))
    ));
    let result = PropertyTypeBuilder::new()
        .set_type(FullyQualifiedName::new("general", "name").expect("valid fqn"))
        .set_title("Name")
        .expect("valid title")
        .build();
    assert!(matches!(result, Err(ModelError::MissingField("datatype"))));
}

#[test]
fn property_type_omits_unset_optionals() {
    let object = name_property_type().to_object();
    assert!(object.get("pii").is_none());
    assert!(object.get("analyzer").is_none());
    assert!(object.get("indexType").is_none());
    assert!(object.get("enumValues").is_none());
    assert_eq!(object.get("schemas"), Some(&json!([])));
}

#[test]
fn property_type_keeps_explicitly_set_optionals() {
    let property_type = PropertyTypeBuilder::from(&name_property_type())
        .set_pii(false)
        .set_analyzer(AnalyzerType::Standard)
        .set_index_type(IndexType::Btree)
        .build()
        .expect("valid property type");
    let object = property_type.to_object();
    assert_eq!(object.get("pii"), Some(&json!(false)));
    assert_eq!(object.get("analyzer"), Some(&json!("STANDARD")));
    assert_eq!(object.get("indexType"), Some(&json!("BTREE")));
}

#[test]
fn property_type_round_trips_through_object_form() {
    let property_type = name_property_type();
    let rebuilt = PropertyTypeBuilder::from_object(&property_type.to_object())
        .and_then(PropertyTypeBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, property_type);
    assert!(PropertyType::is_valid(&property_type.to_object()));
}

#[test]
fn entity_type_key_and_properties_deduplicate() {
    let entity_type = EntityTypeBuilder::new()
        .set_type(FullyQualifiedName::new("general", "person").expect("valid fqn"))
        .set_title("Person")
        .expect("valid title")
        .set_properties([property_type_id(), property_type_id()])
        .build()
        .expect("valid entity type");
    assert_eq!(entity_type.properties().len(), 1);
}

#[test]
fn entity_type_shards_must_stay_in_range() {
    let builder = EntityTypeBuilder::new()
        .set_type(FullyQualifiedName::new("general", "person").expect("valid fqn"))
        .set_title("Person")
        .expect("valid title");
    assert!(matches!(
        builder.set_shards(20),
        Err(ModelError::OutOfRange { field: "shards", .. })
    ));
}

#[test]
fn entity_type_rejects_invalid_property_tags() {
    let raw = json!({
        "type": { "namespace": "general", "name": "person" },
        "title": "Person",
        "propertyTags": { "not-a-uuid": ["PRIMARY KEY"] },
    });
    assert!(!EntityType::is_valid(&raw));

    let mut tags = BTreeMap::new();
    tags.insert(property_type_id(), vec!["".to_string()]);
    let result = EntityTypeBuilder::from(&person_entity_type()).set_property_tags(tags);
    assert!(result.is_err());
}

#[test]
fn entity_type_round_trips_through_object_form() {
    let entity_type = person_entity_type();
    let rebuilt = EntityTypeBuilder::from_object(&entity_type.to_object())
        .and_then(EntityTypeBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, entity_type);
}

#[test]
fn association_type_requires_entity_type_and_bidirectional() {
    assert!(matches!(
        AssociationTypeBuilder::new()
            .set_bidirectional(false)
            .build(),
        Err(ModelError::MissingField("entityType"))
    ));
    assert!(matches!(
        AssociationTypeBuilder::new()
            .set_entity_type(person_entity_type())
            .build(),
        Err(ModelError::MissingField("bidirectional"))
    ));
}

#[test]
fn association_type_round_trips_with_endpoints() {
    let association_type = AssociationTypeBuilder::new()
        .set_entity_type(person_entity_type())
        .set_src([property_type_id()])
        .set_bidirectional(true)
        .build()
        .expect("valid association type");
    let rebuilt = AssociationTypeBuilder::from_object(&association_type.to_object())
        .and_then(AssociationTypeBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, association_type);
    assert!(AssociationType::is_valid(&association_type.to_object()));
}

#[test]
fn entity_set_requires_entity_type_id_name_and_title() {
    assert!(matches!(
        EntitySetBuilder::new().build(),
        Err(ModelError::MissingField("entityTypeId"))
    ));
    let raw = json!({
        "entityTypeId": PROPERTY_TYPE_ID,
        "name": "people",
        "title": "People",
    });
    assert!(EntitySet::is_valid(&raw));
    let missing_name = json!({
        "entityTypeId": PROPERTY_TYPE_ID,
        "title": "People",
    });
    assert!(!EntitySet::is_valid(&missing_name));
}

#[test]
fn entity_set_contacts_deduplicate_and_reject_empty_entries() {
    let builder = EntitySetBuilder::new()
        .set_entity_type_id(property_type_id())
        .set_name("people")
        .expect("valid name")
        .set_title("People")
        .expect("valid title");
    let entity_set = builder
        .set_contacts(["a@example.com".to_string(), "a@example.com".to_string()])
        .expect("valid contacts")
        .build()
        .expect("valid entity set");
    assert_eq!(entity_set.contacts().len(), 1);

    assert!(EntitySetBuilder::new()
        .set_contacts(["".to_string()])
        .is_err());
}

#[test]
fn entity_set_round_trips_through_object_form() {
    let entity_set = EntitySetBuilder::new()
        .set_id(role_id())
        .set_entity_type_id(property_type_id())
        .set_name("people")
        .expect("valid name")
        .set_title("People")
        .expect("valid title")
        .set_description("Every known person")
        .set_contacts(["a@example.com".to_string()])
        .expect("valid contacts")
        .set_linking(false)
        .set_external(true)
        .set_organization_id(organization_id())
        .build()
        .expect("valid entity set");
    let rebuilt = EntitySetBuilder::from_object(&entity_set.to_object())
        .and_then(EntitySetBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, entity_set);
    assert!(EntitySet::is_valid(&entity_set.to_object()));
}

#[test]
fn schema_requires_fqn_and_backfills_type_lists() {
    assert!(matches!(
        SchemaBuilder::new().build(),
        Err(ModelError::MissingField("fqn"))
    ));
    let schema = SchemaBuilder::new()
        .set_fqn(FullyQualifiedName::new("general", "core").expect("valid fqn"))
        .build()
        .expect("valid schema");
    assert!(schema.entity_types().is_empty());
    assert!(schema.property_types().is_empty());
}

#[test]
fn schema_validates_nested_types_through_their_builders() {
    let schema = SchemaBuilder::new()
        .set_fqn(FullyQualifiedName::new("general", "core").expect("valid fqn"))
        .set_entity_types(vec![person_entity_type()])
        .set_property_types(vec![name_property_type()])
        .build()
        .expect("valid schema");
    let rebuilt = SchemaBuilder::from_object(&schema.to_object())
        .and_then(SchemaBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, schema);

    let raw = json!({
        "fqn": { "namespace": "general", "name": "core" },
        "propertyTypes": [{ "title": "missing type and datatype" }],
    });
    assert!(!Schema::is_valid(&raw));
}

#[test]
fn app_requires_name_title_and_url() {
    assert!(matches!(
        AppBuilder::new().build(),
        Err(ModelError::MissingField("name"))
    ));
    let app = AppBuilder::new()
        .set_name("profiles")
        .expect("valid name")
        .set_title("Profiles")
        .expect("valid title")
        .set_url("https://apps.example.com/profiles")
        .expect("valid url")
        .set_app_type_ids([property_type_id(), property_type_id()])
        .build()
        .expect("valid app");
    assert_eq!(app.app_type_ids().len(), 1);
    let object = app.to_object();
    assert!(object.get("id").is_none());
    assert!(object.get("description").is_none());
}

#[test]
fn app_round_trips_through_object_form() {
    let app = AppBuilder::new()
        .set_id(role_id())
        .set_name("profiles")
        .expect("valid name")
        .set_title("Profiles")
        .expect("valid title")
        .set_description("Member profile browser")
        .set_url("https://apps.example.com/profiles")
        .expect("valid url")
        .set_app_type_ids([property_type_id()])
        .build()
        .expect("valid app");
    let rebuilt = AppBuilder::from_object(&app.to_object())
        .and_then(AppBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, app);
    assert!(App::is_valid(&app.to_object()));
}
