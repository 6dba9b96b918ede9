use std::collections::BTreeMap;

use lattice_sdk::models::{
    data_edge_key::{DataEdgeKey, DataEdgeKeyBuilder},
    data_graph::{DataGraph, DataGraphBuilder},
    entity_data_key::{EntityDataKey, EntityDataKeyBuilder},
    model_error::ModelError,
};
use serde_json::json;

use crate::support::{organization_id, property_type_id, PROPERTY_TYPE_ID};

fn entity_data_key() -> EntityDataKey {
    EntityDataKeyBuilder::new()
        .set_entity_set_id(organization_id())
        .set_entity_key_id(property_type_id())
        .build()
        .expect("valid entity data key")
}

#[test]
fn entity_data_key_requires_both_ids() {
    assert!(matches!(
        EntityDataKeyBuilder::new()
            .set_entity_set_id(organization_id())
            .build(),
        Err(ModelError::MissingField("entityKeyId"))
    ));
    assert!(EntityDataKey::is_valid(&entity_data_key().to_object()));
    assert!(!EntityDataKey::is_valid(
        &json!({ "entitySetId": "not-a-uuid", "entityKeyId": PROPERTY_TYPE_ID })
    ));
}

#[test]
fn data_edge_key_requires_all_three_endpoints() {
    let key = entity_data_key();
    assert!(matches!(
        DataEdgeKeyBuilder::new().set_src(key).set_dst(key).build(),
        Err(ModelError::MissingField("edge"))
    ));
    let edge = DataEdgeKeyBuilder::new()
        .set_src(key)
        .set_dst(key)
        .set_edge(key)
        .build()
        .expect("valid edge key");
    let rebuilt = DataEdgeKeyBuilder::from_object(&edge.to_object())
        .and_then(DataEdgeKeyBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, edge);
    assert!(DataEdgeKey::is_valid(&edge.to_object()));
}

#[test]
fn data_graph_requires_entities_and_defaults_associations() {
    assert!(matches!(
        DataGraphBuilder::new().build(),
        Err(ModelError::MissingField("entities"))
    ));

    let mut entities = BTreeMap::new();
    entities.insert(organization_id(), vec![json!({ "name": ["Ada"] })]);
    let graph = DataGraphBuilder::new()
        .set_entities(entities)
        .build()
        .expect("valid data graph");
    assert!(graph.associations().is_empty());
    assert_eq!(
        graph.to_object().get("associations"),
        Some(&json!({}))
    );
}

#[test]
fn data_graph_rejects_non_object_entity_payloads() {
    let raw = json!({
        "entities": { PROPERTY_TYPE_ID: ["not an object"] },
    });
    assert!(!DataGraph::is_valid(&raw));

    let raw = json!({
        "entities": { "not-a-uuid": [{ "name": ["Ada"] }] },
    });
    assert!(!DataGraph::is_valid(&raw));
}

#[test]
fn data_graph_round_trips_through_object_form() {
    let mut entities = BTreeMap::new();
    entities.insert(organization_id(), vec![json!({ "name": ["Ada"] })]);
    let mut associations = BTreeMap::new();
    associations.insert(
        property_type_id(),
        vec![json!({ "srcEntityIndex": 0, "dstEntityIndex": 1 })],
    );
    let graph = DataGraphBuilder::new()
        .set_entities(entities)
        .set_associations(associations)
        .build()
        .expect("valid data graph");
    let rebuilt = DataGraphBuilder::from_object(&graph.to_object())
        .and_then(DataGraphBuilder::build)
        .expect("round trip");
    assert_eq!(rebuilt, graph);
}
