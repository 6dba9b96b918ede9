use lattice_sdk::models::{fqn::FullyQualifiedName, model_error::ModelError};
use serde_json::json;

use crate::support::data_fqn;

#[test]
fn builds_from_namespace_and_name() {
    let fqn = data_fqn();
    assert_eq!(fqn.namespace(), "OL");
    assert_eq!(fqn.name(), "DATA");
    assert_eq!(fqn.to_string(), "OL.DATA");
}

#[test]
fn parses_dotted_string_to_equal_instance() {
    let parsed: FullyQualifiedName = "OL.DATA".parse().expect("valid fqn string");
    assert_eq!(parsed, data_fqn());
}

#[test]
fn splits_dotted_namespace_at_last_dot() {
    let parsed: FullyQualifiedName = "com.example.general.person".parse().expect("valid fqn");
    assert_eq!(parsed.namespace(), "com.example.general");
    assert_eq!(parsed.name(), "person");
}

#[test]
fn builds_from_object_shape() {
    let fqn = FullyQualifiedName::from_object(&json!({ "namespace": "OL", "name": "DATA" }))
        .expect("valid fqn object");
    assert_eq!(fqn, data_fqn());
}

#[test]
fn rejects_empty_namespace_and_name() {
    assert!(matches!(
        FullyQualifiedName::new("", "DATA"),
        Err(ModelError::EmptyString("namespace"))
    ));
    assert!(matches!(
        FullyQualifiedName::new("OL", ""),
        Err(ModelError::EmptyString("name"))
    ));
}

#[test]
fn enforces_63_character_cap_inclusive() {
    // 58 + 1 + 4 = 63, right at the cap.
    let namespace = "n".repeat(58);
    assert!(FullyQualifiedName::new(namespace.as_str(), "name").is_ok());

    // 59 + 1 + 4 = 64, one over.
    let namespace = "n".repeat(59);
    match FullyQualifiedName::new(namespace.as_str(), "name") {
        Err(ModelError::FqnTooLong(length)) => assert_eq!(length, 64),
        other => panic!("expected FqnTooLong, got {other:?}"),
    }
}

#[test]
fn is_valid_accepts_both_input_shapes() {
    assert!(FullyQualifiedName::is_valid_str("OL.DATA"));
    assert!(FullyQualifiedName::is_valid(
        &json!({ "namespace": "OL", "name": "DATA" })
    ));
    assert!(!FullyQualifiedName::is_valid_str("no-dot"));
    assert!(!FullyQualifiedName::is_valid(&json!({ "namespace": "OL" })));
    assert!(!FullyQualifiedName::is_valid(&json!(42)));
}

#[test]
fn serializes_as_namespace_name_object() {
    assert_eq!(
        data_fqn().to_object(),
        json!({ "namespace": "OL", "name": "DATA" })
    );
}
