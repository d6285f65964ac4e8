//! Unit tests for ids, property values and the variable heuristic.
mod common;
use kumiki::graph::IdGenerator;
use kumiki::prelude::*;
use kumiki::vars::{LITERAL_SENTINEL, suggest_variables};

#[test]
fn id_generator_is_monotonic() {
    let mut ids = IdGenerator::new();
    assert_eq!(ids.next_node_id(), "node_0");
    assert_eq!(ids.next_node_id(), "node_1");
    assert_eq!(ids.next_edge_id(), "edge_0");
}

#[test]
fn id_generator_reseeds_past_restored_ids() {
    let mut ids = IdGenerator::new();
    ids.reseed_from(
        ["node_0", "node_4", "imported"].into_iter(),
        ["edge_2"].into_iter(),
    );
    assert_eq!(ids.next_node_id(), "node_5");
    assert_eq!(ids.next_edge_id(), "edge_3");
}

#[test]
fn id_generator_ignores_foreign_ids() {
    let mut ids = IdGenerator::new();
    ids.reseed_from(["alpha", "node_x"].into_iter(), [].into_iter());
    assert_eq!(ids.next_node_id(), "node_0");
}

#[test]
fn property_values_deserialize_untagged() {
    let text: PropertyValue = serde_json::from_str(r#""hello""#).expect("text");
    assert_eq!(text, PropertyValue::Text("hello".to_string()));

    let number: PropertyValue = serde_json::from_str("2.5").expect("number");
    assert_eq!(number, PropertyValue::Number(2.5));

    let flag: PropertyValue = serde_json::from_str("true").expect("bool");
    assert_eq!(flag, PropertyValue::Boolean(true));

    let args: PropertyValue =
        serde_json::from_str(r#"[{ "name": "x", "type": "i32" }]"#).expect("arguments");
    assert_eq!(
        args,
        PropertyValue::Arguments(vec![FunctionArgument {
            name: "x".to_string(),
            arg_type: "i32".to_string(),
        }])
    );

    let opaque: PropertyValue = serde_json::from_str(r#"{ "anything": 1 }"#).expect("opaque");
    assert!(matches!(opaque, PropertyValue::Opaque(_)));
}

#[test]
fn property_kind_matching() {
    let code = PropertyValue::Text("let x = 1;".to_string());
    assert!(code.matches(PropertyKind::Text));
    assert!(code.matches(PropertyKind::Code));
    assert!(!code.matches(PropertyKind::Number));

    assert!(PropertyValue::Number(1.0).matches(PropertyKind::Number));
    assert!(PropertyValue::Boolean(false).matches(PropertyKind::Boolean));
    assert!(PropertyValue::Arguments(vec![]).matches(PropertyKind::Arguments));
    assert!(!PropertyValue::Opaque(serde_json::json!(null)).matches(PropertyKind::Text));
}

#[test]
fn suggest_variables_finds_let_bindings_in_order() {
    let code = "let total = 0;\nlet mut count = 1;\nfor item in items { let total = 2; }";
    assert_eq!(suggest_variables(code), vec!["total", "count"]);
}

#[test]
fn suggest_variables_handles_code_without_bindings() {
    assert!(suggest_variables("println!(\"hi\");").is_empty());
    assert!(suggest_variables("").is_empty());
    assert_ne!(LITERAL_SENTINEL, "");
}

#[test]
fn suggest_variables_ignores_words_ending_in_let() {
    assert!(suggest_variables("violet x = 1;").is_empty());
    assert_eq!(suggest_variables("let outlet = 2; inlet y = 3;"), vec!["outlet"]);
}

#[test]
fn error_display_names_the_offenders() {
    let err = GraphError::InvalidReference {
        missing_id: "node_9".to_string(),
    };
    assert!(err.to_string().contains("node_9"));

    let err = GraphError::ProtectedNode {
        node_id: "node_0".to_string(),
    };
    assert!(err.to_string().contains("protected"));

    let err = DocumentError::DanglingEdge {
        edge_id: "edge_1".to_string(),
        missing_id: "node_7".to_string(),
    };
    assert!(err.to_string().contains("edge_1"));
    assert!(err.to_string().contains("node_7"));
}

#[test]
fn edge_data_omits_empty_variable_mapping() {
    let value = serde_json::to_value(EdgeData::default()).expect("json");
    assert_eq!(value["connectionType"], "simple");
    assert!(value.get("variableMapping").is_none());

    let mut mapping = AHashMap::new();
    mapping.insert("x".to_string(), "total".to_string());
    let value = serde_json::to_value(EdgeData {
        connection_type: ConnectionType::FunctionCall,
        variable_mapping: mapping,
    })
    .expect("json");
    assert_eq!(value["variableMapping"]["x"], "total");
}

#[test]
fn connection_type_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ConnectionType::FunctionCall).expect("json"),
        "\"function_call\""
    );
    assert_eq!(
        serde_json::to_string(&ConnectionType::Simple).expect("json"),
        "\"simple\""
    );
}
