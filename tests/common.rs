//! Common test utilities for building plugin catalogs and graphs.
use kumiki::prelude::*;

/// Creates a catalog covering the block types the editor ships with:
/// a protected entry-point container, a plain container, a code block,
/// a start marker and a function-call block.
#[allow(dead_code)]
pub fn test_registry() -> PluginRegistry {
    PluginRegistry::from_definitions(vec![
        PluginDefinition {
            id: "main-function".to_string(),
            name: "Main".to_string(),
            category: "structure".to_string(),
            icon: "📦".to_string(),
            description: "The program entry point".to_string(),
            properties: vec![
                text_property("label", "Name", "Main"),
                number_property("width", "Width", 400.0),
                number_property("height", "Height", 300.0),
            ],
            container: true,
            entry_point: true,
        },
        PluginDefinition {
            id: "function-definition".to_string(),
            name: "Function".to_string(),
            category: "structure".to_string(),
            icon: "ƒ".to_string(),
            description: "A function definition owning its body blocks".to_string(),
            properties: vec![
                text_property("label", "Name", "Function"),
                text_property("function_name", "Function name", "my_function"),
                PluginProperty {
                    name: "arguments".to_string(),
                    kind: PropertyKind::Arguments,
                    label: "Arguments".to_string(),
                    default: PropertyValue::Arguments(vec![]),
                    required: false,
                    multiline: false,
                },
                number_property("width", "Width", 400.0),
                number_property("height", "Height", 300.0),
            ],
            container: true,
            entry_point: false,
        },
        PluginDefinition {
            id: "code-block".to_string(),
            name: "Code".to_string(),
            category: "basic".to_string(),
            icon: "{}".to_string(),
            description: "A block of inline code".to_string(),
            properties: vec![
                text_property("label", "Name", "Code"),
                PluginProperty {
                    name: "code".to_string(),
                    kind: PropertyKind::Code,
                    label: "Code".to_string(),
                    default: PropertyValue::Text(String::new()),
                    required: false,
                    multiline: true,
                },
            ],
            container: false,
            entry_point: false,
        },
        PluginDefinition {
            id: "start-node".to_string(),
            name: "Start".to_string(),
            category: "basic".to_string(),
            icon: "▶".to_string(),
            description: "Marks the first block to execute".to_string(),
            properties: vec![text_property("label", "Name", "Start")],
            container: false,
            entry_point: false,
        },
        PluginDefinition {
            id: "call-function".to_string(),
            name: "Call".to_string(),
            category: "basic".to_string(),
            icon: "→".to_string(),
            description: "Calls a defined function".to_string(),
            properties: vec![
                text_property("label", "Name", "Call"),
                text_property("target_function", "Target function", ""),
            ],
            container: false,
            entry_point: false,
        },
    ])
}

#[allow(dead_code)]
pub fn text_property(name: &str, label: &str, default: &str) -> PluginProperty {
    PluginProperty {
        name: name.to_string(),
        kind: PropertyKind::Text,
        label: label.to_string(),
        default: PropertyValue::Text(default.to_string()),
        required: false,
        multiline: false,
    }
}

#[allow(dead_code)]
pub fn number_property(name: &str, label: &str, default: f64) -> PluginProperty {
    PluginProperty {
        name: name.to_string(),
        kind: PropertyKind::Number,
        label: label.to_string(),
        default: PropertyValue::Number(default),
        required: false,
        multiline: false,
    }
}

/// Builds a property map from literal pairs.
#[allow(dead_code)]
pub fn props(pairs: &[(&str, PropertyValue)]) -> AHashMap<String, PropertyValue> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Creates the scenario graph used across tests: a protected `main`
/// container at (50, 50), a `start` block inside it and a free-standing
/// code block, with `start -> code` connected.
///
/// Returns the store and the three node ids `(main, start, code)`.
#[allow(dead_code)]
pub fn scenario_graph(registry: &PluginRegistry) -> (GraphStore, String, String, String) {
    let mut store = GraphStore::new();

    let main = store
        .create_node(registry, "main-function", Position::new(50.0, 50.0), AHashMap::new())
        .expect("create main");
    let start = store
        .create_node(registry, "start-node", Position::new(100.0, 100.0), AHashMap::new())
        .expect("create start");
    let code = store
        .create_node(
            registry,
            "code-block",
            Position::new(600.0, 100.0),
            props(&[(
                "code",
                PropertyValue::Text("let x = 1;\nlet mut total = x + 1;".to_string()),
            )]),
        )
        .expect("create code block");

    // start sits inside the main container
    resolve_containment(&mut store, registry, &start).expect("containment");

    store
        .create_edge(&start, &code, EdgeData::default())
        .expect("create edge");

    (store, main, start, code)
}
