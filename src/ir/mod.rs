//! Projection of the graph into the backend-agnostic IR consumed by the
//! external code-generation service.
//!
//! The compiler is a pure function of a store snapshot: no side effects, no
//! network, and no semantic validation of the result against the target
//! language (that belongs to the generator). Its only contract is a faithful,
//! lossless structural projection with UI-only fields stripped.

use crate::graph::{ConnectionType, GraphStore};
use crate::plugin::PropertyValue;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plugin type tag emitted for nodes that predate the plugin registry and
/// carry neither a plugin id nor a legacy `nodeType` property.
pub const LEGACY_PLUGIN_TYPE: &str = "legacy_code";

/// One IR node record, stripped of UI-only fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrNode {
    pub id: String,
    pub plugin_type: String,
    pub label: Option<String>,
    pub properties: Map<String, Value>,
    pub parent_id: Option<String>,
}

/// One IR connection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrConnection {
    pub from: String,
    pub to: String,
    pub connection_type: ConnectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_mapping: Option<AHashMap<String, String>>,
}

/// The complete IR for a flow; serializes byte-compatible with the compile
/// request body of the flow service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowIr {
    pub nodes: Vec<IrNode>,
    pub connections: Vec<IrConnection>,
}

/// Property keys promoted into dedicated IR fields and therefore excluded
/// from the emitted property map.
const PROMOTED_KEYS: [&str; 2] = ["label", "nodeType"];

/// Compiles a store snapshot into IR.
///
/// An input that violates the graph invariants (dangling edges, duplicate
/// ids) is a contract violation by the caller, not a runtime condition, so it
/// is only checked in debug builds.
pub fn compile(store: &GraphStore) -> FlowIr {
    debug_assert!(
        store.edges().iter().all(|e| {
            store.node(&e.source).is_some() && store.node(&e.target).is_some()
        }),
        "graph invariant violated: edge references a missing node"
    );

    let nodes = store
        .nodes()
        .iter()
        .map(|node| {
            let plugin_type = if !node.plugin_id.is_empty() {
                node.plugin_id.clone()
            } else {
                node.property("nodeType")
                    .and_then(PropertyValue::as_text)
                    .unwrap_or(LEGACY_PLUGIN_TYPE)
                    .to_string()
            };

            let mut properties = Map::new();
            for (name, value) in &node.properties {
                if PROMOTED_KEYS.contains(&name.as_str()) {
                    continue;
                }
                properties.insert(
                    name.clone(),
                    serde_json::to_value(value).unwrap_or(Value::Null),
                );
            }

            IrNode {
                id: node.id.clone(),
                plugin_type,
                label: node.label().map(String::from),
                properties,
                parent_id: node.parent_id.clone(),
            }
        })
        .collect();

    let connections = store
        .edges()
        .iter()
        .map(|edge| IrConnection {
            from: edge.source.clone(),
            to: edge.target.clone(),
            connection_type: edge.data.connection_type,
            variable_mapping: match edge.data.connection_type {
                ConnectionType::FunctionCall => Some(edge.data.variable_mapping.clone()),
                ConnectionType::Simple => None,
            },
        })
        .collect();

    FlowIr { nodes, connections }
}
