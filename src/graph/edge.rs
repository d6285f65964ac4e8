use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Classification of a connection between two blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Plain execution-order link.
    #[default]
    Simple,
    /// The target is invoked as a function; the edge carries argument
    /// bindings in its variable mapping.
    FunctionCall,
}

/// The mutable payload of an edge.
///
/// `variable_mapping` maps a target argument name to a source expression: a
/// variable name found in the source node, or a literal value collected by
/// the editor. It is only meaningful for `FunctionCall` connections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    #[serde(default)]
    pub connection_type: ConnectionType,
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub variable_mapping: AHashMap<String, String>,
}

impl EdgeData {
    pub fn is_default(&self) -> bool {
        self.connection_type == ConnectionType::Simple && self.variable_mapping.is_empty()
    }
}

/// A connection between two blocks, identified by the ids of its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}
