//! The persisted `.flow.json` document format and its round-trip with the
//! Graph Store.
//!
//! Loading is atomic: a document is parsed and validated in full before the
//! open graph is replaced, so a malformed file never disturbs the current
//! session.

use crate::error::DocumentError;
use crate::graph::{Edge, EdgeData, GraphStore, Node, Position};
use crate::plugin::{PluginRegistry, PropertyValue};
use ahash::{AHashMap, AHashSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The document format version this build reads and writes.
pub const DOCUMENT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// A node snapshot as persisted: relative position and parent reference are
/// stored exactly as the Graph Store holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub id: String,
    pub plugin_id: String,
    pub position: Position,
    pub data: AHashMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

/// The persisted unit: a complete, versioned flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub nodes: Vec<DocumentNode>,
    pub edges: Vec<DocumentEdge>,
}

impl FlowDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::MalformedJson(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::MalformedJson(e.to_string()))
    }
}

/// Captures the store into a document.
///
/// `modified` is stamped with the current time; `created` is carried over
/// from the document the graph was loaded from, or set to now for a graph
/// born in this session. Edge payloads that are entirely default are omitted.
pub fn serialize(store: &GraphStore, name: &str) -> FlowDocument {
    let now = Utc::now();
    FlowDocument {
        version: DOCUMENT_VERSION.to_string(),
        metadata: DocumentMetadata {
            name: name.to_string(),
            created: store.created_at().unwrap_or(now),
            modified: now,
        },
        nodes: store
            .nodes()
            .iter()
            .map(|node| DocumentNode {
                id: node.id.clone(),
                plugin_id: node.plugin_id.clone(),
                position: node.position,
                data: node.properties.clone(),
                parent_node: node.parent_id.clone(),
            })
            .collect(),
        edges: store
            .edges()
            .iter()
            .map(|edge| DocumentEdge {
                id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                data: if edge.data.is_default() {
                    None
                } else {
                    Some(edge.data.clone())
                },
            })
            .collect(),
    }
}

/// Validates a document and atomically replaces the store's contents with it.
///
/// On any validation failure the store is left untouched. On success the id
/// generator is reseeded past the restored ids and the selection is cleared.
pub fn load(
    store: &mut GraphStore,
    registry: &PluginRegistry,
    document: &FlowDocument,
) -> Result<(), DocumentError> {
    if document.version != DOCUMENT_VERSION {
        return Err(DocumentError::UnsupportedVersion(document.version.clone()));
    }

    let mut seen = AHashSet::new();
    for node in &document.nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(DocumentError::DuplicateNodeId(node.id.clone()));
        }
    }

    for node in &document.nodes {
        if let Some(parent_id) = &node.parent_node {
            if parent_id == &node.id {
                return Err(DocumentError::InvalidParent {
                    node_id: node.id.clone(),
                    parent_id: parent_id.clone(),
                    message: "a node cannot contain itself".to_string(),
                });
            }
            let parent = document
                .nodes
                .iter()
                .find(|n| &n.id == parent_id)
                .ok_or_else(|| DocumentError::InvalidParent {
                    node_id: node.id.clone(),
                    parent_id: parent_id.clone(),
                    message: "parent does not exist".to_string(),
                })?;
            if parent.parent_node.is_some() {
                return Err(DocumentError::InvalidParent {
                    node_id: node.id.clone(),
                    parent_id: parent_id.clone(),
                    message: "containers do not nest".to_string(),
                });
            }
        }
    }

    for edge in &document.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !seen.contains(endpoint.as_str()) {
                return Err(DocumentError::DanglingEdge {
                    edge_id: edge.id.clone(),
                    missing_id: endpoint.clone(),
                });
            }
        }
    }

    let mut entry_points = document.nodes.iter().filter(|n| {
        registry
            .get(&n.plugin_id)
            .is_some_and(|plugin| plugin.entry_point)
    });
    if let (Some(first), Some(second)) = (entry_points.next(), entry_points.next()) {
        return Err(DocumentError::MultipleEntryPoints {
            first: first.id.clone(),
            second: second.id.clone(),
        });
    }

    for node in &document.nodes {
        if !registry.contains(&node.plugin_id) {
            // Tolerated: the document may reference plugins this host does
            // not ship. Such nodes lose schema validation but round-trip.
            warn!(node_id = %node.id, plugin_id = %node.plugin_id, "unknown plugin in document");
        }
    }

    let nodes = document
        .nodes
        .iter()
        .map(|node| Node {
            id: node.id.clone(),
            plugin_id: node.plugin_id.clone(),
            position: node.position,
            parent_id: node.parent_node.clone(),
            properties: node.data.clone(),
        })
        .collect();
    let edges = document
        .edges
        .iter()
        .map(|edge| Edge {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            data: edge.data.clone().unwrap_or_default(),
        })
        .collect();

    store.replace(nodes, edges, Some(document.metadata.created));
    Ok(())
}

/// Parses and loads a document from raw JSON in one step.
pub fn load_json(
    store: &mut GraphStore,
    registry: &PluginRegistry,
    json: &str,
) -> Result<(), DocumentError> {
    let document = FlowDocument::from_json(json)?;
    load(store, registry, &document)
}
