use super::edge::{Edge, EdgeData};
use super::event::{GraphEvent, Selection};
use super::ids::IdGenerator;
use super::node::{Node, Position};
use crate::error::GraphError;
use crate::plugin::{PluginRegistry, PropertyValue};
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// The authoritative, single-threaded owner of the editor's nodes and edges.
///
/// All mutations go through the store so invariants hold at every step:
/// unique ids, no dangling edge endpoints, containment at most one level
/// deep, and at most one protected entry-point node. Each operation is
/// all-or-nothing; on failure the store is exactly as it was before the call.
///
/// Successful mutations append [`GraphEvent`]s to an internal queue which a
/// rendering layer drains with [`GraphStore::drain_events`].
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selection: Option<Selection>,
    ids: IdGenerator,
    created: Option<DateTime<Utc>>,
    events: Vec<GraphEvent>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Timestamp of the document this graph was loaded from, if any.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Drains the pending mutation events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GraphEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a node is exempt from deletion, derived from its plugin's
    /// entry-point marker.
    pub fn is_protected(&self, registry: &PluginRegistry, id: &str) -> bool {
        self.node(id)
            .and_then(|n| registry.get(&n.plugin_id))
            .is_some_and(|p| p.entry_point)
    }

    /// The singleton entry-point node, if the graph has one.
    pub fn entry_point_node<'a>(&'a self, registry: &PluginRegistry) -> Option<&'a Node> {
        self.nodes
            .iter()
            .find(|n| registry.get(&n.plugin_id).is_some_and(|p| p.entry_point))
    }

    /// The node's position in the absolute canvas frame. Parents are always
    /// top-level, so a single hop resolves the chain.
    pub fn absolute_position(&self, id: &str) -> Option<Position> {
        let node = self.node(id)?;
        match node.parent_id.as_deref() {
            Some(parent_id) => {
                let parent = self.node(parent_id)?;
                Some(parent.position + node.position)
            }
            None => Some(node.position),
        }
    }

    /// Creates a node from a registered plugin, seeding every schema property
    /// not present in `initial` with its declared default.
    ///
    /// Initial values are validated against their declared kinds the same way
    /// [`GraphStore::update_node_properties`] validates a patch.
    pub fn create_node(
        &mut self,
        registry: &PluginRegistry,
        plugin_id: &str,
        position: Position,
        initial: AHashMap<String, PropertyValue>,
    ) -> Result<String, GraphError> {
        let plugin = registry
            .get(plugin_id)
            .ok_or_else(|| GraphError::UnknownPlugin(plugin_id.to_string()))?;

        if plugin.entry_point {
            if let Some(existing) = self.entry_point_node(registry) {
                return Err(GraphError::DuplicateEntryPoint {
                    existing_id: existing.id.clone(),
                });
            }
        }

        for (name, value) in &initial {
            if let Some(prop) = plugin.property(name) {
                if !value.matches(prop.kind) {
                    return Err(GraphError::PropertyType {
                        node_id: plugin_id.to_string(),
                        name: name.clone(),
                        expected: prop.kind.to_string(),
                    });
                }
            }
        }

        let mut properties = initial;
        for prop in &plugin.properties {
            properties
                .entry(prop.name.clone())
                .or_insert_with(|| prop.default.clone());
        }

        let id = self.ids.next_node_id();
        self.nodes.push(Node {
            id: id.clone(),
            plugin_id: plugin_id.to_string(),
            position,
            parent_id: None,
            properties,
        });
        self.events.push(GraphEvent::NodeAdded { id: id.clone() });
        debug!(node_id = %id, plugin_id, "node created");
        Ok(id)
    }

    /// Deletes a node and every edge touching it.
    ///
    /// Fails with [`GraphError::ProtectedNode`] for the entry-point singleton.
    /// Children of a deleted container are released back to absolute
    /// coordinates so they keep their canvas location.
    pub fn delete_node(&mut self, registry: &PluginRegistry, id: &str) -> Result<(), GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        if self.is_protected(registry, id) {
            warn!(node_id = id, "delete refused: node is the protected entry point");
            return Err(GraphError::ProtectedNode {
                node_id: id.to_string(),
            });
        }

        let removed = self.nodes.remove(index);

        for node in self.nodes.iter_mut() {
            if node.parent_id.as_deref() == Some(id) {
                node.parent_id = None;
                node.position = node.position + removed.position;
                self.events.push(GraphEvent::NodeReparented {
                    id: node.id.clone(),
                    parent_id: None,
                });
            }
        }

        let mut removed_edges = Vec::new();
        self.edges.retain(|e| {
            if e.source == id || e.target == id {
                removed_edges.push(e.id.clone());
                false
            } else {
                true
            }
        });
        for edge_id in removed_edges {
            if self.selection == Some(Selection::Edge(edge_id.clone())) {
                self.selection = None;
                self.events.push(GraphEvent::SelectionChanged);
            }
            self.events.push(GraphEvent::EdgeRemoved { id: edge_id });
        }

        if self.selection == Some(Selection::Node(removed.id.clone())) {
            self.selection = None;
            self.events.push(GraphEvent::SelectionChanged);
        }

        self.events.push(GraphEvent::NodeRemoved {
            id: removed.id.clone(),
        });
        debug!(node_id = %removed.id, "node deleted");
        Ok(())
    }

    /// Applies a property patch to a node.
    ///
    /// Keys declared by the node's plugin schema are validated against their
    /// declared kind before anything is written; keys the schema does not
    /// know pass through opaquely.
    pub fn update_node_properties(
        &mut self,
        registry: &PluginRegistry,
        id: &str,
        patch: AHashMap<String, PropertyValue>,
    ) -> Result<(), GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        if let Some(plugin) = registry.get(&self.nodes[index].plugin_id) {
            for (name, value) in &patch {
                if let Some(prop) = plugin.property(name) {
                    if !value.matches(prop.kind) {
                        return Err(GraphError::PropertyType {
                            node_id: id.to_string(),
                            name: name.clone(),
                            expected: prop.kind.to_string(),
                        });
                    }
                }
            }
        }

        self.nodes[index].properties.extend(patch);
        self.events.push(GraphEvent::NodeUpdated { id: id.to_string() });
        Ok(())
    }

    /// Writes a node's stored position without touching containment. The
    /// containment resolver runs separately at drag end.
    pub fn set_position(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        node.position = position;
        self.events.push(GraphEvent::NodeMoved { id: id.to_string() });
        Ok(())
    }

    /// Creates an edge between two existing nodes.
    pub fn create_edge(
        &mut self,
        source: &str,
        target: &str,
        data: EdgeData,
    ) -> Result<String, GraphError> {
        for endpoint in [source, target] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::InvalidReference {
                    missing_id: endpoint.to_string(),
                });
            }
        }

        let id = self.ids.next_edge_id();
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            data,
        });
        self.events.push(GraphEvent::EdgeAdded { id: id.clone() });
        debug!(edge_id = %id, source, target, "edge created");
        Ok(id)
    }

    pub fn delete_edge(&mut self, id: &str) -> Result<(), GraphError> {
        let index = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| GraphError::UnknownEdge(id.to_string()))?;
        self.edges.remove(index);

        if self.selection == Some(Selection::Edge(id.to_string())) {
            self.selection = None;
            self.events.push(GraphEvent::SelectionChanged);
        }
        self.events.push(GraphEvent::EdgeRemoved { id: id.to_string() });
        debug!(edge_id = id, "edge deleted");
        Ok(())
    }

    /// Replaces an edge's payload (connection type and variable mapping).
    pub fn update_edge_data(&mut self, id: &str, data: EdgeData) -> Result<(), GraphError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GraphError::UnknownEdge(id.to_string()))?;
        edge.data = data;
        self.events.push(GraphEvent::EdgeUpdated { id: id.to_string() });
        Ok(())
    }

    /// Rewrites a node's parent and stored position in one step.
    ///
    /// The caller supplies the position already converted into the new frame
    /// (relative to the parent, or absolute when the parent is cleared), so
    /// the node's canvas location is preserved across the change. Containment
    /// is at most one level deep: a node that owns children cannot itself be
    /// adopted, and a parent must be top-level.
    pub fn reparent(
        &mut self,
        id: &str,
        new_parent: Option<&str>,
        new_relative_position: Position,
    ) -> Result<(), GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        if let Some(parent_id) = new_parent {
            if parent_id == id {
                return Err(GraphError::InvalidParent {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                    message: "a node cannot contain itself".to_string(),
                });
            }
            let parent = self.node(parent_id).ok_or_else(|| GraphError::InvalidParent {
                node_id: id.to_string(),
                parent_id: parent_id.to_string(),
                message: "parent does not exist".to_string(),
            })?;
            if parent.parent_id.is_some() {
                return Err(GraphError::InvalidParent {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                    message: "containers do not nest".to_string(),
                });
            }
            if self.nodes.iter().any(|n| n.parent_id.as_deref() == Some(id)) {
                return Err(GraphError::InvalidParent {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                    message: "node owns children and cannot be contained".to_string(),
                });
            }
        }

        let node = &mut self.nodes[index];
        node.parent_id = new_parent.map(String::from);
        node.position = new_relative_position;
        self.events.push(GraphEvent::NodeReparented {
            id: id.to_string(),
            parent_id: new_parent.map(String::from),
        });
        debug!(node_id = id, parent_id = ?new_parent, "node reparented");
        Ok(())
    }

    pub fn select_node(&mut self, id: &str) -> Result<(), GraphError> {
        if self.node(id).is_none() {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        self.selection = Some(Selection::Node(id.to_string()));
        self.events.push(GraphEvent::SelectionChanged);
        Ok(())
    }

    pub fn select_edge(&mut self, id: &str) -> Result<(), GraphError> {
        if self.edge(id).is_none() {
            return Err(GraphError::UnknownEdge(id.to_string()));
        }
        self.selection = Some(Selection::Edge(id.to_string()));
        self.events.push(GraphEvent::SelectionChanged);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.events.push(GraphEvent::SelectionChanged);
        }
    }

    /// Atomically replaces the store's contents with a validated document
    /// snapshot. The id generator is reseeded past restored ids and any
    /// active selection is cleared.
    pub(crate) fn replace(
        &mut self,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        created: Option<DateTime<Utc>>,
    ) {
        self.ids = IdGenerator::new();
        self.ids.reseed_from(
            nodes.iter().map(|n| n.id.as_str()),
            edges.iter().map(|e| e.id.as_str()),
        );
        self.nodes = nodes;
        self.edges = edges;
        self.selection = None;
        self.created = created;
        self.events.push(GraphEvent::DocumentReplaced);
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "document loaded into store"
        );
    }
}
