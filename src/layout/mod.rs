//! Containment resolution between dragged nodes and container blocks.
//!
//! Runs after a drag ends: it decides which container (if any) now owns the
//! moved node and rewrites the node's stored position between the relative
//! and absolute coordinate frames so its canvas location never changes. The
//! conversion is exact, so repeated passes with no intervening drag are
//! identity.

use crate::error::GraphError;
use crate::graph::{GraphStore, Node, Position};
use crate::plugin::{PluginRegistry, PropertyValue};
use tracing::debug;

/// What a containment pass decided for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainmentOutcome {
    /// The node kept its current parent (or stayed top-level).
    Unchanged,
    /// The node was adopted by a container; the UI should re-layer so the
    /// child renders above its container.
    Adopted { parent_id: String },
    /// The node left its container and is top-level again.
    Released,
}

/// Absolute bounding box of a container node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Position,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Half-open containment test: `[x, x + w) × [y, y + h)`.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.height
    }
}

/// The bounding box of a node, when its plugin designates it a container.
///
/// Width and height come from the node's own number properties, falling back
/// to the schema defaults. Containers are never adopted themselves, so their
/// stored position is already absolute.
pub fn container_bounds(registry: &PluginRegistry, node: &Node) -> Option<Bounds> {
    let plugin = registry.get(&node.plugin_id)?;
    if !plugin.container {
        return None;
    }

    let dimension = |name: &str| {
        node.property(name)
            .and_then(PropertyValue::as_number)
            .or_else(|| plugin.property(name).and_then(|p| p.default.as_number()))
    };

    Some(Bounds {
        origin: node.position,
        width: dimension("width")?,
        height: dimension("height")?,
    })
}

/// Reconciles one node's parent/child relationship after its on-canvas
/// position changed.
///
/// Candidates are scanned in document order and the first container whose
/// bounds contain the node's absolute position wins; there is no further
/// disambiguation when boxes overlap. Container-typed nodes are never adopted
/// (containment is one level deep).
pub fn resolve_containment(
    store: &mut GraphStore,
    registry: &PluginRegistry,
    node_id: &str,
) -> Result<ContainmentOutcome, GraphError> {
    let node = store
        .node(node_id)
        .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;
    let current_parent = node.parent_id.clone();
    let node_is_container = registry.get(&node.plugin_id).is_some_and(|p| p.container);
    let absolute = store
        .absolute_position(node_id)
        .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;

    let candidate = if node_is_container {
        None
    } else {
        store
            .nodes()
            .iter()
            .filter(|n| n.id != node_id)
            .find_map(|n| {
                container_bounds(registry, n)
                    .filter(|bounds| bounds.contains(absolute))
                    .map(|bounds| (n.id.clone(), bounds.origin))
            })
    };

    match (candidate, current_parent) {
        (Some((parent_id, _)), Some(current)) if parent_id == current => {
            Ok(ContainmentOutcome::Unchanged)
        }
        (Some((parent_id, origin)), _) => {
            store.reparent(node_id, Some(&parent_id), absolute - origin)?;
            debug!(node_id, parent_id = %parent_id, "node adopted by container");
            Ok(ContainmentOutcome::Adopted { parent_id })
        }
        (None, Some(_)) => {
            store.reparent(node_id, None, absolute)?;
            debug!(node_id, "node released from container");
            Ok(ContainmentOutcome::Released)
        }
        (None, None) => Ok(ContainmentOutcome::Unchanged),
    }
}
