/// The current selection, if any. At most one element is selected at a time;
/// selecting a node deselects any edge and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Node(String),
    Edge(String),
}

/// Notification emitted by the Graph Store after a successful mutation.
///
/// Rendering layers drain these from the store and react to them, instead of
/// nodes carrying behavior (such as delete callbacks) in their data.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    NodeAdded { id: String },
    NodeRemoved { id: String },
    NodeUpdated { id: String },
    NodeMoved { id: String },
    /// A node changed container. Contained nodes render above their
    /// container, so the UI should re-layer on this event.
    NodeReparented {
        id: String,
        parent_id: Option<String>,
    },
    EdgeAdded { id: String },
    EdgeRemoved { id: String },
    EdgeUpdated { id: String },
    SelectionChanged,
    DocumentReplaced,
}
