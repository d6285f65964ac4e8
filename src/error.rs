use thiserror::Error;

/// Errors raised by Graph Store mutations.
///
/// Every variant is locally recoverable: a failed operation leaves the store
/// untouched, so a caller can report the error and continue the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node '{node_id}' is the protected entry point and cannot be deleted")]
    ProtectedNode { node_id: String },

    #[error("Cannot create edge: endpoint '{missing_id}' does not exist in the graph")]
    InvalidReference { missing_id: String },

    #[error("Node '{0}' does not exist in the graph")]
    UnknownNode(String),

    #[error("Edge '{0}' does not exist in the graph")]
    UnknownEdge(String),

    #[error("Plugin '{0}' is not present in the registry")]
    UnknownPlugin(String),

    #[error("The graph already contains an entry-point node ('{existing_id}')")]
    DuplicateEntryPoint { existing_id: String },

    #[error("Property '{name}' on node '{node_id}' must be of kind {expected}")]
    PropertyType {
        node_id: String,
        name: String,
        expected: String,
    },

    #[error("Node '{node_id}' cannot be parented to '{parent_id}': {message}")]
    InvalidParent {
        node_id: String,
        parent_id: String,
        message: String,
    },
}

/// Errors raised while loading or validating a persisted flow document.
///
/// A failed load aborts before the currently open graph is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Failed to parse flow document JSON: {0}")]
    MalformedJson(String),

    #[error("Unsupported flow document version '{0}'")]
    UnsupportedVersion(String),

    #[error("Duplicate node id '{0}' in document")]
    DuplicateNodeId(String),

    #[error("Edge '{edge_id}' references missing node '{missing_id}'")]
    DanglingEdge { edge_id: String, missing_id: String },

    #[error("Node '{node_id}' has an invalid parent '{parent_id}': {message}")]
    InvalidParent {
        node_id: String,
        parent_id: String,
        message: String,
    },

    #[error("Document contains more than one entry-point node ('{first}' and '{second}')")]
    MultipleEntryPoints { first: String, second: String },
}

/// Errors raised by the remote compile/execute service client.
///
/// The error text is surfaced verbatim to the user's output log; graph state
/// is never affected by a remote failure.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    #[error("Flow service request failed: {0}")]
    Transport(String),

    #[error("Flow service returned a malformed response: {0}")]
    MalformedResponse(String),
}
