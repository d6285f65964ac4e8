//! Prelude module for convenient imports
//!
//! Re-exports the types needed for the common workflow: build a plugin
//! registry, mutate a [`GraphStore`], resolve containment after drags, and
//! project the graph into IR or a persisted flow document.

// Graph model and store
pub use crate::graph::{
    ConnectionType, Edge, EdgeData, GraphEvent, GraphStore, Node, Position, Selection,
};

// Plugin catalog
pub use crate::plugin::{
    FunctionArgument, PluginDefinition, PluginProperty, PluginRegistry, PropertyKind,
    PropertyValue,
};

// Containment
pub use crate::layout::{ContainmentOutcome, resolve_containment};

// Projections
pub use crate::document::{FlowDocument, load, load_json, serialize};
pub use crate::ir::{FlowIr, compile};

// Remote service
pub use crate::remote::{ExecutionReport, FlowServiceClient};

// Error types
pub use crate::error::{DocumentError, GraphError, RemoteError};

// Hash map used throughout the public API
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
