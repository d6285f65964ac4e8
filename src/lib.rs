//! # Kumiki - Visual Block-Editor Graph Core
//!
//! **Kumiki** is the graph model, containment resolver and IR compilation
//! core behind a visual block-editor: the user assembles a program as a graph
//! of typed nodes and connections, and Kumiki lowers that graph into an
//! intermediate representation (IR) for an external code-generation service.
//! Rendering, styling and the code generator itself are collaborators behind
//! narrow interfaces; this crate owns the parts with real invariants.
//!
//! ## Core Workflow
//!
//! 1.  **Build the catalog**: load the host's `plugin.json` documents into a
//!     [`plugin::PluginRegistry`]. The registry is a read-only catalog of
//!     block types and their typed property schemas.
//! 2.  **Mutate the graph**: every edit goes through the
//!     [`graph::GraphStore`], which enforces the invariants (unique ids, no
//!     dangling edges, single protected entry point) and queues events for
//!     the rendering layer.
//! 3.  **Resolve containment**: after a drag, [`layout::resolve_containment`]
//!     decides which container owns the moved node and converts its position
//!     between the relative and absolute coordinate frames.
//! 4.  **Project**: [`ir::compile`] produces the backend-agnostic IR for the
//!     compile service; [`document::serialize`] / [`document::load`] persist
//!     and restore the graph as a versioned `.flow.json` document with a
//!     guaranteed round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Build the plugin catalog from the host's schema documents.
//!     let mut registry = PluginRegistry::new();
//!     registry.register_json(
//!         r#"{
//!             "id": "code-block",
//!             "name": "Code",
//!             "category": "basic",
//!             "icon": "{}",
//!             "description": "A block of inline code",
//!             "properties": [
//!                 { "name": "label", "type": "text", "label": "Name",
//!                   "default": "Code", "required": true },
//!                 { "name": "code", "type": "code", "label": "Code",
//!                   "default": "", "required": false, "multiline": true }
//!             ]
//!         }"#,
//!     )?;
//!
//!     // 2. Edit the graph through the store.
//!     let mut store = GraphStore::new();
//!     let first = store.create_node(
//!         &registry,
//!         "code-block",
//!         Position::new(100.0, 80.0),
//!         AHashMap::new(),
//!     )?;
//!     let second = store.create_node(
//!         &registry,
//!         "code-block",
//!         Position::new(320.0, 80.0),
//!         AHashMap::new(),
//!     )?;
//!     store.create_edge(&first, &second, EdgeData::default())?;
//!
//!     // 3. Reconcile containment after a drag.
//!     store.set_position(&first, Position::new(140.0, 120.0))?;
//!     resolve_containment(&mut store, &registry, &first)?;
//!
//!     // 4. Project into IR and send it to a running flow service.
//!     let ir = compile(&store);
//!     let client = FlowServiceClient::new("http://localhost:3000");
//!     let code = client.compile(&ir)?;
//!     let report = client.execute(&code, "my_flow")?;
//!     println!("{}", report.execution_output);
//!
//!     // ... or persist the graph as a .flow.json document.
//!     let document = serialize(&store, "my_flow");
//!     std::fs::write("my_flow.flow.json", document.to_json()?)?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod ir;
pub mod layout;
pub mod plugin;
pub mod prelude;
pub mod remote;
pub mod vars;
