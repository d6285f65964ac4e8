//! End-to-end scenario: build a graph the way the editor does, persist it,
//! reload it and compile it to IR.
mod common;
use common::*;
use kumiki::prelude::*;
use kumiki::{document, ir};

#[test]
fn editor_session_round_trip_and_compile() {
    let registry = test_registry();
    let mut store = GraphStore::new();

    // assemble: main (protected container), start inside it, one operation
    let main = store
        .create_node(&registry, "main-function", Position::new(50.0, 50.0), AHashMap::new())
        .expect("main");
    let start = store
        .create_node(&registry, "start-node", Position::new(100.0, 100.0), AHashMap::new())
        .expect("start");
    let add_op = store
        .create_node(
            &registry,
            "code-block",
            Position::new(600.0, 100.0),
            props(&[
                ("label", PropertyValue::Text("Add".to_string())),
                ("code", PropertyValue::Text("let sum = a + b;".to_string())),
            ]),
        )
        .expect("add-op");

    let dropped = resolve_containment(&mut store, &registry, &start).expect("containment");
    assert_eq!(
        dropped,
        ContainmentOutcome::Adopted {
            parent_id: main.clone()
        }
    );

    store
        .create_edge(&start, &add_op, EdgeData::default())
        .expect("edge");

    // the protected entry point cannot be removed mid-session
    assert!(matches!(
        store.delete_node(&registry, &main),
        Err(GraphError::ProtectedNode { .. })
    ));

    // save and reload as the editor would
    let saved = document::serialize(&store, "session");
    let json = saved.to_json().expect("to_json");
    let mut reloaded = GraphStore::new();
    document::load_json(&mut reloaded, &registry, &json).expect("reload");

    assert_eq!(reloaded.nodes(), store.nodes());
    assert_eq!(reloaded.edges(), store.edges());

    // fresh ids never collide with restored ones
    let next = reloaded
        .create_node(&registry, "code-block", Position::default(), AHashMap::new())
        .expect("post-load create");
    assert!(reloaded.nodes().iter().filter(|n| n.id == next).count() == 1);
    assert_eq!(next, "node_3");

    // compile the original session graph
    let flow_ir = ir::compile(&store);

    let start_ir = flow_ir
        .nodes
        .iter()
        .find(|n| n.id == start)
        .expect("start in IR");
    assert_eq!(start_ir.parent_id.as_deref(), Some(main.as_str()));

    let add_ir = flow_ir
        .nodes
        .iter()
        .find(|n| n.id == add_op)
        .expect("add-op in IR");
    assert_eq!(add_ir.parent_id, None);
    assert_eq!(add_ir.label.as_deref(), Some("Add"));

    assert_eq!(flow_ir.connections.len(), 1);
    let connection = &flow_ir.connections[0];
    assert_eq!(connection.from, start);
    assert_eq!(connection.to, add_op);
    assert_eq!(connection.connection_type, ConnectionType::Simple);

    // the suggestion heuristic stays out of the IR but serves the edge editor
    let code = store
        .node(&add_op)
        .and_then(|n| n.property("code"))
        .and_then(PropertyValue::as_text)
        .expect("code text");
    assert_eq!(kumiki::vars::suggest_variables(code), vec!["sum"]);
}

#[test]
fn drag_between_containers_keeps_canvas_location() {
    let registry = test_registry();
    let mut store = GraphStore::new();

    let main = store
        .create_node(&registry, "main-function", Position::new(0.0, 0.0), AHashMap::new())
        .expect("main");
    let helper = store
        .create_node(
            &registry,
            "function-definition",
            Position::new(1000.0, 0.0),
            AHashMap::new(),
        )
        .expect("helper");
    let block = store
        .create_node(&registry, "code-block", Position::new(100.0, 100.0), AHashMap::new())
        .expect("block");

    resolve_containment(&mut store, &registry, &block).expect("adopt into main");
    assert_eq!(store.node(&block).and_then(|n| n.parent_id.clone()), Some(main));

    // drag into the helper container: relative (1050, 50) within main's frame
    store
        .set_position(&block, Position::new(1050.0, 50.0))
        .expect("move");
    let outcome = resolve_containment(&mut store, &registry, &block).expect("resolve");
    assert_eq!(
        outcome,
        ContainmentOutcome::Adopted {
            parent_id: helper.clone()
        }
    );

    let node = store.node(&block).expect("block");
    assert_eq!(node.parent_id, Some(helper));
    assert_eq!(node.position, Position::new(50.0, 50.0));
    assert_eq!(store.absolute_position(&block), Some(Position::new(1050.0, 50.0)));
}
