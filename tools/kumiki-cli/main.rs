use clap::Parser;
use kumiki::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Inspect, compile and run visual-flow documents from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the .flow.json document
    flow_path: String,

    /// Directory of plugin schemas (each plugin in <dir>/<id>/plugin.json)
    #[arg(short, long, default_value = "plugins")]
    plugins: String,

    /// Print the compiled IR as JSON instead of a document summary
    #[arg(long)]
    ir: bool,

    /// Compile and execute the flow against a running flow service
    #[arg(long)]
    run: bool,

    /// Base URL of the flow service used with --run
    #[arg(long, default_value = "http://localhost:3000")]
    service_url: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let registry = load_registry(&cli.plugins);

    let json = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow file '{}': {}",
            &cli.flow_path, e
        ))
    });

    let mut store = GraphStore::new();
    load_json(&mut store, &registry, &json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)));

    if cli.run {
        run_flow(&store, &cli.service_url, &flow_name(&cli.flow_path));
    } else if cli.ir {
        print_ir(&store);
    } else {
        print_summary(&store, &registry);
    }
}

/// Loads every `<dir>/<plugin>/plugin.json` under the plugins directory.
/// A missing directory is not fatal; the flow still loads, only schema
/// validation and container/entry-point markers are unavailable.
fn load_registry(plugins_dir: &str) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    let dir = Path::new(plugins_dir);
    if !dir.is_dir() {
        eprintln!(
            "Warning: plugins directory '{}' not found; loading without schemas",
            plugins_dir
        );
        return registry;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Warning: cannot read '{}': {}", plugins_dir, e);
            return registry;
        }
    };

    for entry in entries.flatten() {
        let schema_path: PathBuf = entry.path().join("plugin.json");
        if !schema_path.is_file() {
            continue;
        }
        match fs::read_to_string(&schema_path) {
            Ok(json) => match registry.register_json(&json) {
                Ok(id) => println!("Loaded plugin '{}'", id),
                Err(e) => eprintln!("Warning: skipping '{}': {}", schema_path.display(), e),
            },
            Err(e) => eprintln!("Warning: cannot read '{}': {}", schema_path.display(), e),
        }
    }
    registry
}

fn print_summary(store: &GraphStore, registry: &PluginRegistry) {
    println!("Nodes: {}", store.nodes().len());
    for node in store.nodes() {
        let label = node.label().unwrap_or("<unnamed>");
        let parent = node
            .parent_id
            .as_deref()
            .map(|p| format!(" (in {})", p))
            .unwrap_or_default();
        println!("  {} [{}] {}{}", node.id, node.plugin_id, label, parent);
    }
    println!("Edges: {}", store.edges().len());
    for edge in store.edges() {
        println!(
            "  {} {} -> {} ({:?})",
            edge.id, edge.source, edge.target, edge.data.connection_type
        );
    }
    if let Some(entry) = store.entry_point_node(registry) {
        println!("Entry point: {}", entry.id);
    }
}

fn print_ir(store: &GraphStore) {
    let ir = compile(store);
    let json = serde_json::to_string_pretty(&ir)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize IR: {}", e)));
    println!("{}", json);
}

fn run_flow(store: &GraphStore, service_url: &str, name: &str) {
    let client = FlowServiceClient::new(service_url);
    client.health().unwrap_or_else(|e| {
        exit_with_error(&format!("Flow service at '{}' unreachable: {}", service_url, e))
    });

    let ir = compile(store);

    println!("Generating code via {}...", service_url);
    let compile_start = Instant::now();
    let code = client
        .compile(&ir)
        .unwrap_or_else(|e| exit_with_error(&format!("Code generation failed: {}", e)));
    println!(
        "Generated {} lines in {:?}",
        code.lines().count(),
        compile_start.elapsed()
    );

    println!("Compiling and executing '{}'...", name);
    let report = client
        .execute(&code, name)
        .unwrap_or_else(|e| exit_with_error(&format!("Execution request failed: {}", e)));

    if !report.compile_output.is_empty() {
        println!("--- Compiler output ---");
        println!("{}", report.compile_output);
    }
    if report.success {
        println!("--- Program output ---");
        println!("{}", report.execution_output);
    } else {
        eprintln!("Execution failed");
        if let Some(error) = report.error {
            eprintln!("{}", error);
        }
        std::process::exit(1);
    }
}

/// Derives the generated source filename from the flow path
/// (`my_flow.flow.json` -> `my_flow`).
fn flow_name(flow_path: &str) -> String {
    Path::new(flow_path)
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.trim_end_matches(".flow.json").trim_end_matches(".json"))
        .unwrap_or("flow")
        .to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
