//! Best-effort variable suggestion for edge argument binding.
//!
//! The editor offers the variables of a source node as candidates when the
//! user wires up a function-call connection. Extraction is a bounded textual
//! heuristic over the node's code property; it is advisory only and is never
//! an input to the IR compiler.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel stored in a variable mapping while the editor is collecting a
/// literal value instead of a variable name.
pub const LITERAL_SENTINEL: &str = "__custom__";

static LET_BINDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blet\s+(?:mut\s+)?(\w+)").expect("let-binding pattern is valid"));

/// Scans code text for `let` bindings and returns the bound names as
/// suggestions, deduplicated in first-seen order.
pub fn suggest_variables(code: &str) -> Vec<String> {
    LET_BINDING
        .captures_iter(code)
        .map(|caps| caps[1].to_string())
        .unique()
        .collect()
}
