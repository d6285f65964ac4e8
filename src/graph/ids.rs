/// Monotonic id generator owned by the Graph Store.
///
/// Node and edge counters are independent; ids take the form `node_<n>` and
/// `edge_<n>`. After a document load the counters are reseeded past the
/// highest numeric suffix found among the restored ids, so freshly created
/// elements can never collide with restored ones.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next_node: u64,
    next_edge: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_node_id(&mut self) -> String {
        let id = format!("node_{}", self.next_node);
        self.next_node += 1;
        id
    }

    pub fn next_edge_id(&mut self) -> String {
        let id = format!("edge_{}", self.next_edge);
        self.next_edge += 1;
        id
    }

    /// Reseeds both counters from restored ids. Ids that do not match the
    /// generated `<prefix>_<n>` shape are ignored; they can never collide
    /// with generated ones.
    pub fn reseed_from<'a>(
        &mut self,
        node_ids: impl Iterator<Item = &'a str>,
        edge_ids: impl Iterator<Item = &'a str>,
    ) {
        self.next_node = next_after_max(node_ids, "node_");
        self.next_edge = next_after_max(edge_ids, "edge_");
    }
}

fn next_after_max<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .map(|n| n + 1)
        .max()
        .unwrap_or(0)
}
