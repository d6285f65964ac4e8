use super::schema::PluginDefinition;
use ahash::AHashMap;

/// Read-only catalog of the block types available to the editor.
///
/// The registry is populated once from per-plugin `plugin.json` documents
/// supplied by the host application; the core only ever consults it for
/// lookups (property schemas, container and entry-point markers).
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: AHashMap<String, PluginDefinition>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from already-parsed plugin definitions.
    pub fn from_definitions(definitions: Vec<PluginDefinition>) -> Self {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition);
        }
        registry
    }

    /// Registers a plugin definition, replacing any previous definition with
    /// the same id.
    pub fn register(&mut self, definition: PluginDefinition) {
        self.plugins.insert(definition.id.clone(), definition);
    }

    /// Parses and registers a single `plugin.json` document, returning the
    /// registered plugin id.
    pub fn register_json(&mut self, json: &str) -> Result<String, serde_json::Error> {
        let definition: PluginDefinition = serde_json::from_str(json)?;
        let id = definition.id.clone();
        self.register(definition);
        Ok(id)
    }

    pub fn get(&self, plugin_id: &str) -> Option<&PluginDefinition> {
        self.plugins.get(plugin_id)
    }

    pub fn contains(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginDefinition> {
        self.plugins.values()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
