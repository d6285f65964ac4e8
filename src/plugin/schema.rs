use super::value::PropertyValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of property kinds a plugin schema may declare.
///
/// The kind lives in the schema, not in stored values: plain text and code
/// text are both carried as `PropertyValue::Text` at runtime, the schema
/// decides how the editor renders and validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Text,
    Code,
    Number,
    Boolean,
    Arguments,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Text => "text",
            PropertyKind::Code => "code",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Arguments => "arguments",
        };
        write!(f, "{}", name)
    }
}

/// A named, typed function argument as declared by an `arguments` property
/// (e.g. the parameter list of a function-definition block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionArgument {
    pub name: String,
    /// Target-language type annotation (e.g. "i32", "String").
    #[serde(rename = "type")]
    pub arg_type: String,
}

/// A single typed property declared by a plugin schema, with its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub label: String,
    pub default: PropertyValue,
    pub required: bool,
    #[serde(default)]
    pub multiline: bool,
}

/// A block type as described by its `plugin.json` document.
///
/// `container` and `entry_point` are behavioral markers the core derives node
/// semantics from: container plugins define a bounding box and may own child
/// nodes, entry-point plugins are singletons whose instances are protected
/// from deletion. Both default to `false` for plugins that do not declare
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub description: String,
    pub properties: Vec<PluginProperty>,
    #[serde(default)]
    pub container: bool,
    #[serde(default)]
    pub entry_point: bool,
}

impl PluginDefinition {
    /// Looks up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PluginProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}
