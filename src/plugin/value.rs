use super::schema::{FunctionArgument, PropertyKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored property value, tagged by shape rather than left as arbitrary
/// untyped JSON.
///
/// Serialization is untagged so persisted documents keep the plain JSON shape
/// the editor has always written (`"code"` properties are plain strings, an
/// argument list is a plain array). Keys unknown to the plugin schema are
/// tolerated and carried through `Opaque` without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Arguments(Vec<FunctionArgument>),
    Opaque(serde_json::Value),
}

impl PropertyValue {
    /// Whether this value satisfies the declared kind of a schema property.
    ///
    /// `Text` satisfies both the `text` and `code` kinds; the distinction is
    /// a rendering concern, not a storage one.
    pub fn matches(&self, kind: PropertyKind) -> bool {
        matches!(
            (self, kind),
            (PropertyValue::Text(_), PropertyKind::Text)
                | (PropertyValue::Text(_), PropertyKind::Code)
                | (PropertyValue::Number(_), PropertyKind::Number)
                | (PropertyValue::Boolean(_), PropertyKind::Boolean)
                | (PropertyValue::Arguments(_), PropertyKind::Arguments)
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_arguments(&self) -> Option<&[FunctionArgument]> {
        match self {
            PropertyValue::Arguments(args) => Some(args),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => write!(f, "{}", s),
            PropertyValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Arguments(args) => {
                let rendered: Vec<String> = args
                    .iter()
                    .map(|a| format!("{}: {}", a.name, a.arg_type))
                    .collect();
                write!(f, "({})", rendered.join(", "))
            }
            PropertyValue::Opaque(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}
