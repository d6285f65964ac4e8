use crate::plugin::PropertyValue;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D canvas coordinate.
///
/// Interpreted as *relative to the parent container* when the owning node has
/// a `parent_id`, otherwise as an absolute canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A block instance on the canvas.
///
/// Whether a node is protected from deletion is not stored here: it is
/// derived from the `entry_point` marker of its plugin definition, so the
/// flag can never drift out of sync with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub plugin_id: String,
    pub position: Position,
    pub parent_id: Option<String>,
    pub properties: AHashMap<String, PropertyValue>,
}

impl Node {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The display label, when one has been set.
    pub fn label(&self) -> Option<&str> {
        self.property("label").and_then(PropertyValue::as_text)
    }
}
