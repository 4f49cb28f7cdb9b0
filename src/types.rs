//! Type definitions for the hive plot document consumed by the renderer.
//!
//! The document is produced by an external layout engine: axes are already
//! placed, nodes already positioned, and edge curves already fitted. Nothing
//! here is mutated during rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Untyped keyword-style styling dictionary, e.g. `{"lw": 2, "color": "red"}`.
pub type RawStyle = serde_json::Map<String, Value>;

/// A 2D coordinate in data space, serialized as `[x, y]`.
pub type Coord = [f64; 2];

/// Nested edge mapping: source axis -> target axis -> tag -> group.
pub type EdgeMap = IndexMap<String, IndexMap<String, IndexMap<String, EdgeGroup>>>;

/// Root of a hive plot JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HivePlotDocument {
    /// Axes keyed by name, in rendering order
    pub axes: IndexMap<String, AxisSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: EdgeMap,
    /// Raw node style dictionaries keyed by axis name
    #[serde(default, deserialize_with = "null_as_default")]
    pub node_viz_kwargs: IndexMap<String, RawStyle>,
}

/// One axis: a line segment in data space plus the nodes placed on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisSpec {
    pub start: Coord,
    pub end: Coord,
    /// Radial direction in degrees. Older documents omit it, which suppresses the label.
    #[serde(default)]
    pub angle: Option<f64>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: NodeSet,
}

impl AxisSpec {
    pub fn label_text<'a>(&'a self, key: &'a str) -> &'a str {
        self.long_name.as_deref().unwrap_or(key)
    }
}

/// Parallel node sequences for a single axis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSet {
    #[serde(default)]
    pub unique_id: Vec<Value>,
    #[serde(default)]
    pub x: Vec<f64>,
    #[serde(default)]
    pub y: Vec<f64>,
}

impl NodeSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Edges sharing one (source axis, target axis, tag) triple
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeGroup {
    /// (source id, target id) per edge
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<(Value, Value)>,
    /// One polyline per edge, at least two points each
    #[serde(default, deserialize_with = "null_as_default")]
    pub curves: Vec<Vec<Coord>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edge_kwargs: RawStyle,
}

impl EdgeGroup {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
