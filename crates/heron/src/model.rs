//! Input and output records exchanged with the host.
//!
//! Field names follow the JSON shape hosts already use for flow graphs (`id`, `source`,
//! `target`, `type`, camelCase sides), so a request can be deserialized straight from a widget
//! property and a result handed back to the renderer without remapping.

use crate::config::{DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH, Direction, LayoutConfig, Side};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Presentation type (`input`, `output`, ...). Not a layout concern; echoed back as-is.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Opaque host payload, echoed back as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl NodeInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: None,
            height: None,
            kind: None,
            data: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// `(width, height)` with missing dimensions filled from the defaults.
    pub fn size(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_NODE_WIDTH),
            self.height.unwrap_or(DEFAULT_NODE_HEIGHT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
}

impl EdgeInput {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Everything a host hands over for one layout call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    #[serde(default)]
    pub nodes: Vec<NodeInput>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
    #[serde(default)]
    pub config: LayoutConfig,
}

/// Node label stored in the layout graph.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
}

impl NodeLabel {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLayout {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    pub order: usize,
    pub source_side: Side,
    pub target_side: Side,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl NodeLayout {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the given side of the node box.
    pub fn anchor(&self, side: Side) -> Point {
        let c = self.center();
        match side {
            Side::Top => Point::new(c.x, self.y),
            Side::Bottom => Point::new(c.x, self.y + self.height),
            Side::Left => Point::new(self.x, c.y),
            Side::Right => Point::new(self.x + self.width, c.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub direction: Direction,
    pub width: f64,
    pub height: f64,
    /// Laid-out nodes keyed by id, in input order.
    pub nodes: IndexMap<String, NodeLayout>,
    /// One route per input edge, in input order.
    pub edges: Vec<EdgeLayout>,
}

impl LayoutResult {
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            width: 0.0,
            height: 0.0,
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&NodeLayout> {
        self.nodes.get(id)
    }

    /// Top-left corner of the node with the given id.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes.get(id).map(NodeLayout::position)
    }
}
