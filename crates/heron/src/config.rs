//! Layout configuration.
//!
//! The defaults reproduce the flow-graph widget this engine was extracted from: every node is
//! 120×36 unless the caller says otherwise, and the separations are derived from that box.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_NODE_WIDTH: f64 = 120.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 36.0;
pub const DEFAULT_EDGE_SEPARATION: f64 = 50.0;
pub const DEFAULT_ORDER_PASSES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TB", alias = "tb", alias = "TopToBottom")]
    TopToBottom,
    #[serde(rename = "LR", alias = "lr", alias = "LeftToRight")]
    LeftToRight,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LeftToRight)
    }

    /// The side of a node that outgoing edges leave from.
    pub fn source_side(self) -> Side {
        match self {
            Direction::TopToBottom => Side::Bottom,
            Direction::LeftToRight => Side::Right,
        }
    }

    /// The side of a node that incoming edges arrive at.
    pub fn target_side(self) -> Side {
        match self {
            Direction::TopToBottom => Side::Top,
            Direction::LeftToRight => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::LeftToRight => "LR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout direction `{0}` (expected TB or LR)")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tb" | "toptobottom" | "top-to-bottom" => Ok(Self::TopToBottom),
            "lr" | "lefttoright" | "left-to-right" => Ok(Self::LeftToRight),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Per-node value used to re-sort a rank during crossing reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderHeuristic {
    #[default]
    Median,
    Barycenter,
}

/// Separations a request leaves out are derived from its direction (see
/// [`LayoutConfig::for_direction`]), not taken from the top-to-bottom defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLayoutConfig")]
pub struct LayoutConfig {
    pub direction: Direction,
    /// Gap between neighbouring nodes of the same rank.
    pub node_separation: f64,
    /// Gap between parallel edges joining the same pair of nodes.
    pub edge_separation: f64,
    /// Gap between consecutive ranks.
    pub rank_separation: f64,
    pub heuristic: OrderHeuristic,
    /// Upper bound on crossing-reduction passes (one down sweep plus one up sweep each).
    pub order_passes: usize,
    /// Shift each rank so its midpoint sits on the diagram's midpoint.
    pub center_ranks: bool,
    /// When set, a graph without edges produces an empty result instead of a single rank.
    pub require_edges: bool,
}

/// Wire form of [`LayoutConfig`]: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawLayoutConfig {
    direction: Option<Direction>,
    node_separation: Option<f64>,
    edge_separation: Option<f64>,
    rank_separation: Option<f64>,
    heuristic: Option<OrderHeuristic>,
    order_passes: Option<usize>,
    center_ranks: Option<bool>,
    require_edges: Option<bool>,
}

impl From<RawLayoutConfig> for LayoutConfig {
    fn from(raw: RawLayoutConfig) -> Self {
        let base = Self::for_direction(raw.direction.unwrap_or_default());
        Self {
            direction: base.direction,
            node_separation: raw.node_separation.unwrap_or(base.node_separation),
            edge_separation: raw.edge_separation.unwrap_or(base.edge_separation),
            rank_separation: raw.rank_separation.unwrap_or(base.rank_separation),
            heuristic: raw.heuristic.unwrap_or(base.heuristic),
            order_passes: raw.order_passes.unwrap_or(base.order_passes),
            center_ranks: raw.center_ranks.unwrap_or(base.center_ranks),
            require_edges: raw.require_edges.unwrap_or(base.require_edges),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_direction(Direction::TopToBottom)
    }
}

impl LayoutConfig {
    /// Separations tuned for the default node box in the given direction.
    pub fn for_direction(direction: Direction) -> Self {
        let (node_separation, rank_separation) = match direction {
            Direction::TopToBottom => (DEFAULT_NODE_WIDTH + 20.0, DEFAULT_NODE_HEIGHT / 2.0 + 20.0),
            Direction::LeftToRight => (DEFAULT_NODE_HEIGHT + 20.0, DEFAULT_NODE_WIDTH / 2.0 + 20.0),
        };
        Self {
            direction,
            node_separation,
            edge_separation: DEFAULT_EDGE_SEPARATION,
            rank_separation,
            heuristic: OrderHeuristic::default(),
            order_passes: DEFAULT_ORDER_PASSES,
            center_ranks: true,
            require_edges: true,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_separations(mut self, node: f64, edge: f64, rank: f64) -> Self {
        self.node_separation = node;
        self.edge_separation = edge;
        self.rank_separation = rank;
        self
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        for (field, value) in [
            ("nodeSeparation", self.node_separation),
            ("edgeSeparation", self.edge_separation),
            ("rankSeparation", self.rank_separation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}
