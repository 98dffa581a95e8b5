//! Direction transform.
//!
//! Positioning always runs top-to-bottom. For left-to-right layouts node boxes are transposed
//! before positioning and the resulting coordinates are transposed back afterwards, so rank
//! spacing follows node widths and in-rank spacing follows node heights.

use crate::config::Direction;
use crate::graphlib::Graph;
use crate::model::NodeLabel;
use crate::position::Positions;

pub fn adjust(g: &mut Graph<NodeLabel>, direction: Direction) {
    match direction {
        Direction::LeftToRight => swap_width_height(g),
        Direction::TopToBottom => {}
    }
}

pub fn undo(g: &mut Graph<NodeLabel>, positions: &mut Positions, direction: Direction) {
    match direction {
        Direction::LeftToRight => {
            swap_xy(positions);
            swap_width_height(g);
        }
        Direction::TopToBottom => {}
    }
}

fn swap_width_height(g: &mut Graph<NodeLabel>) {
    for v in 0..g.node_count() {
        if let Some(n) = g.node_mut(v) {
            (n.width, n.height) = (n.height, n.width);
        }
    }
}

fn swap_xy(positions: &mut Positions) {
    for p in &mut positions.centers {
        (p.x, p.y) = (p.y, p.x);
    }
    (positions.width, positions.height) = (positions.height, positions.width);
}
