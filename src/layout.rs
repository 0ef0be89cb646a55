//! Positioned node/edge graph for rendering a BST.
//!
//! Breadth-first walk over the tree builds the node and edge lists; layered
//! placement then assigns coordinates (depth picks the rank, inorder position
//! picks the column). Left and right children get a small horizontal nudge
//! toward their side.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::bst::BstArena;

/// Horizontal distance between inorder-adjacent nodes
pub const NODE_SEP: f32 = 80.0;
/// Vertical distance between tree levels
pub const RANK_SEP: f32 = 100.0;
/// Sideways shift applied to left/right children
pub const SIDE_NUDGE: f32 = 15.0;

/// Which branch an edge descended to reach a node. A rendering hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Root,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Root => write!(f, "root"),
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Renderable node; `id` is the tree node's path id.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub value: i64,
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

/// Renderable edge between a parent and child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// Builds the positioned graph for `tree`. Empty trees yield an empty graph.
#[instrument(level = "debug", skip(tree))]
pub fn flow_graph(tree: &BstArena) -> FlowGraph {
    let mut graph = FlowGraph::default();
    let Some(root) = tree.root() else {
        return graph;
    };

    // Inorder position decides the x column
    let columns: HashMap<String, usize> = tree
        .iter_inorder()
        .enumerate()
        .map(|(rank, (_, node))| (node.path_id.clone(), rank))
        .collect();

    let mut queue: VecDeque<(Index, Side)> = VecDeque::new();
    queue.push_back((root, Side::Root));

    while let Some((idx, side)) = queue.pop_front() {
        let Some(node) = tree.get_node(idx) else {
            continue;
        };

        let depth = node.path_id.len().saturating_sub(1);
        let column = columns.get(&node.path_id).copied().unwrap_or(0);
        let nudge = match side {
            Side::Root => 0.0,
            Side::Left => -SIDE_NUDGE,
            Side::Right => SIDE_NUDGE,
        };

        graph.nodes.push(FlowNode {
            id: node.path_id.clone(),
            value: node.value,
            side,
            x: column as f32 * NODE_SEP + nudge,
            y: depth as f32 * RANK_SEP,
        });

        if let Some(left) = node.left {
            if let Some(child) = tree.get_node(left) {
                graph.edges.push(FlowEdge {
                    id: format!("e{}-{}", node.path_id, child.path_id),
                    source: node.path_id.clone(),
                    target: child.path_id.clone(),
                });
            }
            queue.push_back((left, Side::Left));
        }
        if let Some(right) = node.right {
            if let Some(child) = tree.get_node(right) {
                graph.edges.push(FlowEdge {
                    id: format!("e{}-{}", node.path_id, child.path_id),
                    source: node.path_id.clone(),
                    target: child.path_id.clone(),
                });
            }
            queue.push_back((right, Side::Right));
        }
    }

    graph
}
