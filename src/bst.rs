use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Path identifier of the root node. Every descendant appends one `L` or `R`
/// per step taken during insertion.
pub const ROOT_PATH_ID: &str = "1";

/// Depth-first visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Preorder,
    Inorder,
    Postorder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Preorder => write!(f, "preorder"),
            Order::Inorder => write!(f, "inorder"),
            Order::Postorder => write!(f, "postorder"),
        }
    }
}

/// Tree node in the arena-based BST.
#[derive(Debug)]
pub struct BstNode {
    /// Integer key; duplicates route right
    pub value: i64,
    /// Root-to-node descent path, e.g. `"1LR"`. Unique per tree, stable for
    /// the node's lifetime, used as rendering identity.
    pub path_id: String,
    /// Index of the left child in the arena
    pub left: Option<Index>,
    /// Index of the right child in the arena
    pub right: Option<Index>,
}

impl BstNode {
    fn new(value: i64, path_id: String) -> Self {
        Self {
            value,
            path_id,
            left: None,
            right: None,
        }
    }
}

impl fmt::Display for BstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value, self.path_id)
    }
}

/// One step of a traversal: the visited node's identity and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub path_id: String,
    pub value: i64,
}

/// Arena-based binary search tree.
///
/// Ordering rule: `value < node.value` goes left, otherwise right, so equal
/// keys are permitted and land in the right subtree. No deletion, no
/// rebalancing; callers that need a different shape replay the full insertion
/// history via [`BstArena::from_sequence`].
#[derive(Debug)]
pub struct BstArena {
    /// Arena storage for all tree nodes
    arena: Arena<BstNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for BstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BstArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Replays every insertion from an empty tree.
    ///
    /// Deterministic: the same sequence always yields a structurally
    /// identical tree with the same path id assignment.
    #[instrument(level = "debug")]
    pub fn from_sequence(values: &[i64]) -> Self {
        let mut tree = Self::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// Inserts `value`, assigning the new node its descent path id.
    ///
    /// An empty tree gets `value` as root with path id `"1"`. Total for any
    /// i64; always returns the index of the newly created node.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i64) -> Index {
        let mut current = match self.root {
            Some(root_idx) => root_idx,
            None => {
                let idx = self
                    .arena
                    .insert(BstNode::new(value, ROOT_PATH_ID.to_string()));
                self.root = Some(idx);
                return idx;
            }
        };

        loop {
            let (go_left, child, parent_path) = {
                let node = &self.arena[current];
                let go_left = value < node.value;
                let child = if go_left { node.left } else { node.right };
                (go_left, child, node.path_id.clone())
            };

            match child {
                Some(next) => current = next,
                None => {
                    let step = if go_left { "L" } else { "R" };
                    let idx = self
                        .arena
                        .insert(BstNode::new(value, format!("{parent_path}{step}")));
                    if let Some(parent) = self.arena.get_mut(current) {
                        if go_left {
                            parent.left = Some(idx);
                        } else {
                            parent.right = Some(idx);
                        }
                    }
                    return idx;
                }
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&BstNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            let left = node.left.map(|c| self.calculate_depth(c)).unwrap_or(0);
            let right = node.right.map(|c| self.calculate_depth(c)).unwrap_or(0);
            1 + left.max(right)
        } else {
            0
        }
    }

    /// Produces the full visiting order without mutating the tree.
    ///
    /// Empty trees yield an empty sequence for all three orders.
    #[instrument(level = "debug", skip(self))]
    pub fn traverse(&self, order: Order) -> Vec<Visit> {
        let visit = |(_, node): (Index, &BstNode)| Visit {
            path_id: node.path_id.clone(),
            value: node.value,
        };
        match order {
            Order::Preorder => self.iter_preorder().map(visit).collect(),
            Order::Inorder => self.iter_inorder().map(visit).collect(),
            Order::Postorder => self.iter_postorder().map(visit).collect(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_preorder(&self) -> PreorderIter {
        PreorderIter::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_inorder(&self) -> InorderIter {
        InorderIter::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostorderIter {
        PostorderIter::new(self)
    }
}

/// Node-left-right iteration.
pub struct PreorderIter<'a> {
    tree: &'a BstArena,
    stack: Vec<Index>,
}

impl<'a> PreorderIter<'a> {
    fn new(tree: &'a BstArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (Index, &'a BstNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        // Right first so the left subtree pops first
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((current_idx, node))
    }
}

/// Left-node-right iteration; yields keys in non-decreasing order.
pub struct InorderIter<'a> {
    tree: &'a BstArena,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> InorderIter<'a> {
    fn new(tree: &'a BstArena) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            current: tree.root(),
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = (Index, &'a BstNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.tree.get_node(idx).and_then(|n| n.left);
        }
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        self.current = node.right;
        Some((current_idx, node))
    }
}

/// Left-right-node iteration.
pub struct PostorderIter<'a> {
    tree: &'a BstArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostorderIter<'a> {
    fn new(tree: &'a BstArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostorderIter<'a> {
    type Item = (Index, &'a BstNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    if let Some(right) = node.right {
                        self.stack.push((right, false));
                    }
                    if let Some(left) = node.left {
                        self.stack.push((left, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_inserting_then_value_becomes_root() {
        let mut tree = BstArena::new();
        let idx = tree.insert(42);

        assert_eq!(tree.root(), Some(idx));
        let root = tree.get_node(idx).unwrap();
        assert_eq!(root.value, 42);
        assert_eq!(root.path_id, ROOT_PATH_ID);
    }

    #[test]
    fn given_duplicate_values_when_inserting_then_second_goes_right() {
        let tree = BstArena::from_sequence(&[5, 5]);

        let root = tree.root().and_then(|r| tree.get_node(r)).unwrap();
        assert!(root.left.is_none());
        let right = root.right.and_then(|r| tree.get_node(r)).unwrap();
        assert_eq!(right.value, 5);
        assert_eq!(right.path_id, "1R");
    }

    #[test]
    fn given_empty_tree_when_traversing_then_sequence_is_empty() {
        let tree = BstArena::new();
        for order in [Order::Preorder, Order::Inorder, Order::Postorder] {
            assert!(tree.traverse(order).is_empty());
        }
    }
}
