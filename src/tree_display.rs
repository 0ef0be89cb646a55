//! ASCII tree rendering via termtree.

use generational_arena::Index;
use termtree::Tree;

use crate::bst::BstArena;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for BstArena {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let label = self
                .get_node(root_idx)
                .map(|n| n.to_string())
                .unwrap_or_default();
            let mut tree = Tree::new(label);

            fn build_tree(arena: &BstArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for child_idx in [node.left, node.right].into_iter().flatten() {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.to_string());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("(empty)".to_string())
        }
    }
}
