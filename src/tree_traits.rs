//! Console rendering of classification trees.

use termtree::Tree;

use crate::arena::{BinaryTree, Index};

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for BinaryTree {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_tree(self, root),
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}

// Children render left (yes branch) before right (no branch).
fn build_tree(tree: &BinaryTree, idx: Index) -> Tree<String> {
    let label = tree
        .get_node(idx)
        .map(|node| node.element().prompt().to_string())
        .unwrap_or_default();
    let mut rendered = Tree::new(label);
    if let Some(node) = tree.get_node(idx) {
        if let Some(left) = node.left() {
            rendered.push(build_tree(tree, left));
        }
        if let Some(right) = node.right() {
            rendered.push(build_tree(tree, right));
        }
    }
    rendered
}
