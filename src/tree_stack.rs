//! Depth-first traversals driven by an explicit stack.
//!
//! One driver serves all three visit orders; the order only changes the push
//! sequence. The (index, expanded) pairs on the stack mark whether a node's
//! children have already been scheduled, so no call-stack recursion is needed
//! even for degenerate, very deep trees.

use tracing::instrument;

use crate::arena::{BinaryTree, Index};
use crate::errors::{TreeError, TreeResult};

/// Visit order of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFirstOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

/// Depth-first traversal of a [`BinaryTree`] in a fixed [`DepthFirstOrder`].
pub struct DepthFirstTraversal<'a> {
    tree: &'a BinaryTree,
    order: DepthFirstOrder,
}

impl<'a> DepthFirstTraversal<'a> {
    pub fn new(tree: &'a BinaryTree, order: DepthFirstOrder) -> Self {
        Self { tree, order }
    }

    pub fn pre_order(tree: &'a BinaryTree) -> Self {
        Self::new(tree, DepthFirstOrder::PreOrder)
    }

    pub fn in_order(tree: &'a BinaryTree) -> Self {
        Self::new(tree, DepthFirstOrder::InOrder)
    }

    pub fn post_order(tree: &'a BinaryTree) -> Self {
        Self::new(tree, DepthFirstOrder::PostOrder)
    }

    /// Snapshot of the whole tree in this traversal's order. An empty tree
    /// yields an empty sequence without error.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse(&self) -> Vec<Index> {
        let mut snapshot = Vec::new();
        if let Some(root) = self.tree.root() {
            self.subtree(root, &mut snapshot);
        }
        snapshot
    }

    /// Snapshot restricted to the subtree rooted at `start`.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse_from(&self, start: Index) -> TreeResult<Vec<Index>> {
        self.tree
            .validate(start)
            .map_err(|_| TreeError::InvalidStart)?;
        let mut snapshot = Vec::new();
        self.subtree(start, &mut snapshot);
        Ok(snapshot)
    }

    fn subtree(&self, start: Index, snapshot: &mut Vec<Index>) {
        let mut stack = vec![(start, false)];
        while let Some((idx, expanded)) = stack.pop() {
            if expanded {
                snapshot.push(idx);
                continue;
            }
            let node = match self.tree.get_node(idx) {
                Some(node) => node,
                None => continue,
            };
            // Pushes are in reverse of the desired visit order.
            match self.order {
                DepthFirstOrder::PreOrder => {
                    if let Some(right) = node.right() {
                        stack.push((right, false));
                    }
                    if let Some(left) = node.left() {
                        stack.push((left, false));
                    }
                    snapshot.push(idx);
                }
                DepthFirstOrder::InOrder => {
                    if let Some(right) = node.right() {
                        stack.push((right, false));
                    }
                    stack.push((idx, true));
                    if let Some(left) = node.left() {
                        stack.push((left, false));
                    }
                }
                DepthFirstOrder::PostOrder => {
                    stack.push((idx, true));
                    if let Some(right) = node.right() {
                        stack.push((right, false));
                    }
                    if let Some(left) = node.left() {
                        stack.push((left, false));
                    }
                }
            }
        }
    }
}
