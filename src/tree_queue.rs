//! Iterative breadth-first traversal using the two-queue technique.

use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::{BinaryTree, Index};
use crate::errors::{TreeError, TreeResult};

/// Level-order traversal of a [`BinaryTree`].
///
/// Each call produces a finite snapshot sequence: nodes at depth d appear
/// before any node at depth d + 1, ties within a level broken left before
/// right. The snapshot is not restartable; take a new one after mutating the
/// tree.
pub struct BreadthFirstTraversal<'a> {
    tree: &'a BinaryTree,
}

impl<'a> BreadthFirstTraversal<'a> {
    pub fn new(tree: &'a BinaryTree) -> Self {
        Self { tree }
    }

    /// Level-order snapshot of the whole tree. An empty tree yields an empty
    /// sequence without error.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse(&self) -> Vec<Index> {
        match self.tree.root() {
            Some(root) => self.level_order(root),
            None => Vec::new(),
        }
    }

    /// Level-order snapshot restricted to the subtree rooted at `start`.
    #[instrument(level = "trace", skip(self))]
    pub fn traverse_from(&self, start: Index) -> TreeResult<Vec<Index>> {
        self.tree
            .validate(start)
            .map_err(|_| TreeError::InvalidStart)?;
        Ok(self.level_order(start))
    }

    // Two queues: the work queue drains front-to-back into the snapshot while
    // children are enqueued left before right.
    fn level_order(&self, start: Index) -> Vec<Index> {
        let mut snapshot = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(idx) = queue.pop_front() {
            if let Some(node) = self.tree.get_node(idx) {
                snapshot.push(idx);
                if let Some(left) = node.left() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right() {
                    queue.push_back(right);
                }
            }
        }
        snapshot
    }
}
