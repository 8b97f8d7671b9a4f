use generational_arena::Arena;
use tracing::instrument;

pub use generational_arena::Index;

use crate::datum::{Datum, Side};
use crate::errors::{TreeError, TreeResult};

/// Tree node in the arena-based binary tree.
///
/// The parent link is a non-owning back-reference; ownership runs strictly
/// root-to-leaf through the child slots.
#[derive(Debug)]
pub struct BinaryNode {
    element: Datum,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl BinaryNode {
    pub fn element(&self) -> &Datum {
        &self.element
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn left(&self) -> Option<Index> {
        self.left
    }

    pub fn right(&self) -> Option<Index> {
        self.right
    }

    /// A node is external (a leaf) iff both child slots are empty.
    pub fn is_external(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree with exclusive tree-wide ownership.
///
/// Node handles are arena indices. Removing a node invalidates its index via
/// the arena's generation check, so handles to removed nodes fail
/// [`BinaryTree::validate`] instead of aliasing a recycled slot.
#[derive(Debug)]
pub struct BinaryTree {
    arena: Arena<BinaryNode>,
    root: Option<Index>,
    size: usize,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Current root node, None for the empty tree.
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree. O(1).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Central guard: every relation and mutation validates its handle here.
    ///
    /// Fails when the index misses the arena (removed node, foreign handle)
    /// or when the node carries no parent link yet is not the root, i.e. it
    /// was detached but is still being referenced.
    pub fn validate(&self, p: Index) -> TreeResult<&BinaryNode> {
        let node = self.arena.get(p).ok_or(TreeError::InvalidNode)?;
        if node.parent.is_none() && self.root != Some(p) {
            return Err(TreeError::InvalidNode);
        }
        Ok(node)
    }

    fn node_mut(&mut self, p: Index) -> TreeResult<&mut BinaryNode> {
        self.validate(p)?;
        self.arena.get_mut(p).ok_or(TreeError::InvalidNode)
    }

    /// Raw node access without validation, for walking nodes a traversal has
    /// already reached through the child links.
    pub fn get_node(&self, p: Index) -> Option<&BinaryNode> {
        self.arena.get(p)
    }

    pub fn element(&self, p: Index) -> TreeResult<&Datum> {
        Ok(&self.validate(p)?.element)
    }

    pub fn element_mut(&mut self, p: Index) -> TreeResult<&mut Datum> {
        Ok(&mut self.node_mut(p)?.element)
    }

    /// Parent of `p`, None when `p` is the root.
    pub fn parent(&self, p: Index) -> TreeResult<Option<Index>> {
        Ok(self.validate(p)?.parent)
    }

    pub fn left(&self, p: Index) -> TreeResult<Option<Index>> {
        Ok(self.validate(p)?.left)
    }

    pub fn right(&self, p: Index) -> TreeResult<Option<Index>> {
        Ok(self.validate(p)?.right)
    }

    /// The other child of `p`'s parent; None for the root or an only child.
    pub fn sibling(&self, p: Index) -> TreeResult<Option<Index>> {
        let node = self.validate(p)?;
        let parent = match node.parent {
            Some(parent) => parent,
            None => return Ok(None),
        };
        let parent_node = self.validate(parent)?;
        if parent_node.left == Some(p) {
            Ok(parent_node.right)
        } else {
            Ok(parent_node.left)
        }
    }

    /// Children of `p` in left-then-right order, absent children omitted.
    pub fn children(&self, p: Index) -> TreeResult<Vec<Index>> {
        let node = self.validate(p)?;
        let mut children = Vec::with_capacity(2);
        if let Some(left) = node.left {
            children.push(left);
        }
        if let Some(right) = node.right {
            children.push(right);
        }
        Ok(children)
    }

    pub fn num_children(&self, p: Index) -> TreeResult<usize> {
        Ok(self.children(p)?.len())
    }

    pub fn is_internal(&self, p: Index) -> TreeResult<bool> {
        Ok(!self.validate(p)?.is_external())
    }

    pub fn is_external(&self, p: Index) -> TreeResult<bool> {
        Ok(self.validate(p)?.is_external())
    }

    pub fn is_root(&self, p: Index) -> TreeResult<bool> {
        self.validate(p)?;
        Ok(self.root == Some(p))
    }

    /// Distance from `p` to the root via parent links. O(depth).
    pub fn depth(&self, p: Index) -> TreeResult<usize> {
        let mut node = self.validate(p)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.validate(parent)?;
            depth += 1;
        }
        Ok(depth)
    }

    /// Number of nodes in the subtree rooted at `p`, counting `p` itself.
    pub fn subtree_size(&self, p: Index) -> TreeResult<usize> {
        self.validate(p)?;
        let mut count = 0;
        let mut stack = vec![p];
        while let Some(idx) = stack.pop() {
            let node = self.arena.get(idx).ok_or(TreeError::InvalidNode)?;
            count += 1;
            if let Some(left) = node.left {
                stack.push(left);
            }
            if let Some(right) = node.right {
                stack.push(right);
            }
        }
        Ok(count)
    }

    /// Replaces the entire tree with a single-node tree containing `item`,
    /// or clears the tree when `item` is None. The prior tree is destroyed
    /// either way; outstanding handles into it become invalid.
    #[instrument(level = "debug", skip(self, item))]
    pub fn set_root(&mut self, item: Option<Datum>) -> Option<Index> {
        self.arena.clear();
        match item {
            Some(element) => {
                let root = self.arena.insert(BinaryNode {
                    element,
                    parent: None,
                    left: None,
                    right: None,
                });
                self.root = Some(root);
                self.size = 1;
                Some(root)
            }
            None => {
                self.root = None;
                self.size = 0;
                None
            }
        }
    }

    /// Creates a new left child under `p`.
    #[instrument(level = "trace", skip(self, item))]
    pub fn add_left(&mut self, p: Index, item: Datum) -> TreeResult<Index> {
        if self.validate(p)?.left.is_some() {
            return Err(TreeError::SlotOccupied { side: Side::Left });
        }
        let child = self.arena.insert(BinaryNode {
            element: item,
            parent: Some(p),
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(p) {
            node.left = Some(child);
        }
        self.size += 1;
        Ok(child)
    }

    /// Creates a new right child under `p`.
    #[instrument(level = "trace", skip(self, item))]
    pub fn add_right(&mut self, p: Index, item: Datum) -> TreeResult<Index> {
        if self.validate(p)?.right.is_some() {
            return Err(TreeError::SlotOccupied { side: Side::Right });
        }
        let child = self.arena.insert(BinaryNode {
            element: item,
            parent: Some(p),
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(p) {
            node.right = Some(child);
        }
        self.size += 1;
        Ok(child)
    }

    /// Convenience insertion under a node with at most one child: fills the
    /// left slot first, else the right slot.
    #[instrument(level = "trace", skip(self, item))]
    pub fn insert(&mut self, item: Datum, p: Index) -> TreeResult<Index> {
        let node = self.validate(p)?;
        if node.left.is_some() && node.right.is_some() {
            return Err(TreeError::NodeFull);
        }
        if item == node.element {
            return Err(TreeError::DuplicateElement);
        }
        if node.left.is_none() {
            self.add_left(p, item)
        } else {
            self.add_right(p, item)
        }
    }

    /// Overwrites the element of `p` in place.
    pub fn set(&mut self, p: Index, item: Datum) -> TreeResult<()> {
        self.node_mut(p)?.element = item;
        Ok(())
    }

    /// Leftmost node of the subtree rooted at `p`.
    pub fn min_value(&self, p: Index) -> TreeResult<Index> {
        let mut current = p;
        loop {
            match self.validate(current)?.left {
                Some(left) => current = left,
                None => return Ok(current),
            }
        }
    }

    /// Removes the leftmost node of the subtree rooted at `p`, splicing its
    /// right child (if any) into its place.
    pub fn remove_min(&mut self, p: Index) -> TreeResult<()> {
        let min = self.min_value(p)?;
        let replacement = self.validate(min)?.right;
        self.unlink(min, replacement);
        Ok(())
    }

    /// Removes `item` from the subtree rooted at `p` using an ordered search:
    /// descend left when `item` compares less than the visited element, right
    /// when greater, match on equal. Ordinal ties are a match regardless of
    /// prompt. Returns false when the search falls off an absent child.
    ///
    /// A matched leaf is detached (clearing the tree when it is the root), a
    /// match with one child is spliced over, and a match with two children
    /// takes the minimum element of its right subtree before that minimum
    /// node is removed.
    #[instrument(level = "debug", skip(self, item))]
    pub fn remove(&mut self, item: &Datum, p: Index) -> TreeResult<bool> {
        let mut current = p;
        loop {
            let node = self.validate(current)?;
            match item.cmp(&node.element) {
                std::cmp::Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => return Ok(false),
                },
                std::cmp::Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => return Ok(false),
                },
                std::cmp::Ordering::Equal => break,
            }
        }

        let (left, right) = {
            let node = self.validate(current)?;
            (node.left, node.right)
        };
        match (left, right) {
            (None, None) => self.unlink(current, None),
            (Some(child), None) | (None, Some(child)) => self.unlink(current, Some(child)),
            (Some(_), Some(right)) => {
                let min = self.min_value(right)?;
                let min_element = self.validate(min)?.element.clone();
                if let Some(node) = self.arena.get_mut(current) {
                    node.element = min_element;
                }
                self.remove_min(right)?;
            }
        }
        Ok(true)
    }

    /// True for the root or for any childless node.
    ///
    /// The name is a historical misnomer carried over from the original tree
    /// contract: no ordering among siblings is tracked, so this reports
    /// "childless or root", not "last sibling".
    pub fn is_last_child(&self, p: Index) -> TreeResult<bool> {
        let node = self.validate(p)?;
        if self.root == Some(p) {
            return Ok(true);
        }
        Ok(node.is_external())
    }

    // Replaces `node`'s position with `replacement` (possibly none) and
    // releases `node`. The replacement keeps its own subtree.
    fn unlink(&mut self, node: Index, replacement: Option<Index>) {
        let parent = self.arena.get(node).and_then(|n| n.parent);
        if let Some(rep) = replacement {
            if let Some(rep_node) = self.arena.get_mut(rep) {
                rep_node.parent = parent;
            }
        }
        match parent {
            Some(parent_idx) => {
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    if parent_node.left == Some(node) {
                        parent_node.left = replacement;
                    } else if parent_node.right == Some(node) {
                        parent_node.right = replacement;
                    }
                }
            }
            None => self.root = replacement,
        }
        self.arena.remove(node);
        self.size -= 1;
    }
}
