//! Visitor commands applied per node while iterating a traversal snapshot.
//!
//! The traversal framework never invokes commands itself: the caller takes a
//! snapshot and applies a command to each visited node. Commands carry
//! mutable state and must not be shared across overlapping traversals.

use std::io::Write;

use crate::arena::{BinaryTree, Index};
use crate::datum::Side;
use crate::errors::TreeResult;
use crate::store;

pub trait TraversalCommand {
    fn execute(&mut self, tree: &mut BinaryTree, node: Index) -> TreeResult<()>;
}

/// Assigns a strictly increasing number, starting at 0, to each visited
/// node's element. Driven by an in-order traversal this produces the
/// canonical left-to-right numbering used by the persisted format.
#[derive(Debug, Default)]
pub struct EnumerationCommand {
    current: i32,
}

impl EnumerationCommand {
    pub fn new() -> Self {
        Self { current: 0 }
    }
}

impl TraversalCommand for EnumerationCommand {
    fn execute(&mut self, tree: &mut BinaryTree, node: Index) -> TreeResult<()> {
        tree.element_mut(node)?.set_number(self.current);
        self.current += 1;
        Ok(())
    }
}

/// Writes one record line per visited node. Driven by a breadth-first
/// traversal this emits the tree in level order.
pub struct EnumeratedSaveCommand<W: Write> {
    writer: W,
}

impl<W: Write> EnumeratedSaveCommand<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraversalCommand for EnumeratedSaveCommand<W> {
    fn execute(&mut self, tree: &mut BinaryTree, node: Index) -> TreeResult<()> {
        let side = side_of(tree, node)?;
        let element = tree.element(node)?;
        writeln!(
            self.writer,
            "{}",
            store::format_record(element.number(), side, element.prompt())
        )?;
        Ok(())
    }
}

/// Save-time side lookup: whether `node` sits in its parent's left or right
/// slot, or is the root. Recomputed from parent relations, never stored.
pub fn side_of(tree: &BinaryTree, node: Index) -> TreeResult<Side> {
    match tree.parent(node)? {
        None => Ok(Side::Root),
        Some(parent) => {
            if tree.left(parent)? == Some(node) {
                Ok(Side::Left)
            } else {
                Ok(Side::Right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum::Datum;

    #[test]
    fn enumeration_counter_persists_across_calls() {
        let mut tree = BinaryTree::new();
        let root = tree
            .set_root(Some(Datum::with_number("warm-blooded", 7)))
            .expect("root");
        let left = tree.add_left(root, Datum::with_number("a mammal", 3)).unwrap();

        let mut command = EnumerationCommand::new();
        command.execute(&mut tree, left).unwrap();
        command.execute(&mut tree, root).unwrap();

        assert_eq!(tree.element(left).unwrap().number(), 0);
        assert_eq!(tree.element(root).unwrap().number(), 1);
    }

    #[test]
    fn side_is_recomputed_from_parent_relations() {
        let mut tree = BinaryTree::new();
        let root = tree.set_root(Some(Datum::with_number("q", 1))).expect("root");
        let left = tree.add_left(root, Datum::with_number("yes", 0)).unwrap();
        let right = tree.add_right(root, Datum::with_number("no", 2)).unwrap();

        assert_eq!(side_of(&tree, root).unwrap(), Side::Root);
        assert_eq!(side_of(&tree, left).unwrap(), Side::Left);
        assert_eq!(side_of(&tree, right).unwrap(), Side::Right);
    }
}
