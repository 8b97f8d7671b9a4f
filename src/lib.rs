//! Console classification tree: a "20 questions" style animal identifier.
//!
//! A binary decision tree stores yes/no questions at internal nodes and
//! answers at leaves. Interactive sessions walk the tree (yes descends left,
//! no right) and extend it in place when an animal is not recognized. Trees
//! persist in a flat line record format; the canonical numbering is assigned
//! by an in-order pass and records are written in level order.
//!
//! Core layers:
//! - [`arena`]: the binary tree contract over arena-indexed nodes
//! - [`tree_queue`] / [`tree_stack`]: breadth-first and depth-first traversals
//! - [`commands`]: visitor commands applied per traversal snapshot entry
//! - [`store`]: the persisted record format and its load/save passes
//! - [`classifier`]: the interactive session driver

pub mod arena;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod datum;
pub mod errors;
pub mod store;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use arena::{BinaryNode, BinaryTree, Index};
pub use datum::{Datum, Side};
pub use errors::{TreeError, TreeResult};
