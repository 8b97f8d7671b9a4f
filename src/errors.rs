use thiserror::Error;

use crate::datum::Side;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node is not in this tree")]
    InvalidNode,

    #[error("node already has a {side} child")]
    SlotOccupied { side: Side },

    #[error("node already has two children")]
    NodeFull,

    #[error("item equals the element of the target node")]
    DuplicateElement,

    #[error("traversal start node is not in this tree")]
    InvalidStart,

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("failed to read or write data file: {0}")]
    Io(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
