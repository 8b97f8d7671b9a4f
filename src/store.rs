//! Load and save of classification trees in the flat line record format.
//!
//! One node per line:
//!
//! ```text
//! DATUM:<number>:<side>:<prompt text>
//! ```
//!
//! The number is the canonical in-order index assigned on save; the side
//! marker records the node's slot relative to its parent at save time. On
//! load the shape is rebuilt purely from the numbers (smaller descends left,
//! larger right) and the side marker is parsed but never consulted. Prompts
//! are written raw: the format has no escaping, so a prompt containing a
//! newline corrupts the file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use colored::Colorize;
use tracing::{debug, instrument, warn};

use crate::arena::{BinaryTree, Index};
use crate::commands::{EnumeratedSaveCommand, EnumerationCommand, TraversalCommand};
use crate::datum::{Datum, Side};
use crate::errors::{TreeError, TreeResult};
use crate::tree_queue::BreadthFirstTraversal;
use crate::tree_stack::DepthFirstTraversal;

/// Tag identifying a node record line. Written on save; not consulted on
/// load, where only the field positions matter.
pub const RECORD_TAG: &str = "DATUM";

pub const RECORD_SEPARATOR: char = ':';

/// Starter tree used when the primary data file cannot be read.
pub const DEFAULT_DATASET: &str = "\
DATUM:1:ROOT:warm-blooded
DATUM:0:LEFT:a mammal
DATUM:2:RIGHT:a bird
";

pub fn format_record(number: i32, side: Side, prompt: &str) -> String {
    format!(
        "{RECORD_TAG}{RECORD_SEPARATOR}{number}{RECORD_SEPARATOR}{side}{RECORD_SEPARATOR}{prompt}"
    )
}

/// Parses one record line. Everything after the third separator is the
/// prompt, so separator characters inside the prompt survive the load even
/// though the format never escapes them.
pub fn parse_record(line: &str, lineno: usize) -> TreeResult<Datum> {
    let mut fields = line.splitn(4, RECORD_SEPARATOR);
    let _tag = fields.next();
    let number = fields
        .next()
        .ok_or_else(|| invalid(lineno, "missing number field"))?;
    let side = fields
        .next()
        .ok_or_else(|| invalid(lineno, "missing side field"))?;
    let prompt = fields
        .next()
        .ok_or_else(|| invalid(lineno, "missing prompt field"))?;

    let number: i32 = number
        .trim()
        .parse()
        .map_err(|_| invalid(lineno, "number is not an integer"))?;

    let mut datum = Datum::with_number(prompt, number);
    datum.set_side(Side::parse(side));
    Ok(datum)
}

fn invalid(line: usize, reason: &str) -> TreeError {
    TreeError::InvalidRecord {
        line,
        reason: reason.to_string(),
    }
}

#[instrument]
pub fn load(path: &Path) -> TreeResult<BinaryTree> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Loads the tree at `path`, degrading gracefully on I/O failure: the
/// embedded starter dataset is used instead. Parse failures still propagate.
#[instrument]
pub fn load_or_default(path: &Path) -> TreeResult<BinaryTree> {
    match load(path) {
        Ok(tree) => Ok(tree),
        Err(TreeError::Io(e)) => {
            warn!(path = %path.display(), error = %e, "cannot read data file, using built-in dataset");
            println!(
                "{}",
                "Could not read the specified file. Loading the built-in starter tree instead."
                    .yellow()
            );
            from_str(DEFAULT_DATASET)
        }
        Err(e) => Err(e),
    }
}

pub fn from_str(records: &str) -> TreeResult<BinaryTree> {
    from_reader(records.as_bytes())
}

pub fn from_reader<R: BufRead>(reader: R) -> TreeResult<BinaryTree> {
    let mut datums = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        datums.push(parse_record(&line, lineno + 1)?);
    }
    build_tree(datums)
}

// The first record becomes the root; every later record descends by ordinal
// comparison and attaches at the first empty slot.
fn build_tree(datums: Vec<Datum>) -> TreeResult<BinaryTree> {
    let mut tree = BinaryTree::new();
    for datum in datums {
        match tree.root() {
            None => {
                tree.set_root(Some(datum));
            }
            Some(root) => insert_datum(&mut tree, datum, root)?,
        }
    }
    debug!(size = tree.size(), "tree built");
    Ok(tree)
}

/// Ordinal-ordered insertion: smaller numbers descend left, larger right.
/// A record whose number ties a visited node is dropped, as the original
/// format never produces duplicates on save.
pub fn insert_datum(tree: &mut BinaryTree, datum: Datum, p: Index) -> TreeResult<()> {
    let mut current = p;
    loop {
        let number = tree.element(current)?.number();
        if datum.number() < number {
            match tree.left(current)? {
                Some(left) => current = left,
                None => {
                    tree.add_left(current, datum)?;
                    return Ok(());
                }
            }
        } else if datum.number() > number {
            match tree.right(current)? {
                Some(right) => current = right,
                None => {
                    tree.add_right(current, datum)?;
                    return Ok(());
                }
            }
        } else {
            debug!(number = datum.number(), "dropping record with duplicate ordinal");
            return Ok(());
        }
    }
}

/// Saves the tree: an in-order pass assigns the canonical numbering, then a
/// breadth-first pass writes one record per node in level order.
#[instrument(skip(tree))]
pub fn save(tree: &mut BinaryTree, path: &Path) -> TreeResult<()> {
    let file = File::create(path)?;
    to_writer(tree, BufWriter::new(file))
}

pub fn to_writer<W: Write>(tree: &mut BinaryTree, mut writer: W) -> TreeResult<()> {
    let mut enumerate = EnumerationCommand::new();
    let visits = DepthFirstTraversal::in_order(tree).traverse();
    for node in visits {
        enumerate.execute(tree, node)?;
    }

    let mut save_command = EnumeratedSaveCommand::new(&mut writer);
    let visits = BreadthFirstTraversal::new(tree).traverse();
    for node in visits {
        save_command.execute(tree, node)?;
    }
    writer.flush()?;
    Ok(())
}
