//! Interactive identification sessions over a classification tree.
//!
//! The session walks the tree from the root: a yes answer descends left, a
//! no answer descends right. A yes at a leaf is a successful identification;
//! a no at a leaf extends the tree in place with the animal the user was
//! thinking of.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, instrument};

use crate::arena::{BinaryTree, Index};
use crate::datum::Datum;

/// Runs one identification session, mutating the tree when the user teaches
/// it a new animal. Generic over the streams so sessions can be scripted.
#[instrument(skip_all)]
pub fn identify<R: BufRead, W: Write>(
    tree: &mut BinaryTree,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let mut current = match tree.root() {
        Some(root) => root,
        None => bail!("cannot identify with an empty tree"),
    };
    loop {
        let question = format!("Is this animal {}? (Y/N) > ", tree.element(current)?.prompt());
        if prompt_yes_no(input, output, &question)? {
            match tree.left(current)? {
                Some(left) => current = left,
                None => {
                    writeln!(output, "Found your animal!")?;
                    return Ok(());
                }
            }
        } else {
            match tree.right(current)? {
                Some(right) => current = right,
                None => return extend(tree, current, input, output),
            }
        }
    }
}

// The failed leaf becomes a new question: the old answer moves to the
// no-branch, the new animal takes the yes-branch. Exactly this call order;
// the leaf must gain both children before its element is overwritten.
fn extend<R: BufRead, W: Write>(
    tree: &mut BinaryTree,
    leaf: Index,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let known = tree.element(leaf)?.prompt().to_string();
    writeln!(
        output,
        "I don't know about an animal with these characteristics that isn't {known}."
    )?;
    let animal = prompt_line(input, output, "What is the new animal? > ")?;
    let characteristic = prompt_line(
        input,
        output,
        &format!("What characteristic does a {animal} have that {known} does not? > "),
    )?;

    tree.add_right(leaf, Datum::new(known))?;
    tree.add_left(leaf, Datum::new(format!("a {animal}")))?;
    tree.set(leaf, Datum::new(characteristic))?;
    debug!(size = tree.size(), "tree extended");
    Ok(())
}

/// Prints `prompt` on its own line and reads the next input line, trimmed.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("cannot read from input")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Asks until the user answers Y or N (case-insensitive).
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool> {
    loop {
        let answer = prompt_line(input, output, prompt)?.to_uppercase();
        match answer.as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(output, "Please answer Y or N.")?,
        }
    }
}
