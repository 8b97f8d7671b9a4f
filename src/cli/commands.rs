use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, instrument};

use crate::arena::BinaryTree;
use crate::classifier::{identify, prompt_line, prompt_yes_no};
use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::store;
use crate::tree_queue::BreadthFirstTraversal;
use crate::tree_traits::TreeConvert;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Identify { source_path, out }) => {
            _identify(source_path.as_deref(), out.as_deref())
        }
        Some(Commands::Tree { source_path }) => _tree(source_path.as_deref()),
        Some(Commands::Leaves { source_path }) => _leaves(source_path.as_deref()),
        None => Ok(()),
    }
}

fn resolve_source(source_path: Option<&Path>, settings: &Settings) -> Option<PathBuf> {
    source_path
        .map(Path::to_path_buf)
        .or_else(|| settings.data_file.clone())
}

// No source anywhere falls back to the built-in starter tree.
fn load_tree(source: Option<&Path>) -> Result<BinaryTree> {
    let tree = match source {
        Some(path) => store::load_or_default(path)
            .with_context(|| format!("cannot load tree from {}", path.display()))?,
        None => store::from_str(store::DEFAULT_DATASET)?,
    };
    debug!(size = tree.size(), "tree loaded");
    Ok(tree)
}

#[instrument]
fn _identify(source_path: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let settings = Settings::load().context("cannot load settings")?;
    let source = resolve_source(source_path, &settings);
    let mut tree = load_tree(source.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    while prompt_yes_no(
        &mut input,
        &mut output,
        "Do you have another animal to identify? (Y/N) > ",
    )? {
        identify(&mut tree, &mut input, &mut output)?;
    }

    let destination = match out {
        Some(path) => path.to_path_buf(),
        None if settings.auto_save => source
            .clone()
            .ok_or_else(|| anyhow!("auto_save is set but there is no source file"))?,
        None => PathBuf::from(prompt_line(
            &mut input,
            &mut output,
            "Enter a file name to save the tree to > ",
        )?),
    };
    store::save(&mut tree, &destination)
        .with_context(|| format!("cannot save tree to {}", destination.display()))?;
    println!("Saved {} records to {}", tree.size(), destination.display());
    Ok(())
}

#[instrument]
fn _tree(source_path: Option<&Path>) -> Result<()> {
    let settings = Settings::load().context("cannot load settings")?;
    let tree = load_tree(resolve_source(source_path, &settings).as_deref())?;
    println!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument]
fn _leaves(source_path: Option<&Path>) -> Result<()> {
    let settings = Settings::load().context("cannot load settings")?;
    let tree = load_tree(resolve_source(source_path, &settings).as_deref())?;
    for idx in BreadthFirstTraversal::new(&tree).traverse() {
        if tree.is_external(idx)? {
            println!("{}", tree.element(idx)?);
        }
    }
    Ok(())
}
