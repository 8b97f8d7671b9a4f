//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Console classification tree: identify animals through yes/no questions
#[derive(Parser, Debug)]
#[command(name = "rsclass")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print version information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run interactive identification sessions
    Identify {
        /// Saved tree records (default: configured data file, else built-in)
        #[arg(value_hint = ValueHint::FilePath)]
        source_path: Option<PathBuf>,

        /// Save the updated tree here instead of prompting
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Show the question tree
    Tree {
        /// Saved tree records
        #[arg(value_hint = ValueHint::FilePath)]
        source_path: Option<PathBuf>,
    },

    /// List the answers (leaf prompts) in level order
    Leaves {
        /// Saved tree records
        #[arg(value_hint = ValueHint::FilePath)]
        source_path: Option<PathBuf>,
    },
}
