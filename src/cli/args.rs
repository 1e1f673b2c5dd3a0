//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Family tree kinship queries: parents, ancestors and cousins
#[derive(Parser, Debug)]
#[command(name = "kinship")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Family definition (TOML)
    #[arg(short, long, global = true, env = "KINSHIP_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Explicit config file (layered over the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the cousin relationship between two members
    Cousin { a: String, b: String },

    /// Is PARENT the parent of CHILD?
    Parent { parent: String, child: String },

    /// Is CHILD a child of PARENT?
    Child { child: String, parent: String },

    /// Does DESCENDANT descend from ANCESTOR?
    Descendant {
        descendant: String,
        ancestor: String,
    },

    /// Generations below the founder's children (founder is -1)
    Distance { name: String },

    /// Nearest common ancestor of two members
    Ancestor { a: String, b: String },

    /// Member and all ancestors up to the founder
    Lineage { name: String },

    /// Show family as tree
    Tree,

    /// List members without children
    Leaves,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
}
