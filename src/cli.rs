use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::DEFAULT_OUTPUT;

#[derive(Parser, Debug)]
#[command(name = "treesnap")]
#[command(
    about = "Write a deterministic plain-text snapshot of a directory tree",
    long_about = None
)]
pub struct Cli {
    /// Root directory to snapshot (defaults to current directory)
    pub path: Option<PathBuf>,

    /// File the tree is written to
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the tree to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Directory name to prune, matched exactly (repeatable)
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Substring that excludes any filename containing it (repeatable)
    #[arg(
        short = 'p',
        long = "exclude-pattern",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pub exclude_patterns: Vec<String>,

    /// Start from empty exclusion sets instead of the built-in ones
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Keep going when a subdirectory cannot be listed, showing it empty
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
